use super::{Animate, Cycle, Frame};

/// Fills the whole section with one palette color, one color per cycle
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleAnimation;

impl Animate for CycleAnimation {
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        if let Some(color) = frame.color_at(cycle.index) {
            frame.set_all(color);
        }
        cycle.advance(0, frame.num_colors());
    }
}
