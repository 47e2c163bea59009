//! Scrolling palette animations
//!
//! - `WaveAnimation`: scrolls the palette across the section in one direction
//! - `PongAnimation`: same formula, bouncing between the palette ends

use super::{Animate, Cycle, Frame};

/// Scrolls the palette along the orientation axis
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveAnimation;

impl Animate for WaveAnimation {
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        frame.paint_positional(cycle.orientation, cycle.index);
        cycle.advance(0, frame.num_colors());
    }
}

/// Scrolls the palette back and forth
///
/// The direction flips when the cycle reaches either end of the palette.
/// An index pushed past the last color counts as the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct PongAnimation;

impl Animate for PongAnimation {
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        let num_colors = frame.num_colors();
        frame.paint_positional(cycle.orientation, cycle.index);

        if cycle.index == 0 {
            cycle.reverse = false;
        }
        if cycle.index >= num_colors.saturating_sub(1) {
            cycle.reverse = true;
        }

        cycle.advance(0, num_colors);
    }
}
