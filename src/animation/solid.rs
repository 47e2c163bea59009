//! Solid and blink animations
//!
//! Both color each pixel by its column (or row, when vertical).

use super::{Animate, Cycle, Frame};
use crate::color::BLACK;

/// Static palette mapping, no cycling
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidAnimation;

impl Animate for SolidAnimation {
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        frame.paint_positional(cycle.orientation, 0);
    }
}

/// Alternates the solid mapping with black
#[derive(Debug, Clone, Copy, Default)]
pub struct BlinkAnimation;

impl Animate for BlinkAnimation {
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        if cycle.index == 0 {
            frame.paint_positional(cycle.orientation, 0);
        } else {
            frame.set_all(BLACK);
        }

        // Only run for two cycles.
        cycle.advance(0, 2);
    }

    fn cycle_len(&self, _num_colors: usize) -> usize {
        2
    }
}
