//! Randomized animations
//!
//! Both draw from a seeded [`Rng`], so a given seed always replays the same
//! sequence.

use super::{Animate, Cycle, Frame};
use crate::color::BLACK;
use crate::rng::Rng;

/// Default chance (out of 100) that a pixel stays dark
pub const DEFAULT_SPARKLE_THRESHOLD: u8 = 60;

/// Lights random pixels each cycle
#[derive(Debug, Clone)]
pub struct SparkleAnimation {
    /// A pixel lights up when its roll in `0..100` is above this value
    threshold: u8,
    rng: Rng,
}

impl Default for SparkleAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_SPARKLE_THRESHOLD)
    }
}

impl SparkleAnimation {
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            rng: Rng::default(),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::new(seed);
        self
    }

    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: u8) {
        self.threshold = threshold;
    }
}

impl Animate for SparkleAnimation {
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        let layout = frame.layout();
        for index in 0..frame.size() {
            let Some(point) = layout.point_of(index) else {
                continue;
            };
            if self.rng.below(100) > u32::from(self.threshold) {
                frame.set_indexed(index, usize::from(point.along(cycle.orientation)));
            } else {
                frame.set_one(index, BLACK);
            }
        }
    }
}

/// Gives every pixel a random palette color each cycle
#[derive(Debug, Clone, Default)]
pub struct RandomIndexAnimation {
    rng: Rng,
}

impl RandomIndexAnimation {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::new(seed);
        self
    }
}

impl Animate for RandomIndexAnimation {
    #[allow(clippy::cast_possible_truncation)]
    fn step(&mut self, _cycle: &mut Cycle, frame: &mut Frame<'_>) {
        let num_colors = u32::try_from(frame.num_colors()).unwrap_or(u32::MAX);
        for index in 0..frame.size() {
            let pick = self.rng.below(num_colors) as usize;
            frame.set_indexed(index, pick);
        }
    }
}
