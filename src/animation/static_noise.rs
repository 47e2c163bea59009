use super::{Animate, Cycle, Frame};
use crate::color::Rgb;
use crate::rng::{DEFAULT_SEED, hash};

/// Number of distinct noise frames before the static repeats
const STATIC_PHASES: usize = 256;

/// TV-static effect: every pixel gets a gray level
///
/// Levels come from hashing the pixel index with the cycle position, so the
/// noise is deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct StaticAnimation {
    seed: u64,
}

impl Default for StaticAnimation {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl StaticAnimation {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Animate for StaticAnimation {
    #[allow(clippy::cast_possible_truncation)]
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        for index in 0..frame.size() {
            let key = self.seed ^ ((index as u64) << 16) ^ cycle.index as u64;
            let level = (hash(key) & 0xFF) as u8;
            frame.set_one(index, Rgb::new(level, level, level));
        }
        cycle.advance(0, STATIC_PHASES);
    }

    fn cycle_len(&self, _num_colors: usize) -> usize {
        STATIC_PHASES
    }
}
