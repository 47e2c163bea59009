//! Deterministic pseudo-random numbers
//!
//! SplitMix64 mixing, no floats and no global state, so animations replay
//! identically from the same seed.

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Default seed for animations that were not given one
pub const DEFAULT_SEED: u64 = 0x5eed_1ed5;

/// Simple deterministic hash for noise generation (no floats)
#[inline]
pub const fn hash(x: u64) -> u32 {
    // SplitMix64-style mixing, then fold down to u32.
    let mut z = x.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    #[allow(clippy::cast_possible_truncation)]
    {
        (z ^ (z >> 31)) as u32
    }
}

/// Small, fast generator for per-pixel randomness
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Rng {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        hash(self.state)
    }

    /// Uniform value in `0..bound` (0 when `bound` is 0)
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }
}
