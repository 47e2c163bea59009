//! Plasma animation
//!
//! Hue field built from summed sine waves over the grid, scrolled through
//! the color wheel one step per cycle.

use libm::{sinf, sqrtf};

use super::{Animate, Cycle, Frame};
use crate::color::{Hsv, hsv2rgb};

/// Default size of each plasma blob, in pixels
pub const DEFAULT_PLASMA_SIZE: f32 = 4.0;

/// Default resolution: 32 gives one full trip around the color wheel
pub const DEFAULT_PLASMA_RESOLUTION: f32 = 32.0;

const PLASMA_PHASES: usize = 256;

#[derive(Debug, Clone)]
pub struct PlasmaAnimation {
    /// Size of each plasma blob
    size: f32,
    /// Number of color bands across the field
    resolution: f32,
}

impl Default for PlasmaAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_PLASMA_SIZE, DEFAULT_PLASMA_RESOLUTION)
    }
}

impl PlasmaAnimation {
    pub const fn new(size: f32, resolution: f32) -> Self {
        Self { size, resolution }
    }

    pub const fn size(&self) -> f32 {
        self.size
    }

    pub const fn resolution(&self) -> f32 {
        self.resolution
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    pub fn set_resolution(&mut self, resolution: f32) {
        self.resolution = resolution;
    }

    /// Field value at `(x, y)`, normalized to 0.0-1.0
    fn field(&self, x: f32, y: f32) -> f32 {
        let size = if self.size > 0.0 { self.size } else { DEFAULT_PLASMA_SIZE };
        let v = sinf(x / size)
            + sinf(y / size)
            + sinf((x + y) / size)
            + sinf(sqrtf(x * x + y * y) / size);
        (v + 4.0) / 8.0
    }
}

impl Animate for PlasmaAnimation {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        let layout = frame.layout();
        let shift = (cycle.index % PLASMA_PHASES) as u8;
        for index in 0..frame.size() {
            let Some(point) = layout.point_of(index) else {
                continue;
            };
            let level = self.field(f32::from(point.x), f32::from(point.y));
            let hue = ((level * self.resolution * 8.0) as u32 & 0xFF) as u8;
            let color = hsv2rgb(Hsv {
                hue: hue.wrapping_add(shift),
                sat: 255,
                val: 255,
            });
            frame.set_one(index, color);
        }
        cycle.advance(0, PLASMA_PHASES);
    }

    fn cycle_len(&self, _num_colors: usize) -> usize {
        PLASMA_PHASES
    }
}
