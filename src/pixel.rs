//! Single addressable light element
//!
//! A pixel owns its displayed color and the fade towards the next one.

use embassy_time::Duration;

use crate::color::{BLACK, Rgb};
use crate::math8::steps_for;
use crate::transition::StepTransition;

/// One LED with its color transition state
#[derive(Debug, Clone)]
pub struct Pixel {
    color: StepTransition<Rgb>,
}

impl Default for Pixel {
    fn default() -> Self {
        Self::new(BLACK)
    }
}

impl Pixel {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color: StepTransition::new_rgb(color),
        }
    }

    /// Color currently shown
    pub const fn color(&self) -> Rgb {
        self.color.current()
    }

    /// Color the pixel is fading towards (equals [`Pixel::color`] when idle)
    pub fn next_color(&self) -> Rgb {
        self.color.target()
    }

    /// Check if the pixel is mid-fade
    pub const fn is_fading(&self) -> bool {
        self.color.is_transitioning()
    }

    /// Set the color to move to
    ///
    /// With `fade` the move is spread over `duration` in steps of `tick`,
    /// i.e. `ceil(duration / tick)` calls to [`Pixel::update`]. Without it,
    /// or when either interval is zero, the next update snaps.
    pub fn set_next_color(&mut self, color: Rgb, fade: bool, duration: Duration, tick: Duration) {
        let steps = if fade {
            steps_for(duration.as_millis(), tick.as_millis())
        } else {
            1
        };
        self.color.set(color, steps);
    }

    /// Show `color` right away, dropping any fade in progress
    pub fn set_color(&mut self, color: Rgb) {
        self.color.reset(color);
    }

    /// Advance the fade by one refresh tick
    pub fn update(&mut self) {
        self.color.tick();
    }
}
