use crate::color::{Rgb, blend_colors};
use crate::math8::{blend8, progress8};

/// Blends two values of type `T` using a progress value (0-255)
pub type ValueBlender<T> = fn(T, T, u8) -> T;

/// Tick-driven transition for values of type `T`
///
/// Unlike a wall-clock transition this one advances a fixed number of
/// steps, one per [`StepTransition::tick`] call. Step `k` of `n` produces
/// `blend(source, target, k * 255 / n)`; step `n` lands exactly on the
/// target.
#[derive(Debug, Clone)]
pub struct StepTransition<T: Copy> {
    /// Blender function
    blend: ValueBlender<T>,
    /// Current interpolated value
    current: T,
    /// Value at the start of transition
    source: T,
    /// Target value (None if no transition in progress)
    target: Option<T>,
    /// Total number of steps
    steps: u32,
    /// Steps taken so far
    step: u32,
}

impl<T: Copy> StepTransition<T> {
    /// Create a new value transition
    pub const fn new(initial: T, blend: ValueBlender<T>) -> Self {
        Self {
            blend,
            current: initial,
            source: initial,
            target: None,
            steps: 0,
            step: 0,
        }
    }

    /// Get current value
    pub const fn current(&self) -> T {
        self.current
    }

    /// Get the value the transition is heading to
    pub fn target(&self) -> T {
        self.target.unwrap_or(self.current)
    }

    /// Check if a transition is in progress
    pub const fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// Start a transition towards `value` lasting `steps` ticks
    ///
    /// `steps <= 1` makes the next tick jump straight to `value`. The
    /// transition always starts from the current value, so retargeting
    /// mid-flight never jumps.
    pub fn set(&mut self, value: T, steps: u32) {
        self.source = self.current;
        self.target = Some(value);
        self.steps = steps.max(1);
        self.step = 0;
    }

    /// Jump to `value` immediately
    pub fn reset(&mut self, value: T) {
        self.current = value;
        self.source = value;
        self.target = None;
        self.steps = 0;
        self.step = 0;
    }

    /// Advance the transition by one step
    pub fn tick(&mut self) {
        let Some(target) = self.target else {
            return;
        };

        self.step += 1;
        if self.step >= self.steps {
            self.reset(target);
            return;
        }

        let progress = progress8(self.step, self.steps);
        self.current = (self.blend)(self.source, target, progress);
    }
}

impl StepTransition<u8> {
    /// Create a new u8 transition
    pub const fn new_u8(initial: u8) -> Self {
        Self::new(initial, blend8)
    }
}

impl StepTransition<Rgb> {
    /// Create a new rgb transition
    pub const fn new_rgb(initial: Rgb) -> Self {
        Self::new(initial, blend_colors)
    }
}
