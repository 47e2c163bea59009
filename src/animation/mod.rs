//! Animation system with compile-time known animation variants
//!
//! All variants are stored in an enum to avoid heap allocations and keep the
//! set exhaustively matchable. Each variant implements the [`Animate`] trait;
//! the shared bookkeeping (cycle position, direction, timing) lives in
//! [`Animation`].

mod cycle;
mod frame;
mod merge;
mod pattern;
mod plasma;
mod random;
mod solid;
mod static_noise;
mod wave;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use cycle::CycleAnimation;
pub use frame::{FadeTiming, Frame, color_index};
pub use merge::MergeAnimation;
pub use pattern::{Pattern, PatternAnimation};
pub use plasma::PlasmaAnimation;
pub use random::{RandomIndexAnimation, SparkleAnimation};
pub use solid::{BlinkAnimation, SolidAnimation};
pub use static_noise::StaticAnimation;
pub use wave::{PongAnimation, WaveAnimation};

use crate::color::BLACK;
use crate::interval::is_due;
use crate::layout::Orientation;

/// Default time between animation cycles
pub const DEFAULT_SPEED: Duration = Duration::from_millis(100);

const ANIMATION_NAME_SOLID: &str = "solid";
const ANIMATION_NAME_BLINK: &str = "blink";
const ANIMATION_NAME_CYCLE: &str = "cycle";
const ANIMATION_NAME_WAVE: &str = "wave";
const ANIMATION_NAME_PONG: &str = "pong";
const ANIMATION_NAME_MERGE: &str = "merge";
const ANIMATION_NAME_PATTERN: &str = "pattern";
const ANIMATION_NAME_SPARKLE: &str = "sparkle";
const ANIMATION_NAME_RANDOM_INDEX: &str = "random_index";
const ANIMATION_NAME_STATIC: &str = "static";
const ANIMATION_NAME_PLASMA: &str = "plasma";
const ANIMATION_NAME_NONE: &str = "none";

const ANIMATION_ID_SOLID: u8 = 0;
const ANIMATION_ID_BLINK: u8 = 1;
const ANIMATION_ID_CYCLE: u8 = 2;
const ANIMATION_ID_WAVE: u8 = 3;
const ANIMATION_ID_PONG: u8 = 4;
const ANIMATION_ID_MERGE: u8 = 5;
const ANIMATION_ID_PATTERN: u8 = 6;
const ANIMATION_ID_SPARKLE: u8 = 7;
const ANIMATION_ID_RANDOM_INDEX: u8 = 8;
const ANIMATION_ID_STATIC: u8 = 9;
const ANIMATION_ID_PLASMA: u8 = 10;
const ANIMATION_ID_NONE: u8 = 11;

pub trait Animate {
    /// Run one animation cycle: write target colors and advance the cycle
    fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>);

    /// Number of distinct cycle positions for a palette of `num_colors`
    fn cycle_len(&self, num_colors: usize) -> usize {
        num_colors
    }
}

/// Cycle position and direction shared by every variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cycle {
    pub index: usize,
    pub reverse: bool,
    pub orientation: Orientation,
}

impl Cycle {
    /// Move one position through `min..max`
    ///
    /// Forward runs wrap from `max - 1` to `min`; reverse runs wrap from
    /// `min` to `max - 1`. Does nothing for an empty range.
    pub fn advance(&mut self, min: usize, max: usize) {
        if max <= min {
            return;
        }
        if self.reverse {
            if self.index <= min || self.index >= max {
                self.index = max - 1;
            } else {
                self.index -= 1;
            }
        } else if self.index >= max - 1 {
            self.index = min;
        } else {
            self.index += 1;
        }
    }
}

/// Known animation types, in declaration order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationType {
    Solid = ANIMATION_ID_SOLID,
    Blink = ANIMATION_ID_BLINK,
    Cycle = ANIMATION_ID_CYCLE,
    Wave = ANIMATION_ID_WAVE,
    Pong = ANIMATION_ID_PONG,
    Merge = ANIMATION_ID_MERGE,
    Pattern = ANIMATION_ID_PATTERN,
    Sparkle = ANIMATION_ID_SPARKLE,
    RandomIndex = ANIMATION_ID_RANDOM_INDEX,
    Static = ANIMATION_ID_STATIC,
    Plasma = ANIMATION_ID_PLASMA,
    None = ANIMATION_ID_NONE,
}

impl AnimationType {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_SOLID => Self::Solid,
            ANIMATION_ID_BLINK => Self::Blink,
            ANIMATION_ID_CYCLE => Self::Cycle,
            ANIMATION_ID_WAVE => Self::Wave,
            ANIMATION_ID_PONG => Self::Pong,
            ANIMATION_ID_MERGE => Self::Merge,
            ANIMATION_ID_PATTERN => Self::Pattern,
            ANIMATION_ID_SPARKLE => Self::Sparkle,
            ANIMATION_ID_RANDOM_INDEX => Self::RandomIndex,
            ANIMATION_ID_STATIC => Self::Static,
            ANIMATION_ID_PLASMA => Self::Plasma,
            ANIMATION_ID_NONE => Self::None,
            _ => return None,
        })
    }

    /// The following type in declaration order
    ///
    /// Skips [`AnimationType::None`] and wraps back to the first type.
    pub fn next(self) -> Self {
        let next = self as u8 + 1;
        match Self::from_raw(next) {
            Some(Self::None) | None => Self::Solid,
            Some(next) => next,
        }
    }

    /// Build the variant with its default parameters
    pub fn to_slot(self) -> AnimationSlot {
        match self {
            Self::Solid => AnimationSlot::Solid(SolidAnimation),
            Self::Blink => AnimationSlot::Blink(BlinkAnimation),
            Self::Cycle => AnimationSlot::Cycle(CycleAnimation),
            Self::Wave => AnimationSlot::Wave(WaveAnimation),
            Self::Pong => AnimationSlot::Pong(PongAnimation),
            Self::Merge => AnimationSlot::Merge(MergeAnimation),
            Self::Pattern => AnimationSlot::Pattern(PatternAnimation::default()),
            Self::Sparkle => AnimationSlot::Sparkle(SparkleAnimation::default()),
            Self::RandomIndex => AnimationSlot::RandomIndex(RandomIndexAnimation::default()),
            Self::Static => AnimationSlot::Static(StaticAnimation::default()),
            Self::Plasma => AnimationSlot::Plasma(PlasmaAnimation::default()),
            Self::None => AnimationSlot::None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => ANIMATION_NAME_SOLID,
            Self::Blink => ANIMATION_NAME_BLINK,
            Self::Cycle => ANIMATION_NAME_CYCLE,
            Self::Wave => ANIMATION_NAME_WAVE,
            Self::Pong => ANIMATION_NAME_PONG,
            Self::Merge => ANIMATION_NAME_MERGE,
            Self::Pattern => ANIMATION_NAME_PATTERN,
            Self::Sparkle => ANIMATION_NAME_SPARKLE,
            Self::RandomIndex => ANIMATION_NAME_RANDOM_INDEX,
            Self::Static => ANIMATION_NAME_STATIC,
            Self::Plasma => ANIMATION_NAME_PLASMA,
            Self::None => ANIMATION_NAME_NONE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_SOLID => Some(Self::Solid),
            ANIMATION_NAME_BLINK => Some(Self::Blink),
            ANIMATION_NAME_CYCLE => Some(Self::Cycle),
            ANIMATION_NAME_WAVE => Some(Self::Wave),
            ANIMATION_NAME_PONG => Some(Self::Pong),
            ANIMATION_NAME_MERGE => Some(Self::Merge),
            ANIMATION_NAME_PATTERN => Some(Self::Pattern),
            ANIMATION_NAME_SPARKLE => Some(Self::Sparkle),
            ANIMATION_NAME_RANDOM_INDEX => Some(Self::RandomIndex),
            ANIMATION_NAME_STATIC => Some(Self::Static),
            ANIMATION_NAME_PLASMA => Some(Self::Plasma),
            ANIMATION_NAME_NONE => Some(Self::None),
            _ => None,
        }
    }
}

/// Animation slot - enum containing all possible variants
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    Solid(SolidAnimation),
    Blink(BlinkAnimation),
    Cycle(CycleAnimation),
    Wave(WaveAnimation),
    Pong(PongAnimation),
    Merge(MergeAnimation),
    Pattern(PatternAnimation),
    Sparkle(SparkleAnimation),
    RandomIndex(RandomIndexAnimation),
    Static(StaticAnimation),
    Plasma(PlasmaAnimation),
    /// Turns every pixel off
    None,
}

impl AnimationSlot {
    /// Get the animation type for external observation
    pub fn kind(&self) -> AnimationType {
        match self {
            Self::Solid(_) => AnimationType::Solid,
            Self::Blink(_) => AnimationType::Blink,
            Self::Cycle(_) => AnimationType::Cycle,
            Self::Wave(_) => AnimationType::Wave,
            Self::Pong(_) => AnimationType::Pong,
            Self::Merge(_) => AnimationType::Merge,
            Self::Pattern(_) => AnimationType::Pattern,
            Self::Sparkle(_) => AnimationType::Sparkle,
            Self::RandomIndex(_) => AnimationType::RandomIndex,
            Self::Static(_) => AnimationType::Static,
            Self::Plasma(_) => AnimationType::Plasma,
            Self::None => AnimationType::None,
        }
    }

    /// Run one cycle of the active variant
    pub fn step(&mut self, cycle: &mut Cycle, frame: &mut Frame<'_>) {
        match self {
            Self::Solid(animation) => animation.step(cycle, frame),
            Self::Blink(animation) => animation.step(cycle, frame),
            Self::Cycle(animation) => animation.step(cycle, frame),
            Self::Wave(animation) => animation.step(cycle, frame),
            Self::Pong(animation) => animation.step(cycle, frame),
            Self::Merge(animation) => animation.step(cycle, frame),
            Self::Pattern(animation) => animation.step(cycle, frame),
            Self::Sparkle(animation) => animation.step(cycle, frame),
            Self::RandomIndex(animation) => animation.step(cycle, frame),
            Self::Static(animation) => animation.step(cycle, frame),
            Self::Plasma(animation) => animation.step(cycle, frame),
            Self::None => frame.set_all(BLACK),
        }
    }

    pub fn cycle_len(&self, num_colors: usize) -> usize {
        match self {
            Self::Solid(animation) => animation.cycle_len(num_colors),
            Self::Blink(animation) => animation.cycle_len(num_colors),
            Self::Cycle(animation) => animation.cycle_len(num_colors),
            Self::Wave(animation) => animation.cycle_len(num_colors),
            Self::Pong(animation) => animation.cycle_len(num_colors),
            Self::Merge(animation) => animation.cycle_len(num_colors),
            Self::Pattern(animation) => animation.cycle_len(num_colors),
            Self::Sparkle(animation) => animation.cycle_len(num_colors),
            Self::RandomIndex(animation) => animation.cycle_len(num_colors),
            Self::Static(animation) => animation.cycle_len(num_colors),
            Self::Plasma(animation) => animation.cycle_len(num_colors),
            Self::None => num_colors,
        }
    }
}

/// An animation variant together with its cycle state and timing
#[derive(Debug, Clone)]
pub struct Animation {
    slot: AnimationSlot,
    cycle: Cycle,
    /// Time between cycles
    speed: Duration,
    /// Part of each cycle during which pixels hold their color
    pause: Duration,
    fade: bool,
    last_cycle: Option<Instant>,
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(AnimationType::Solid)
    }
}

impl Animation {
    /// Create an animation of `kind` with default parameters
    pub fn new(kind: AnimationType) -> Self {
        Self::from_slot(kind.to_slot())
    }

    /// Create an animation from a configured variant
    pub fn from_slot(slot: AnimationSlot) -> Self {
        Self {
            slot,
            cycle: Cycle::default(),
            speed: DEFAULT_SPEED,
            pause: Duration::from_millis(0),
            fade: true,
            last_cycle: None,
        }
    }

    /// Set the cycle interval and pause
    #[must_use]
    pub fn with_speed(mut self, speed: Duration, pause: Duration) -> Self {
        self.set_speed(speed, pause);
        self
    }

    #[must_use]
    pub fn with_fade(mut self, fade: bool) -> Self {
        self.fade = fade;
        self
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.cycle.reverse = reverse;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.cycle.orientation = orientation;
        self
    }

    pub fn kind(&self) -> AnimationType {
        self.slot.kind()
    }

    pub const fn slot(&self) -> &AnimationSlot {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut AnimationSlot {
        &mut self.slot
    }

    pub const fn cycle(&self) -> Cycle {
        self.cycle
    }

    pub const fn cycle_index(&self) -> usize {
        self.cycle.index
    }

    /// Jump to a cycle position
    ///
    /// The index is reduced modulo the variant's cycle length for a palette
    /// of `num_colors` colors.
    pub fn set_cycle_index(&mut self, index: usize, num_colors: usize) {
        let len = self.slot.cycle_len(num_colors);
        self.cycle.index = if len > 0 { index % len } else { index };
    }

    pub const fn speed(&self) -> Duration {
        self.speed
    }

    pub const fn pause(&self) -> Duration {
        self.pause
    }

    /// Set the cycle interval and the pause at the end of each cycle
    ///
    /// A pause makes pixels finish their fade early and hold until the next
    /// cycle. It is capped at `speed`.
    pub fn set_speed(&mut self, speed: Duration, pause: Duration) {
        self.speed = speed;
        self.pause = if pause > speed { speed } else { pause };
    }

    /// Time a pixel fade takes within one cycle
    pub fn fade_duration(&self) -> Duration {
        Duration::from_ticks(self.speed.as_ticks().saturating_sub(self.pause.as_ticks()))
    }

    pub const fn fade(&self) -> bool {
        self.fade
    }

    pub fn set_fade(&mut self, fade: bool) {
        self.fade = fade;
    }

    pub const fn reverse(&self) -> bool {
        self.cycle.reverse
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.cycle.reverse = reverse;
    }

    pub const fn orientation(&self) -> Orientation {
        self.cycle.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.cycle.orientation = orientation;
    }

    /// Swap the variant, keeping timing, fade, direction and orientation
    ///
    /// The cycle index restarts at 0 unless `preserve_cycle_index` is set,
    /// in which case it is kept (reduced into the new variant's range).
    pub fn set_kind(&mut self, kind: AnimationType, preserve_cycle_index: bool, num_colors: usize) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Animation.set_kind] {} -> {}",
            self.kind().as_str(),
            kind.as_str()
        );
        self.slot = kind.to_slot();
        let index = self.cycle.index;
        self.restart();
        if preserve_cycle_index {
            self.set_cycle_index(index, num_colors);
        }
    }

    /// Go back to cycle index 0 and step on the next update
    pub(crate) fn restart(&mut self) {
        self.cycle.index = 0;
        self.last_cycle = None;
    }

    /// Run a cycle if one is due
    ///
    /// Returns `true` when the variant stepped. Nothing runs while the
    /// palette is empty.
    pub fn update(&mut self, now: Instant, frame: &mut Frame<'_>) -> bool {
        if frame.num_colors() == 0 {
            return false;
        }
        if !is_due(self.last_cycle, now, self.speed) {
            return false;
        }

        self.step(frame);
        self.last_cycle = Some(now);
        true
    }

    /// Run one cycle immediately
    pub fn step(&mut self, frame: &mut Frame<'_>) {
        if frame.num_colors() == 0 {
            return;
        }
        self.slot.step(&mut self.cycle, frame);
    }
}
