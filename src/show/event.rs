use alloc::vec::Vec;

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{AnimationSlot, AnimationType, Pattern, PatternAnimation};
use crate::color::Rgb;
use crate::layout::{Offset, Orientation, Point};
use crate::maestro::Settings;
use crate::section::Section;

/// Address of a section inside a Maestro
///
/// `overlay_depth` walks down the overlay chain: 0 is the section itself,
/// 1 its overlay section, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionId {
    pub index: usize,
    pub overlay_depth: u8,
}

impl SectionId {
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            overlay_depth: 0,
        }
    }

    /// Address the overlay `depth` levels below this section
    #[must_use]
    pub const fn overlay(self, depth: u8) -> Self {
        Self {
            index: self.index,
            overlay_depth: depth,
        }
    }

    /// Find the addressed section; missing sections or overlays yield `None`
    pub fn resolve<'a>(&self, sections: &'a mut [Section]) -> Option<&'a mut Section> {
        let mut section = sections.get_mut(self.index)?;
        for _ in 0..self.overlay_depth {
            section = section.overlay_mut()?.section_mut();
        }
        Some(section)
    }
}

/// A single mutation of engine state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleRunning,
    SetRunning(bool),
    SetBrightness(u8),
    /// Change the shared refresh interval
    SetRefreshInterval(Duration),
    /// Switch the animation type; `None` picks the next type
    SetAnimation {
        section: SectionId,
        animation: Option<AnimationType>,
        preserve_cycle_index: bool,
    },
    SetCycleInterval {
        section: SectionId,
        interval: Duration,
        pause: Duration,
    },
    SetColors {
        section: SectionId,
        colors: Vec<Rgb>,
    },
    SetCycleIndex {
        section: SectionId,
        index: usize,
    },
    SetFade {
        section: SectionId,
        fade: bool,
    },
    SetReverse {
        section: SectionId,
        reverse: bool,
    },
    SetOrientation {
        section: SectionId,
        orientation: Orientation,
    },
    /// Switch the section to the pattern animation drawing `pattern`
    SetPattern {
        section: SectionId,
        pattern: Pattern,
    },
    SetOverlayAlpha {
        section: SectionId,
        alpha: u8,
    },
    CanvasDrawPoint {
        section: SectionId,
        point: Point,
    },
    CanvasErasePoint {
        section: SectionId,
        point: Point,
    },
    CanvasDrawRect {
        section: SectionId,
        origin: Point,
        size: Point,
        fill: bool,
    },
    CanvasDrawLine {
        section: SectionId,
        from: Point,
        to: Point,
    },
    CanvasClear {
        section: SectionId,
    },
    CanvasSetScroll {
        section: SectionId,
        rate: Offset,
        interval: Duration,
    },
}

impl Action {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ToggleRunning => "toggle_running",
            Self::SetRunning(_) => "set_running",
            Self::SetBrightness(_) => "set_brightness",
            Self::SetRefreshInterval(_) => "set_refresh_interval",
            Self::SetAnimation { .. } => "set_animation",
            Self::SetCycleInterval { .. } => "set_cycle_interval",
            Self::SetColors { .. } => "set_colors",
            Self::SetCycleIndex { .. } => "set_cycle_index",
            Self::SetFade { .. } => "set_fade",
            Self::SetReverse { .. } => "set_reverse",
            Self::SetOrientation { .. } => "set_orientation",
            Self::SetPattern { .. } => "set_pattern",
            Self::SetOverlayAlpha { .. } => "set_overlay_alpha",
            Self::CanvasDrawPoint { .. } => "canvas_draw_point",
            Self::CanvasErasePoint { .. } => "canvas_erase_point",
            Self::CanvasDrawRect { .. } => "canvas_draw_rect",
            Self::CanvasDrawLine { .. } => "canvas_draw_line",
            Self::CanvasClear { .. } => "canvas_clear",
            Self::CanvasSetScroll { .. } => "canvas_set_scroll",
        }
    }

    /// Target section, for actions that address one
    pub const fn section(&self) -> Option<SectionId> {
        match self {
            Self::ToggleRunning
            | Self::SetRunning(_)
            | Self::SetBrightness(_)
            | Self::SetRefreshInterval(_) => None,
            Self::SetAnimation { section, .. }
            | Self::SetCycleInterval { section, .. }
            | Self::SetColors { section, .. }
            | Self::SetCycleIndex { section, .. }
            | Self::SetFade { section, .. }
            | Self::SetReverse { section, .. }
            | Self::SetOrientation { section, .. }
            | Self::SetPattern { section, .. }
            | Self::SetOverlayAlpha { section, .. }
            | Self::CanvasDrawPoint { section, .. }
            | Self::CanvasErasePoint { section, .. }
            | Self::CanvasDrawRect { section, .. }
            | Self::CanvasDrawLine { section, .. }
            | Self::CanvasClear { section }
            | Self::CanvasSetScroll { section, .. } => Some(*section),
        }
    }

    /// Perform the mutation
    ///
    /// Actions addressing a missing section, overlay or canvas do nothing.
    pub fn apply(&self, sections: &mut [Section], settings: &mut Settings) {
        #[cfg(feature = "esp32-log")]
        println!("[Action.apply] {}", self.as_str());

        match self {
            Self::ToggleRunning => settings.running = !settings.running,
            Self::SetRunning(running) => settings.running = *running,
            Self::SetBrightness(brightness) => settings.brightness = *brightness,
            Self::SetRefreshInterval(interval) => settings.refresh.set(*interval),
            _ => {
                if let Some(section) = self.section().and_then(|id| id.resolve(sections)) {
                    self.apply_to_section(section);
                }
            }
        }
    }

    fn apply_to_section(&self, section: &mut Section) {
        match self {
            Self::SetAnimation {
                animation,
                preserve_cycle_index,
                ..
            } => section.change_animation(*animation, *preserve_cycle_index),
            Self::SetCycleInterval { interval, pause, .. } => {
                section.set_cycle_interval(*interval, *pause);
            }
            Self::SetColors { colors, .. } => section.set_colors(colors),
            Self::SetCycleIndex { index, .. } => section.set_cycle_index(*index),
            Self::SetFade { fade, .. } => section.set_fade(*fade),
            Self::SetReverse { reverse, .. } => section.set_reverse(*reverse),
            Self::SetOrientation { orientation, .. } => section.set_orientation(*orientation),
            Self::SetPattern { pattern, .. } => set_pattern(section, pattern.clone()),
            Self::SetOverlayAlpha { alpha, .. } => {
                if let Some(overlay) = section.overlay_mut() {
                    overlay.set_alpha(*alpha);
                }
            }
            Self::CanvasDrawPoint { point, .. } => {
                if let Some(canvas) = section.canvas_mut() {
                    canvas.draw_point(*point);
                }
            }
            Self::CanvasErasePoint { point, .. } => {
                if let Some(canvas) = section.canvas_mut() {
                    canvas.erase_point(*point);
                }
            }
            Self::CanvasDrawRect {
                origin, size, fill, ..
            } => {
                if let Some(canvas) = section.canvas_mut() {
                    canvas.draw_rect(*origin, *size, *fill);
                }
            }
            Self::CanvasDrawLine { from, to, .. } => {
                if let Some(canvas) = section.canvas_mut() {
                    canvas.draw_line(*from, *to);
                }
            }
            Self::CanvasClear { .. } => {
                if let Some(canvas) = section.canvas_mut() {
                    canvas.clear();
                }
            }
            Self::CanvasSetScroll { rate, interval, .. } => {
                if let Some(canvas) = section.canvas_mut() {
                    canvas.set_scroll(*rate, *interval);
                }
            }
            Self::ToggleRunning
            | Self::SetRunning(_)
            | Self::SetBrightness(_)
            | Self::SetRefreshInterval(_) => {}
        }
    }
}

fn set_pattern(section: &mut Section, pattern: Pattern) {
    if section.animation().map(|animation| animation.kind()) != Some(AnimationType::Pattern) {
        section.change_animation(Some(AnimationType::Pattern), false);
    }
    if let Some(animation) = section.animation_mut() {
        match animation.slot_mut() {
            AnimationSlot::Pattern(slot) => slot.set_pattern(Some(pattern)),
            slot => *slot = AnimationSlot::Pattern(PatternAnimation::new(pattern)),
        }
    }
}

/// An action scheduled at a point in time
#[derive(Debug, Clone)]
pub struct Event {
    time: Duration,
    action: Action,
}

impl Event {
    /// Schedule `action` at `time_ms`
    ///
    /// In an absolute show the time is measured from program start; in a
    /// relative show it is the delay after the previous event fired.
    pub fn new(time_ms: u64, action: Action) -> Self {
        Self {
            time: Duration::from_millis(time_ms),
            action,
        }
    }

    pub const fn time(&self) -> Duration {
        self.time
    }

    pub const fn action(&self) -> &Action {
        &self.action
    }
}
