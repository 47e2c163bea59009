//! Maestro - top-level coordinator of sections
//!
//! Owns the sections, the global brightness and refresh interval, and an
//! optional show. Advanced once per external tick with the current time.

use alloc::vec::Vec;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb, scale_color};
use crate::interval::{DEFAULT_REFRESH_INTERVAL, RefreshInterval, is_due};
use crate::section::Section;
use crate::show::{Action, DEFAULT_SHOW_CAPACITY, Show};

/// Maestro configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaestroConfig {
    /// Time between refreshes, shared with every section
    pub refresh_interval: Duration,
    /// Global brightness applied on read (0-255)
    pub brightness: u8,
    /// Start advancing right away
    pub running: bool,
}

impl Default for MaestroConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            brightness: 255,
            running: true,
        }
    }
}

/// Global settings that actions can change
#[derive(Debug)]
pub struct Settings {
    pub brightness: u8,
    pub running: bool,
    pub refresh: RefreshInterval,
}

impl Settings {
    pub fn new(config: &MaestroConfig) -> Self {
        Self {
            brightness: config.brightness,
            running: config.running,
            refresh: RefreshInterval::new(config.refresh_interval),
        }
    }
}

pub struct Maestro<const SHOW_CAPACITY: usize = DEFAULT_SHOW_CAPACITY> {
    sections: Vec<Section>,
    settings: Settings,
    show: Option<Show<SHOW_CAPACITY>>,
    last_refresh: Option<Instant>,
}

impl<const SHOW_CAPACITY: usize> Default for Maestro<SHOW_CAPACITY> {
    fn default() -> Self {
        Self::new(&MaestroConfig::default())
    }
}

impl<const SHOW_CAPACITY: usize> Maestro<SHOW_CAPACITY> {
    pub fn new(config: &MaestroConfig) -> Self {
        Self {
            sections: Vec::new(),
            settings: Settings::new(config),
            show: None,
            last_refresh: None,
        }
    }

    /// Create a Maestro driving `sections`
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.set_sections(sections);
        self
    }

    /// Replace the sections
    ///
    /// Sections without an overridden refresh interval start following the
    /// Maestro's interval.
    pub fn set_sections(&mut self, mut sections: Vec<Section>) {
        let handle = self.settings.refresh.handle();
        for section in &mut sections {
            section.bind_refresh(&handle);
        }
        self.sections = sections;
    }

    /// Append a section and return its index
    pub fn add_section(&mut self, mut section: Section) -> usize {
        section.bind_refresh(&self.settings.refresh.handle());
        self.sections.push(section);
        self.sections.len() - 1
    }

    pub fn num_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    pub const fn brightness(&self) -> u8 {
        self.settings.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.settings.brightness = brightness;
    }

    pub const fn is_running(&self) -> bool {
        self.settings.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.settings.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.settings.running = !self.settings.running;
    }

    pub fn refresh_interval(&self) -> Duration {
        self.settings.refresh.get()
    }

    /// Change the refresh interval of the Maestro and every section following it
    pub fn set_refresh_interval(&mut self, interval: Duration) {
        self.settings.refresh.set(interval);
    }

    pub const fn show(&self) -> Option<&Show<SHOW_CAPACITY>> {
        self.show.as_ref()
    }

    pub fn show_mut(&mut self) -> Option<&mut Show<SHOW_CAPACITY>> {
        self.show.as_mut()
    }

    pub fn set_show(&mut self, show: Show<SHOW_CAPACITY>) -> &mut Show<SHOW_CAPACITY> {
        #[cfg(feature = "esp32-log")]
        println!("[Maestro.set_show] {} event(s)", show.len());
        self.show.insert(show)
    }

    pub fn remove_show(&mut self) -> Option<Show<SHOW_CAPACITY>> {
        self.show.take()
    }

    /// Apply a single action right away
    pub fn apply(&mut self, action: &Action) {
        action.apply(&mut self.sections, &mut self.settings);
    }

    /// Main update routine
    ///
    /// Does nothing while stopped or before the refresh interval elapsed.
    /// Fires due show events, then updates every section.
    pub fn update(&mut self, now: Instant) {
        if !self.settings.running {
            return;
        }
        if !is_due(self.last_refresh, now, self.settings.refresh.get()) {
            return;
        }

        if let Some(show) = self.show.as_mut() {
            for event in show.advance(now) {
                event.action().apply(&mut self.sections, &mut self.settings);
            }
        }

        for section in &mut self.sections {
            section.update(now);
        }

        self.last_refresh = Some(now);
    }

    /// Composited color of a pixel, scaled by the global brightness
    ///
    /// Unknown sections and pixels read as black.
    pub fn get_pixel_color(&self, section: usize, pixel: usize) -> Rgb {
        self.sections.get(section).map_or(BLACK, |section| {
            scale_color(section.get_pixel_color(pixel), self.settings.brightness)
        })
    }

    /// Write the brightness-scaled colors of every section, in order, to `out`
    ///
    /// Returns the number of colors written.
    pub fn render_into(&self, out: &mut [Rgb]) -> usize {
        let colors = self
            .sections
            .iter()
            .flat_map(|section| (0..section.size()).map(move |index| section.get_pixel_color(index)));

        let mut written = 0;
        for (slot, color) in out.iter_mut().zip(colors) {
            *slot = scale_color(color, self.settings.brightness);
            written += 1;
        }
        written
    }

    /// Total number of pixels across all sections
    pub fn total_pixels(&self) -> usize {
        self.sections.iter().map(Section::size).sum()
    }
}
