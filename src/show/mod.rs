//! Show - a timeline of one-shot events
//!
//! Events are kept in firing order with a cursor past the last fired one,
//! so each event fires at most once for the lifetime of the show.

mod event;

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use event::{Action, Event, SectionId};

/// Default maximum number of events in a show
pub const DEFAULT_SHOW_CAPACITY: usize = 32;

/// How event times are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingMode {
    /// Event time is program time; events are kept sorted by time
    #[default]
    Absolute,
    /// Event time is the delay after the previous event fired; events keep
    /// the order they were added in
    Relative,
}

/// Bounded list of events with a firing cursor
#[derive(Debug, Clone)]
pub struct Show<const N: usize = DEFAULT_SHOW_CAPACITY> {
    events: Vec<Event, N>,
    timing: TimingMode,
    cursor: usize,
    /// Time the last event fired (relative timing)
    last_fire: Option<Instant>,
}

impl<const N: usize> Default for Show<N> {
    fn default() -> Self {
        Self::new(TimingMode::default())
    }
}

impl<const N: usize> Show<N> {
    pub const fn new(timing: TimingMode) -> Self {
        Self {
            events: Vec::new(),
            timing,
            cursor: 0,
            last_fire: None,
        }
    }

    /// Build a show from a list of events
    ///
    /// Returns the first event that does not fit.
    pub fn from_events<I>(timing: TimingMode, events: I) -> Result<Self, Event>
    where
        I: IntoIterator<Item = Event>,
    {
        let mut show = Self::new(timing);
        for event in events {
            show.push(event)?;
        }
        Ok(show)
    }

    /// Add an event
    ///
    /// With absolute timing the event is placed after every event with the
    /// same or an earlier time, but never before the cursor, so an event that
    /// is already late fires on the next advance. Returns the event when the
    /// show is full.
    pub fn push(&mut self, event: Event) -> Result<(), Event> {
        let position = match self.timing {
            TimingMode::Absolute => self
                .events
                .iter()
                .position(|queued| queued.time() > event.time())
                .unwrap_or(self.events.len())
                .max(self.cursor),
            TimingMode::Relative => self.events.len(),
        };
        self.events.insert(position, event)
    }

    pub const fn timing(&self) -> TimingMode {
        self.timing
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Index of the next event to fire
    pub const fn current_index(&self) -> usize {
        self.cursor
    }

    /// Check if every event has fired
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    /// Move past every event that is due at `now`
    ///
    /// Returns the newly due events in firing order. `now` is expected not
    /// to go backwards between calls.
    pub fn advance(&mut self, now: Instant) -> &[Event] {
        let start = self.cursor;
        match self.timing {
            TimingMode::Absolute => {
                while let Some(event) = self.events.get(self.cursor) {
                    if event.time().as_ticks() > now.as_ticks() {
                        break;
                    }
                    self.cursor += 1;
                }
            }
            TimingMode::Relative => {
                let mut last_fire = *self.last_fire.get_or_insert(now);
                while let Some(event) = self.events.get(self.cursor) {
                    if now.saturating_duration_since(last_fire) < event.time() {
                        break;
                    }
                    last_fire = now;
                    self.cursor += 1;
                }
                self.last_fire = Some(last_fire);
            }
        }

        #[cfg(feature = "esp32-log")]
        {
            if self.cursor > start {
                println!(
                    "[Show.advance] {} event(s) due at {}ms",
                    self.cursor - start,
                    now.as_millis()
                );
            }
        }

        self.events.get(start..self.cursor).unwrap_or(&[])
    }
}
