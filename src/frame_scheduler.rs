//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use alloc::vec;
use alloc::vec::Vec;

use embassy_time::{Duration, Instant};

use crate::color::Rgb;
use crate::command::CommandReceiver;
use crate::maestro::Maestro;
use crate::OutputDriver;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler driving a [`Maestro`].
///
/// Every tick it applies queued commands, updates the Maestro, writes the
/// brightness-scaled colors of all sections to the output driver and
/// returns how long the caller should sleep. Frames are paced by the
/// Maestro's refresh interval.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(maestro, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const SHOW_CAPACITY: usize, const COMMAND_CAPACITY: usize> {
    output: O,
    maestro: Maestro<SHOW_CAPACITY>,
    commands: Option<CommandReceiver<'a, COMMAND_CAPACITY>>,
    frame: Vec<Rgb>,
    next_frame: Option<Instant>,
}

impl<'a, O: OutputDriver, const SHOW_CAPACITY: usize, const COMMAND_CAPACITY: usize>
    FrameScheduler<'a, O, SHOW_CAPACITY, COMMAND_CAPACITY>
{
    pub fn new(maestro: Maestro<SHOW_CAPACITY>, driver: O) -> Self {
        let frame = vec![Rgb::default(); maestro.total_pixels()];
        Self {
            output: driver,
            maestro,
            commands: None,
            frame,
            next_frame: None,
        }
    }

    /// Drain `commands` into the Maestro at the start of every tick
    #[must_use]
    pub fn with_commands(mut self, commands: CommandReceiver<'a, COMMAND_CAPACITY>) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        if let Some(commands) = self.commands {
            commands.process_pending(&mut self.maestro);
        }

        let frame_duration = self.maestro.refresh_interval();

        // Skip the backlog after a stall instead of catching up
        let next_frame = match self.next_frame {
            Some(next) if now.saturating_duration_since(next) <= frame_duration * 2 => next,
            _ => now,
        };

        self.maestro.update(now);

        let total = self.maestro.total_pixels();
        if self.frame.len() != total {
            self.frame.resize(total, Rgb::default());
        }
        let written = self.maestro.render_into(&mut self.frame);
        self.output.write(self.frame.get(..written).unwrap_or(&[]));

        let next_deadline = next_frame + frame_duration;
        self.next_frame = Some(next_deadline);

        FrameResult {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
        }
    }

    pub fn maestro(&self) -> &Maestro<SHOW_CAPACITY> {
        &self.maestro
    }

    pub fn maestro_mut(&mut self) -> &mut Maestro<SHOW_CAPACITY> {
        &mut self.maestro
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
