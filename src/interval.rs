//! Refresh interval shared between the Maestro and its sections
//!
//! The Maestro holds the only writer ([`RefreshInterval`]); sections hold
//! read-only [`IntervalHandle`]s, so a change made by the Maestro reaches
//! every section that has not overridden its own interval.

use alloc::rc::Rc;
use core::cell::Cell;

use embassy_time::{Duration, Instant};

/// Default time between pixel refreshes (50Hz)
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(20);

/// Writable side of a shared refresh interval
#[derive(Debug)]
pub struct RefreshInterval {
    cell: Rc<Cell<Duration>>,
}

impl Default for RefreshInterval {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

impl RefreshInterval {
    pub fn new(interval: Duration) -> Self {
        Self {
            cell: Rc::new(Cell::new(interval)),
        }
    }

    pub fn get(&self) -> Duration {
        self.cell.get()
    }

    pub fn set(&self, interval: Duration) {
        self.cell.set(interval);
    }

    /// Create a read-only handle following this interval
    pub fn handle(&self) -> IntervalHandle {
        IntervalHandle {
            cell: Rc::clone(&self.cell),
        }
    }
}

/// Read-only view of a [`RefreshInterval`]
#[derive(Debug, Clone)]
pub struct IntervalHandle {
    cell: Rc<Cell<Duration>>,
}

impl IntervalHandle {
    pub fn get(&self) -> Duration {
        self.cell.get()
    }
}

/// Where a section takes its refresh interval from
///
/// An interval set on the section itself is kept apart from its source, so
/// rebinding a section never replaces it.
#[derive(Debug, Clone)]
pub enum RefreshSource {
    /// Fixed interval: a standalone section, or one inherited from an
    /// overriding parent
    Local(Duration),
    /// Follows the Maestro's interval
    Shared(IntervalHandle),
}

impl Default for RefreshSource {
    fn default() -> Self {
        Self::Local(DEFAULT_REFRESH_INTERVAL)
    }
}

impl RefreshSource {
    pub fn get(&self) -> Duration {
        match self {
            Self::Local(interval) => *interval,
            Self::Shared(handle) => handle.get(),
        }
    }
}

/// Check if `interval` has elapsed since `last`; the first check always passes
pub(crate) fn is_due(last: Option<Instant>, now: Instant, interval: Duration) -> bool {
    match last {
        None => true,
        Some(last) => now.saturating_duration_since(last) >= interval,
    }
}
