//! Injectable monotonic time sources.
//!
//! Hosts that do not track frame deltas themselves can drive the manager
//! with [`ActionManager::tick_with`](crate::ActionManager::tick_with) and a
//! [`Clock`]. Production code uses [`MonotonicClock`]; tests use
//! [`ManualClock`] to advance time deterministically without sleeping.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source: successive readings never decrease.
pub trait Clock {
    /// Time elapsed since this clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock-backed monotonic time, anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Test-controlled time: only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `dt`.
    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
