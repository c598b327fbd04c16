//! Shared timing state for duration-bound actions.

use std::time::Duration;

use crate::Lifecycle;

/// Duration, accumulated elapsed time, and lifecycle, flattened into one
/// struct so every timed action embeds the same fields.
///
/// Elapsed time only advances inside [`advance`](Interval::advance), which is
/// only called from an action's `update`. Done-ness is therefore sampled at
/// update time, never computed live from a clock: a parent combinator that
/// queries `is_done` after updating a child sees exactly the state that
/// update produced.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    duration: Duration,
    elapsed: Duration,
    state: Lifecycle,
}

impl Interval {
    /// Creates an idle interval that will run for `duration` once begun.
    ///
    /// A zero duration is valid: the interval finishes on the first `advance`
    /// after [`begin`](Interval::begin), never in the same call as `begin`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            state: Lifecycle::Idle,
        }
    }

    /// Rewinds elapsed time to zero and marks the interval running.
    pub fn begin(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = Lifecycle::Running;
    }

    /// Accumulates `dt` and flips to done once elapsed reaches the duration.
    ///
    /// No-op unless the interval is running.
    pub fn advance(&mut self, dt: Duration) {
        if !self.state.is_running() {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.state = Lifecycle::Done;
        }
    }

    /// The total duration this interval runs for.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time accumulated since the last [`begin`](Interval::begin).
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Current lifecycle state.
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Returns `true` once the interval has run its full duration.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_exactly_at_duration_boundary() {
        let mut interval = Interval::new(Duration::from_secs(1));
        interval.begin();

        interval.advance(Duration::from_millis(500));
        assert!(!interval.is_done());

        interval.advance(Duration::from_millis(499));
        assert!(!interval.is_done());

        interval.advance(Duration::from_millis(1));
        assert!(interval.is_done());
    }

    #[test]
    fn zero_duration_finishes_on_first_advance() {
        let mut interval = Interval::new(Duration::ZERO);
        interval.begin();
        assert!(!interval.is_done());

        interval.advance(Duration::ZERO);
        assert!(interval.is_done());
    }

    #[test]
    fn advance_before_begin_is_inert() {
        let mut interval = Interval::new(Duration::from_secs(1));
        interval.advance(Duration::from_secs(5));

        assert!(interval.state().is_idle());
        assert_eq!(interval.elapsed(), Duration::ZERO);
    }

    #[test]
    fn begin_rewinds_elapsed_time() {
        let mut interval = Interval::new(Duration::from_secs(1));
        interval.begin();
        interval.advance(Duration::from_secs(2));
        assert!(interval.is_done());

        interval.begin();
        assert!(!interval.is_done());
        assert_eq!(interval.elapsed(), Duration::ZERO);
    }
}
