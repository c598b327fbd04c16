//! Leaf actions: timed no-ops and one-shot callbacks.

use std::time::Duration;

use crate::{Action, FiniteAction, Interval, Lifecycle};

/// Waits for a fixed delay, then reports done.
///
/// The done flag only flips inside `update`: a delay queried between ticks
/// reports whatever the last `update` observed, regardless of how much host
/// time has passed since.
#[derive(Debug, Clone, Copy)]
pub struct DelayTime {
    interval: Interval,
}

impl DelayTime {
    /// Creates a delay that finishes once `delay` has accumulated.
    pub fn new(delay: Duration) -> Self {
        Self {
            interval: Interval::new(delay),
        }
    }
}

impl<T> Action<T> for DelayTime {
    fn start(&mut self, _target: &T) {
        self.interval.begin();
    }

    fn update(&mut self, dt: Duration) {
        assert!(
            !self.interval.state().is_idle(),
            "DelayTime::update() called before start()"
        );
        self.interval.advance(dt);
    }

    fn is_done(&self) -> bool {
        self.interval.is_done()
    }
}

impl<T> FiniteAction<T> for DelayTime {}

/// Invokes a callback with the bound target, exactly once per start cycle.
///
/// The callback fires on the first `update` after `start`, never before
/// `start` and never twice within one cycle. A parent [`Repeat`] that
/// restarts a `CallFunc` re-arms it for another single invocation.
///
/// [`Repeat`]: crate::Repeat
pub struct CallFunc<T> {
    callback: Box<dyn FnMut(&T)>,
    target: Option<T>,
    state: Lifecycle,
}

impl<T: Clone> CallFunc<T> {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        Self {
            callback: Box::new(callback),
            target: None,
            state: Lifecycle::Idle,
        }
    }
}

impl<T: Clone> Action<T> for CallFunc<T> {
    fn start(&mut self, target: &T) {
        self.target = Some(target.clone());
        self.state = Lifecycle::Running;
    }

    fn update(&mut self, _dt: Duration) {
        assert!(
            !self.state.is_idle(),
            "CallFunc::update() called before start()"
        );
        if self.state.is_done() {
            return;
        }

        if let Some(target) = self.target.as_ref() {
            (self.callback)(target);
        }
        self.state = Lifecycle::Done;
    }

    fn is_done(&self) -> bool {
        self.state.is_done()
    }
}

impl<T: Clone> FiniteAction<T> for CallFunc<T> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn delay_finishes_after_accumulated_ticks() {
        let mut delay = DelayTime::new(Duration::from_secs(1));
        delay.start(&());

        Action::<()>::update(&mut delay, Duration::from_millis(500));
        assert!(!Action::<()>::is_done(&delay));

        Action::<()>::update(&mut delay, Duration::from_millis(500));
        assert!(Action::<()>::is_done(&delay));
    }

    #[test]
    fn delay_done_state_is_sampled_not_live() {
        // Zero-length delay: not done right after start, only after the
        // first update samples the elapsed time.
        let mut delay = DelayTime::new(Duration::ZERO);
        delay.start(&());
        assert!(!Action::<()>::is_done(&delay));

        Action::<()>::update(&mut delay, Duration::ZERO);
        assert!(Action::<()>::is_done(&delay));
    }

    #[test]
    fn delay_tolerates_updates_after_done() {
        let mut delay = DelayTime::new(Duration::from_millis(100));
        delay.start(&());
        Action::<()>::update(&mut delay, Duration::from_millis(200));
        assert!(Action::<()>::is_done(&delay));

        Action::<()>::update(&mut delay, Duration::from_millis(200));
        assert!(Action::<()>::is_done(&delay));
    }

    #[test]
    #[should_panic(expected = "called before start()")]
    fn delay_update_before_start_panics() {
        let mut delay = DelayTime::new(Duration::from_secs(1));
        Action::<()>::update(&mut delay, Duration::ZERO);
    }

    #[test]
    fn callfunc_fires_exactly_once() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let mut call = CallFunc::new(move |_target: &()| {
            counter.set(counter.get() + 1);
        });

        call.start(&());
        assert_eq!(fired.get(), 0); // Not before the first update

        call.update(Duration::ZERO);
        assert_eq!(fired.get(), 1);
        assert!(call.is_done());

        call.update(Duration::ZERO);
        call.update(Duration::ZERO);
        assert_eq!(fired.get(), 1); // Still once
    }

    #[test]
    fn callfunc_receives_bound_target() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let mut call = CallFunc::new(move |target: &i32| {
            sink.set(*target);
        });

        call.start(&42);
        call.update(Duration::ZERO);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn callfunc_restart_rearms_the_callback() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let mut call = CallFunc::new(move |_target: &()| {
            counter.set(counter.get() + 1);
        });

        call.start(&());
        call.update(Duration::ZERO);
        call.start(&());
        call.update(Duration::ZERO);

        assert_eq!(fired.get(), 2); // Once per start cycle
    }
}
