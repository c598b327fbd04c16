//! Decorator actions that wrap and restart a single child.

use std::time::Duration;

use crate::{Action, FiniteAction, Lifecycle};

/// How many times a [`Repeat`] runs its child to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetitions {
    /// Run the child exactly this many times. `Finite(0)` is valid and
    /// reports done immediately after `start`.
    Finite(u32),

    /// Restart the child forever; the repeat never reports done on its own.
    Infinite,
}

/// Restarts a finite child each time it completes.
///
/// # Semantics
///
/// When `update` observes a completed child it counts the completion and,
/// unless the repetition bound was just reached, restarts the child and
/// updates it once more in the same tick. A completed child triggers an
/// immediate restart-and-first-tick, not an idle frame. When the bound is
/// reached the repeat reports done in that same tick, without starting
/// another iteration.
pub struct Repeat<T> {
    child: Box<dyn FiniteAction<T>>,
    times: Repetitions,
    completed: u32,
    target: Option<T>,
    state: Lifecycle,
}

impl<T: Clone> Repeat<T> {
    pub fn new(child: Box<dyn FiniteAction<T>>, times: Repetitions) -> Self {
        Self {
            child,
            times,
            completed: 0,
            target: None,
            state: Lifecycle::Idle,
        }
    }

    /// Runs the child to completion `times` times.
    pub fn times(child: Box<dyn FiniteAction<T>>, times: u32) -> Self {
        Self::new(child, Repetitions::Finite(times))
    }

    /// Restarts the child indefinitely.
    pub fn forever(child: Box<dyn FiniteAction<T>>) -> Self {
        Self::new(child, Repetitions::Infinite)
    }

    /// Completed child iterations so far.
    pub fn completed(&self) -> u32 {
        self.completed
    }
}

impl<T: Clone> Action<T> for Repeat<T> {
    fn start(&mut self, target: &T) {
        self.target = Some(target.clone());
        self.completed = 0;

        if self.times == Repetitions::Finite(0) {
            self.state = Lifecycle::Done;
            return;
        }

        self.state = Lifecycle::Running;
        self.child.start(target);
    }

    fn update(&mut self, dt: Duration) {
        assert!(
            !self.state.is_idle(),
            "Repeat::update() called before start()"
        );
        if self.state.is_done() {
            return;
        }

        if self.child.is_done() {
            self.completed += 1;

            if let Repetitions::Finite(times) = self.times
                && self.completed >= times
            {
                self.state = Lifecycle::Done;
                return;
            }

            if let Some(target) = self.target.as_ref() {
                self.child.start(target);
            }
        }

        self.child.update(dt);
    }

    fn is_done(&self) -> bool {
        self.state.is_done()
    }
}

impl<T: Clone> FiniteAction<T> for Repeat<T> {}

/// Repeats a child while an external predicate keeps returning `true`.
///
/// The restart logic is the unbounded [`Repeat`]; done-ness comes entirely
/// from the predicate, queried on every `is_done` call regardless of child
/// progress. The predicate answers "keep going": the action is done as soon
/// as it returns `false`.
pub struct RepeatUntil<T> {
    repeat: Repeat<T>,
    keep_going: Box<dyn Fn() -> bool>,
}

impl<T: Clone> RepeatUntil<T> {
    pub fn new<F>(child: Box<dyn FiniteAction<T>>, keep_going: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self {
            repeat: Repeat::forever(child),
            keep_going: Box::new(keep_going),
        }
    }
}

impl<T: Clone> Action<T> for RepeatUntil<T> {
    fn start(&mut self, target: &T) {
        self.repeat.start(target);
    }

    fn update(&mut self, dt: Duration) {
        self.repeat.update(dt);
    }

    fn is_done(&self) -> bool {
        !(self.keep_going)()
    }
}

impl<T: Clone> FiniteAction<T> for RepeatUntil<T> {}
