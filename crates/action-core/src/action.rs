//! Core action traits.
//!
//! This module defines the [`Action`] trait, which is the fundamental
//! abstraction for every schedulable unit, and the [`FiniteAction`] marker
//! for actions that are guaranteed to reach done. Both are generic over a
//! target handle type `T`, which stays completely opaque to combinators and
//! the scheduler.

use std::time::Duration;

/// A unit of work advanced once per host tick.
///
/// # Protocol
///
/// 1. `start(target)` binds the target and arms the action
/// 2. `update(dt)` is called once per tick with the elapsed delta
/// 3. `is_done()` reports whether the action has finished
///
/// Combinators such as [`Repeat`](crate::Repeat) may call `start` again on a
/// child to rewind it for another iteration; external callers start an
/// instance exactly once, by handing it to the scheduler.
///
/// # Panics
///
/// Calling `update` before `start` is a programming error and panics.
/// Calling `update` after `is_done()` reports `true` is tolerated and has
/// no further side effects.
pub trait Action<T> {
    /// Binds the target and resets internal progress.
    fn start(&mut self, target: &T);

    /// Advances internal progress by `dt`.
    fn update(&mut self, dt: Duration);

    /// Returns `true` once this action has finished. Queries only, never
    /// advances state (except where documented, e.g. a predicate-driven
    /// [`RepeatUntil`](crate::RepeatUntil)).
    fn is_done(&self) -> bool;
}

/// Marker for actions that are guaranteed to reach done.
///
/// [`Sequence`](crate::Sequence) and [`Repeat`](crate::Repeat) accept only
/// finite children, since an unbounded child would stall the cursor forever.
/// `Repeat::forever` carries this marker too, mirroring how an unbounded
/// repeat still participates in composition even though it never reports done
/// on its own.
pub trait FiniteAction<T>: Action<T> {}

/// Blanket implementation for boxed actions.
///
/// This allows `Box<dyn Action<T>>` to also implement `Action<T>`, enabling
/// dynamic dispatch and heterogeneous collections of actions.
impl<T> Action<T> for Box<dyn Action<T>> {
    #[inline]
    fn start(&mut self, target: &T) {
        (**self).start(target);
    }

    #[inline]
    fn update(&mut self, dt: Duration) {
        (**self).update(dt);
    }

    #[inline]
    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

impl<T> Action<T> for Box<dyn FiniteAction<T>> {
    #[inline]
    fn start(&mut self, target: &T) {
        (**self).start(target);
    }

    #[inline]
    fn update(&mut self, dt: Duration) {
        (**self).update(dt);
    }

    #[inline]
    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

impl<T> FiniteAction<T> for Box<dyn FiniteAction<T>> {}

/// The trivial action: does nothing and is already done.
///
/// Useful as a placeholder slot in a composition that is filled in later.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOp;

impl<T> Action<T> for NoOp {
    fn start(&mut self, _target: &T) {}

    fn update(&mut self, _dt: Duration) {}

    fn is_done(&self) -> bool {
        true
    }
}

impl<T> FiniteAction<T> for NoOp {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_is_always_done() {
        let mut noop = NoOp;
        assert!(Action::<()>::is_done(&noop));

        noop.start(&());
        Action::<()>::update(&mut noop, Duration::from_secs(1));
        assert!(Action::<()>::is_done(&noop));
    }

    #[test]
    fn boxed_action_delegates() {
        let mut boxed: Box<dyn Action<()>> = Box::new(NoOp);
        boxed.start(&());
        boxed.update(Duration::ZERO);
        assert!(boxed.is_done());
    }
}
