//! Builder utilities for ergonomic action construction.
//!
//! This module provides helper functions to reduce boilerplate when composing
//! actions. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use std::time::Duration;

use crate::{
    Action, CallFunc, DelayTime, FadeBy, FadeTo, FiniteAction, MoveBy, MoveTo, NoOp, Repeat,
    RepeatUntil, RotateBy, RotateTo, Sequence, TweenTarget, Vec3,
};

/// Creates an always-done no-op action.
#[inline]
pub fn noop<T: 'static>() -> Box<dyn Action<T>> {
    Box::new(NoOp)
}

/// Creates a timed no-op that finishes after `delay`.
#[inline]
pub fn delay<T: 'static>(delay: Duration) -> Box<dyn FiniteAction<T>> {
    Box::new(DelayTime::new(delay))
}

/// Creates a one-shot callback action.
#[inline]
pub fn call<T, F>(callback: F) -> Box<dyn FiniteAction<T>>
where
    T: Clone + 'static,
    F: FnMut(&T) + 'static,
{
    Box::new(CallFunc::new(callback))
}

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<T: Clone + 'static>(
    children: Vec<Box<dyn FiniteAction<T>>>,
) -> Box<dyn FiniteAction<T>> {
    Box::new(Sequence::new(children))
}

/// Creates a repeat node that runs `child` to completion `times` times.
#[inline]
pub fn repeat<T: Clone + 'static>(
    child: Box<dyn FiniteAction<T>>,
    times: u32,
) -> Box<dyn FiniteAction<T>> {
    Box::new(Repeat::times(child, times))
}

/// Creates an unbounded repeat node.
///
/// A single child is repeated directly; several children are wrapped in a
/// [`Sequence`] first, so the whole run repeats as a unit.
pub fn repeat_forever<T: Clone + 'static>(
    mut children: Vec<Box<dyn FiniteAction<T>>>,
) -> Box<dyn FiniteAction<T>> {
    let child: Box<dyn FiniteAction<T>> = if children.len() == 1 {
        children.remove(0)
    } else {
        Box::new(Sequence::new(children))
    };
    Box::new(Repeat::forever(child))
}

/// Creates a repeat node gated by a keep-going predicate.
///
/// The child cycles while `keep_going` returns `true`; the action reports
/// done as soon as it returns `false`.
#[inline]
pub fn repeat_until<T, F>(child: Box<dyn FiniteAction<T>>, keep_going: F) -> Box<dyn FiniteAction<T>>
where
    T: Clone + 'static,
    F: Fn() -> bool + 'static,
{
    Box::new(RepeatUntil::new(child, keep_going))
}

/// Creates a relative move action.
#[inline]
pub fn move_by<T: TweenTarget + 'static>(
    duration: Duration,
    delta: Vec3,
) -> Box<dyn FiniteAction<T>> {
    Box::new(MoveBy::new(duration, delta))
}

/// Creates an absolute move action.
#[inline]
pub fn move_to<T: TweenTarget + 'static>(duration: Duration, to: Vec3) -> Box<dyn FiniteAction<T>> {
    Box::new(MoveTo::new(duration, to))
}

/// Creates a relative rotation action.
#[inline]
pub fn rotate_by<T: TweenTarget + 'static>(
    duration: Duration,
    delta: Vec3,
) -> Box<dyn FiniteAction<T>> {
    Box::new(RotateBy::new(duration, delta))
}

/// Creates an absolute rotation action.
#[inline]
pub fn rotate_to<T: TweenTarget + 'static>(
    duration: Duration,
    to: Vec3,
) -> Box<dyn FiniteAction<T>> {
    Box::new(RotateTo::new(duration, to))
}

/// Creates a relative fade action.
#[inline]
pub fn fade_by<T: TweenTarget + 'static>(duration: Duration, delta: f32) -> Box<dyn FiniteAction<T>> {
    Box::new(FadeBy::new(duration, delta))
}

/// Creates an absolute fade action.
#[inline]
pub fn fade_to<T: TweenTarget + 'static>(duration: Duration, to: f32) -> Box<dyn FiniteAction<T>> {
    Box::new(FadeTo::new(duration, to))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn repeat_forever_wraps_multiple_children_in_a_sequence() {
        let log = Rc::new(Cell::new(0u32));
        let (a, b) = (Rc::clone(&log), Rc::clone(&log));

        let mut action = repeat_forever(vec![
            call(move |_t: &()| a.set(a.get() * 10 + 1)),
            call(move |_t: &()| b.set(b.get() * 10 + 2)),
        ]);

        action.start(&());
        for _ in 0..5 {
            action.update(Duration::ZERO);
        }

        // Children alternate in sequence order: 1, 2, 1, 2, ...
        assert_eq!(log.get(), 12121);
        assert!(!action.is_done());
    }

    #[test]
    fn delay_then_call_composes() {
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);

        let mut action = sequence(vec![
            delay(Duration::from_secs(1)),
            call(move |_t: &()| flag.set(true)),
        ]);

        action.start(&());
        action.update(Duration::from_secs(1));
        assert!(!fired.get()); // Callback starts this tick, fires next

        action.update(Duration::ZERO);
        assert!(fired.get());
        assert!(action.is_done());
    }
}
