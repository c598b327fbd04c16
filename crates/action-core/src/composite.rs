//! Composite actions that drive an ordered set of children.

use std::time::Duration;

use crate::{Action, FiniteAction, Lifecycle};

/// Runs a fixed list of finite children one after another.
///
/// # Semantics
///
/// - `start` rewinds the cursor and starts the first child. An empty
///   sequence is valid and reports done immediately after `start`.
/// - `update` delegates to the current child. When that child finishes, the
///   cursor advances and the next child is started in the same `update`
///   call; the new child receives its first `update` on the following tick.
/// - Done once the cursor has passed the last child.
pub struct Sequence<T> {
    children: Vec<Box<dyn FiniteAction<T>>>,
    cursor: usize,
    target: Option<T>,
    state: Lifecycle,
}

impl<T: Clone> Sequence<T> {
    /// Creates a sequence over the given children, in execution order.
    pub fn new(children: Vec<Box<dyn FiniteAction<T>>>) -> Self {
        Self {
            children,
            cursor: 0,
            target: None,
            state: Lifecycle::Idle,
        }
    }

    /// Number of children, finished or not.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: Clone> Action<T> for Sequence<T> {
    fn start(&mut self, target: &T) {
        self.target = Some(target.clone());
        self.cursor = 0;

        match self.children.first_mut() {
            Some(first) => {
                first.start(target);
                self.state = Lifecycle::Running;
            }
            None => self.state = Lifecycle::Done,
        }
    }

    fn update(&mut self, dt: Duration) {
        assert!(
            !self.state.is_idle(),
            "Sequence::update() called before start()"
        );
        if self.state.is_done() {
            return;
        }

        let Some(child) = self.children.get_mut(self.cursor) else {
            return;
        };
        child.update(dt);
        if !child.is_done() {
            return;
        }

        // Current child finished: hand over to the next one without an idle
        // tick in between.
        self.cursor += 1;
        match self.children.get_mut(self.cursor) {
            Some(next) => {
                if let Some(target) = self.target.as_ref() {
                    next.start(target);
                }
            }
            None => self.state = Lifecycle::Done,
        }
    }

    fn is_done(&self) -> bool {
        self.state.is_done()
    }
}

impl<T: Clone> FiniteAction<T> for Sequence<T> {}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::leaf::{CallFunc, DelayTime};

    fn record(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Box<dyn FiniteAction<()>> {
        let log = Rc::clone(log);
        Box::new(CallFunc::new(move |_target: &()| {
            log.borrow_mut().push(tag);
        }))
    }

    #[test]
    fn empty_sequence_is_done_after_start() {
        let mut seq = Sequence::<()>::new(vec![]);
        assert!(!seq.is_done()); // Not before start

        seq.start(&());
        assert!(seq.is_done());
    }

    #[test]
    fn children_run_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut seq = Sequence::new(vec![
            record(&log, "first"),
            record(&log, "second"),
            record(&log, "third"),
        ]);

        seq.start(&());
        while !seq.is_done() {
            seq.update(Duration::ZERO);
        }

        assert_eq!(*log.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn next_child_starts_in_the_completing_update() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut seq = Sequence::new(vec![record(&log, "only"), Box::new(DelayTime::new(Duration::from_secs(1)))]);

        seq.start(&());
        seq.update(Duration::ZERO);
        assert_eq!(*log.borrow(), ["only"]);
        assert!(!seq.is_done());

        // The delay was started during the previous update; two half-second
        // ticks finish it and with it the sequence.
        seq.update(Duration::from_millis(500));
        assert!(!seq.is_done());
        seq.update(Duration::from_millis(500));
        assert!(seq.is_done());
    }

    #[test]
    fn summed_durations_drive_total_time() {
        let mut seq = Sequence::<()>::new(vec![
            Box::new(DelayTime::new(Duration::from_secs(1))),
            Box::new(DelayTime::new(Duration::from_secs(2))),
        ]);

        seq.start(&());
        let mut ticks = 0;
        while !seq.is_done() {
            seq.update(Duration::from_secs(1));
            ticks += 1;
        }

        // 1s child, then 2s child; the hand-over tick both finishes the
        // first child and starts (but does not update) the second.
        assert_eq!(ticks, 3);
    }

    #[test]
    fn updates_after_done_are_inert() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut seq = Sequence::new(vec![record(&log, "once")]);

        seq.start(&());
        seq.update(Duration::ZERO);
        assert!(seq.is_done());

        seq.update(Duration::ZERO);
        seq.update(Duration::ZERO);
        assert_eq!(*log.borrow(), ["once"]);
        assert!(seq.is_done());
    }

    #[test]
    #[should_panic(expected = "called before start()")]
    fn update_before_start_panics() {
        let mut seq = Sequence::<()>::new(vec![]);
        seq.update(Duration::ZERO);
    }
}
