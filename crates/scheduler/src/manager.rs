//! The action registry and its tick loop.

use std::time::Duration;

use action_core::Action;

use crate::clock::Clock;
use crate::error::SchedulerError;

/// Identifies a registered action for inspection and cancellation.
///
/// Ids are unique per manager for its whole lifetime; a retired action's id
/// is never reissued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(u64);

struct Entry<T> {
    id: ActionId,
    action: Box<dyn Action<T>>,
}

/// Owns and advances the set of live top-level actions.
///
/// The manager is single-threaded and cooperative: all work happens
/// synchronously inside [`tick`](ActionManager::tick), in registration
/// order. Finished actions are retired in a separate pass after the update
/// pass, so a completion observed mid-iteration never disturbs the registry
/// being iterated. Retiring a top-level action drops its whole sub-action
/// tree, since ownership is exclusive.
pub struct ActionManager<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
    last_reading: Option<Duration>,
}

impl<T> ActionManager<T> {
    /// Creates an empty manager. Hosts own this value; there is no global
    /// instance.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            last_reading: None,
        }
    }

    /// Registers `action`, starts it bound to `target`, and returns its id.
    ///
    /// The action runs until it reports done or is stopped; the id stays
    /// valid for [`is_running`](ActionManager::is_running) and
    /// [`stop_action`](ActionManager::stop_action) until then.
    pub fn run_action<A>(&mut self, target: &T, action: A) -> ActionId
    where
        A: Action<T> + 'static,
    {
        let mut action: Box<dyn Action<T>> = Box::new(action);
        action.start(target);

        let id = ActionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, action });

        tracing::debug!("registered action {:?} ({} running)", id, self.entries.len());
        id
    }

    /// Advances every registered action by `dt`, then retires the done ones.
    pub fn tick(&mut self, dt: Duration) {
        for entry in &mut self.entries {
            entry.action.update(dt);
        }

        // Removal happens strictly after the update pass.
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.action.is_done());

        let retired = before - self.entries.len();
        if retired > 0 {
            tracing::trace!("retired {retired} action(s), {} still running", self.entries.len());
        }
    }

    /// Ticks with a delta derived from successive readings of `clock`.
    ///
    /// The first call establishes the baseline and advances nothing.
    pub fn tick_with(&mut self, clock: &impl Clock) {
        let now = clock.now();
        let dt = match self.last_reading {
            Some(previous) => now.saturating_sub(previous),
            None => Duration::ZERO,
        };
        self.last_reading = Some(now);
        self.tick(dt);
    }

    /// Number of currently running actions.
    pub fn running_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` while `id` names a registered action.
    pub fn is_running(&self, id: ActionId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Removes a running action before it finishes.
    ///
    /// Other registered actions are unaffected.
    pub fn stop_action(&mut self, id: ActionId) -> Result<(), SchedulerError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(SchedulerError::UnknownAction(id))?;
        self.entries.remove(index);

        tracing::debug!("stopped action {:?} ({} still running)", id, self.entries.len());
        Ok(())
    }

    /// Removes every running action.
    pub fn stop_all(&mut self) {
        let stopped = self.entries.len();
        self.entries.clear();
        if stopped > 0 {
            tracing::debug!("stopped all {stopped} running action(s)");
        }
    }
}

impl<T> Default for ActionManager<T> {
    fn default() -> Self {
        Self::new()
    }
}
