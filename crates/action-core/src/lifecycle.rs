//! Lifecycle state shared by all actions.

/// Where an action is in its start/update/done protocol.
///
/// Every action moves through these states in order. `start` takes it from
/// `Idle` to `Running` (combinators may call `start` again to rewind a child
/// back to `Running`), and repeated `update` calls are the only way it
/// advances to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifecycle {
    /// `start` has not been called yet. Updating an idle action is a
    /// programming error.
    #[default]
    Idle,

    /// Started and still making progress.
    Running,

    /// Finished. Further `update` calls are tolerated no-ops.
    Done,
}

impl Lifecycle {
    /// Returns `true` if `start` has not been called yet.
    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, Lifecycle::Idle)
    }

    /// Returns `true` if this action is started and unfinished.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Lifecycle::Running)
    }

    /// Returns `true` if this action has finished.
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Lifecycle::Done)
    }
}
