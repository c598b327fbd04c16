//! Scheduler error types.

use crate::manager::ActionId;

/// Errors surfaced by [`ActionManager`](crate::ActionManager) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    /// The id does not name a currently running action. It may have already
    /// finished and been retired, or been stopped earlier.
    #[error("no running action with id {0:?}")]
    UnknownAction(ActionId),
}
