//! Registry and tick loop for running actions.
//!
//! The scheduler owns the set of live top-level actions and advances each of
//! them once per host tick. It is an explicitly constructed value the host
//! application owns and passes around; there is no global instance.
//!
//! # Data flow
//!
//! 1. The host calls [`ActionManager::run_action`], which registers the
//!    action and immediately starts it bound to the given target
//! 2. Once per frame the host calls [`ActionManager::tick`] (or
//!    [`ActionManager::tick_with`] with an injected [`Clock`])
//! 3. Actions that report done after the update pass are retired

pub mod clock;
pub mod error;
pub mod manager;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::SchedulerError;
pub use manager::{ActionId, ActionManager};
