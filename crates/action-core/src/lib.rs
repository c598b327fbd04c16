//! Composable tick-driven actions for frame-based hosts.
//!
//! This library provides the action abstraction used by the scheduler crate:
//! small state machines that a host advances once per update tick.
//!
//! - **No wall clock**: Elapsed time is accumulated from host-supplied deltas,
//!   so every action is deterministic and testable without sleeps
//! - **Exclusive ownership**: Each action instance is owned by exactly one
//!   registry slot or parent combinator; children never reference their parent
//! - **Synchronous**: All work happens inside `update`, actions never yield
//!
//! # Architecture
//!
//! - [`Action`]: Core trait for all actions (`start` / `update` / `is_done`)
//! - [`Lifecycle`]: Idle, Running, or Done
//! - Timed leaves: [`DelayTime`], [`CallFunc`], and the transform actions
//!   ([`MoveBy`], [`MoveTo`], [`RotateBy`], [`RotateTo`], [`FadeBy`], [`FadeTo`])
//! - Combinators: [`Sequence`], [`Repeat`], [`RepeatUntil`]

pub mod action;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod interval;
pub mod leaf;
pub mod lifecycle;
pub mod target;
pub mod transform;

// Re-export core types for ergonomic API
pub use action::{Action, FiniteAction, NoOp};
pub use composite::Sequence;
pub use decorator::{Repeat, RepeatUntil, Repetitions};
pub use interval::Interval;
pub use leaf::{CallFunc, DelayTime};
pub use lifecycle::Lifecycle;
pub use target::{TweenTarget, Vec3};
pub use transform::{FadeBy, FadeTo, MoveBy, MoveTo, RotateBy, RotateTo};
