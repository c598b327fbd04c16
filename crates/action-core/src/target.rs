//! Target handle traits and the small geometry type used by transform
//! actions.
//!
//! The scheduler and the generic combinators never look inside a target; only
//! the transform leaves require the [`TweenTarget`] capability. Interpolation
//! itself is the tween backend's job, reached through the target handle: the
//! `tween_*` starters are fire-and-forget and need no further driving from
//! this crate.

use std::time::Duration;

/// A position or rotation triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Transform state readable from, and tweenable through, a target handle.
///
/// Handles are shared between the host and running actions, so readers and
/// tween starters take `&self`; implementations are expected to use interior
/// mutability (an `Rc<RefCell<..>>` core, an ECS handle, and so on).
pub trait TweenTarget {
    /// Current local position.
    fn position(&self) -> Vec3;

    /// Current local rotation, as Euler angles in degrees.
    fn rotation(&self) -> Vec3;

    /// Current opacity in `0.0..=1.0`.
    fn opacity(&self) -> f32;

    /// Asks the backend to move this target to `to` over `duration`.
    fn tween_position(&self, duration: Duration, to: Vec3);

    /// Asks the backend to rotate this target to `to` over `duration`.
    fn tween_rotation(&self, duration: Duration, to: Vec3);

    /// Asks the backend to fade this target to `to` over `duration`.
    fn tween_opacity(&self, duration: Duration, to: f32);
}
