//! Timed transform actions: move, rotate, and fade leaves.
//!
//! Each leaf computes an end value when it starts and hands the actual
//! interpolation to the tween backend behind [`TweenTarget`]. Done-ness is
//! the elapsed-duration check of the embedded [`Interval`], which runs
//! independently of backend progress: a leaf can report done by elapsed tick
//! time even if the backend is still rendering the last few frames of its
//! interpolation. That independence is deliberate and part of the contract.
//!
//! The `*By` variants apply a relative offset to whatever value the target
//! holds when `start` runs; the `*To` variants aim for an absolute value.
//! Both capture their inputs at `start` time, so constructing an action long
//! before running it is safe.

use std::time::Duration;

use crate::{Action, FiniteAction, Interval, TweenTarget, Vec3};

macro_rules! interval_action {
    ($name:ident) => {
        impl<T: TweenTarget> Action<T> for $name {
            fn start(&mut self, target: &T) {
                self.begin_tween(target);
                self.interval.begin();
            }

            fn update(&mut self, dt: Duration) {
                assert!(
                    !self.interval.state().is_idle(),
                    concat!(stringify!($name), "::update() called before start()")
                );
                self.interval.advance(dt);
            }

            fn is_done(&self) -> bool {
                self.interval.is_done()
            }
        }

        impl<T: TweenTarget> FiniteAction<T> for $name {}
    };
}

/// Moves the target by a relative offset from its position at start time.
#[derive(Debug, Clone, Copy)]
pub struct MoveBy {
    interval: Interval,
    delta: Vec3,
}

impl MoveBy {
    pub fn new(duration: Duration, delta: Vec3) -> Self {
        Self {
            interval: Interval::new(duration),
            delta,
        }
    }

    fn begin_tween(&self, target: &impl TweenTarget) {
        let to = target.position() + self.delta;
        target.tween_position(self.interval.duration(), to);
    }
}

interval_action!(MoveBy);

/// Moves the target to an absolute position.
#[derive(Debug, Clone, Copy)]
pub struct MoveTo {
    interval: Interval,
    to: Vec3,
}

impl MoveTo {
    pub fn new(duration: Duration, to: Vec3) -> Self {
        Self {
            interval: Interval::new(duration),
            to,
        }
    }

    fn begin_tween(&self, target: &impl TweenTarget) {
        target.tween_position(self.interval.duration(), self.to);
    }
}

interval_action!(MoveTo);

/// Rotates the target by relative Euler angles from its rotation at start
/// time.
#[derive(Debug, Clone, Copy)]
pub struct RotateBy {
    interval: Interval,
    delta: Vec3,
}

impl RotateBy {
    pub fn new(duration: Duration, delta: Vec3) -> Self {
        Self {
            interval: Interval::new(duration),
            delta,
        }
    }

    /// Rotation around the z axis only, the common 2D case.
    pub fn around_z(duration: Duration, angle: f32) -> Self {
        Self::new(duration, Vec3::new(0.0, 0.0, angle))
    }

    fn begin_tween(&self, target: &impl TweenTarget) {
        let to = target.rotation() + self.delta;
        target.tween_rotation(self.interval.duration(), to);
    }
}

interval_action!(RotateBy);

/// Rotates the target to absolute Euler angles.
#[derive(Debug, Clone, Copy)]
pub struct RotateTo {
    interval: Interval,
    to: Vec3,
}

impl RotateTo {
    pub fn new(duration: Duration, to: Vec3) -> Self {
        Self {
            interval: Interval::new(duration),
            to,
        }
    }

    pub fn around_z(duration: Duration, angle: f32) -> Self {
        Self::new(duration, Vec3::new(0.0, 0.0, angle))
    }

    fn begin_tween(&self, target: &impl TweenTarget) {
        target.tween_rotation(self.interval.duration(), self.to);
    }
}

interval_action!(RotateTo);

/// Fades the target by a relative opacity offset from its opacity at start
/// time. The offset may be negative; the end value is not clamped here, that
/// is the backend's call.
#[derive(Debug, Clone, Copy)]
pub struct FadeBy {
    interval: Interval,
    delta: f32,
}

impl FadeBy {
    pub fn new(duration: Duration, delta: f32) -> Self {
        Self {
            interval: Interval::new(duration),
            delta,
        }
    }

    fn begin_tween(&self, target: &impl TweenTarget) {
        let to = target.opacity() + self.delta;
        target.tween_opacity(self.interval.duration(), to);
    }
}

interval_action!(FadeBy);

/// Fades the target to an absolute opacity.
#[derive(Debug, Clone, Copy)]
pub struct FadeTo {
    interval: Interval,
    to: f32,
}

impl FadeTo {
    pub fn new(duration: Duration, to: f32) -> Self {
        Self {
            interval: Interval::new(duration),
            to,
        }
    }

    fn begin_tween(&self, target: &impl TweenTarget) {
        target.tween_opacity(self.interval.duration(), self.to);
    }
}

interval_action!(FadeTo);
