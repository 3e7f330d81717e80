// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating-point counterparts on [`kurbo::Vec2`].
//!
//! These exist for continuous-angle work (rotation, unit directions) and for
//! callers whose geometry is not on the integer lattice. Prefer the exact
//! predicates in the crate root whenever inputs are integers.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::I2;

/// Determinants with magnitude below this are treated as parallel.
pub const EPSILON: f64 = 1e-10;

/// Unit vector at angle `theta` (radians), measured from +x toward +y.
#[inline]
pub fn unit(theta: f64) -> Vec2 {
    Vec2::from_angle(theta)
}

/// Rotate `v` by `theta` radians about the origin.
#[inline]
pub fn rotate(v: Vec2, theta: f64) -> Vec2 {
    let (sin, cos) = (theta.sin(), theta.cos());
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotate `v` by `theta` radians about `pivot`.
#[inline]
pub fn rotate_about(v: Vec2, theta: f64, pivot: Vec2) -> Vec2 {
    rotate(v - pivot, theta) + pivot
}

/// Intersection of the infinite lines through `p, q` and `a, b`.
///
/// Returns `None` when the lines are parallel within [`EPSILON`].
pub fn line_intersect_f(p: Vec2, q: Vec2, a: Vec2, b: Vec2) -> Option<Vec2> {
    let r = q - p;
    let d = b - a;
    let det = r.cross(d);
    if det.abs() < EPSILON {
        return None;
    }
    let s = (a - p).cross(d) / det;
    Some(p + r * s)
}

/// Float version of [`segment_intersect`](crate::segment_intersect).
///
/// The convention is the same: both segments are half-open. On intersection
/// this returns the parameter `t` in `[0, 1)` along `a-b`; the point itself is
/// `a + t * (b - a)`. Returns `None` for parallel segments (within
/// [`EPSILON`]) and for parameters outside the half-open ranges.
pub fn segment_intersect_f(p: Vec2, q: Vec2, a: Vec2, b: Vec2) -> Option<f64> {
    let r = q - p;
    let d = b - a;
    let det = r.cross(d);
    if det.abs() < EPSILON {
        return None;
    }
    let w = a - p;
    let s = w.cross(d) / det;
    if !(0.0..1.0).contains(&s) {
        return None;
    }
    let t = w.cross(r) / det;
    (0.0..1.0).contains(&t).then_some(t)
}

/// A coarse compass direction in y-down screen space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward -y.
    Up,
    /// Toward +y.
    Down,
    /// Toward -x.
    Left,
    /// Toward +x.
    Right,
}

impl Direction {
    /// Classify `v` by its dominant axis.
    ///
    /// Exact diagonals resolve to [`Direction::Right`] or
    /// [`Direction::Left`], and the zero vector is [`Direction::Right`].
    pub fn of(v: Vec2) -> Self {
        if v.x >= v.y && v.x >= -v.y {
            Self::Right
        } else if v.y > v.x && v.y > -v.x {
            Self::Down
        } else if v.y < v.x && v.y < -v.x {
            Self::Up
        } else {
            Self::Left
        }
    }

    /// The unit lattice step for this direction.
    pub const fn step(self) -> I2 {
        match self {
            Self::Up => I2::new(0, -1),
            Self::Down => I2::new(0, 1),
            Self::Left => I2::new(-1, 0),
            Self::Right => I2::new(1, 0),
        }
    }
}
