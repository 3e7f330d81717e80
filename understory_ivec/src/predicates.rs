// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact intersection and projection predicates on [`I2`].
//!
//! All intermediate values are `i128`. For `i32` inputs no product in this
//! module can overflow, so the answers are exact rather than tolerance-based.
//! Only the returned lattice points are approximate, since a true
//! intersection or projection generally lies between lattice points.

use crate::i2::{I2, narrow};

/// Twice the signed area of the triangle `abc`.
///
/// The result is positive when `a -> b -> c` turns clockwise in y-down
/// screen space (counter-clockwise with y up), negative for the opposite
/// turn, and zero when the points are collinear.
#[inline]
pub fn signed_area2(a: I2, b: I2, c: I2) -> i128 {
    cross(diff(b, a), diff(c, a))
}

/// Tests whether the segments `p-q` and `a-b` intersect.
///
/// Both segments are half-open: each start point is included and each end
/// point is excluded. Formally, with `p + s(q - p) = a + t(b - a)`, the test
/// requires `0 <= s < 1` and `0 <= t < 1`. Swapping the two segments never
/// changes whether they intersect.
///
/// Parallel and collinear segments never intersect, and neither does a
/// zero-length segment.
///
/// On intersection, the point is measured along `a-b` and truncated toward
/// zero when it does not land on a lattice point.
///
/// ```
/// use understory_ivec::{I2, segment_intersect};
///
/// let hit = segment_intersect(I2::new(0, 0), I2::new(2, 2), I2::new(0, 2), I2::new(2, 0));
/// assert_eq!(hit, Some(I2::new(1, 1)));
///
/// // Touching only at the end of `p-q` does not count.
/// let miss = segment_intersect(I2::new(0, 0), I2::new(1, 1), I2::new(1, 0), I2::new(1, 1));
/// assert_eq!(miss, None);
/// ```
pub fn segment_intersect(p: I2, q: I2, a: I2, b: I2) -> Option<I2> {
    let (rx, ry) = diff(q, p);
    let (dx, dy) = diff(b, a);
    let (wx, wy) = diff(a, p);

    let mut den = rx * dy - ry * dx;
    if den == 0 {
        return None;
    }
    let mut s = wx * dy - wy * dx;
    let mut t = wx * ry - wy * rx;
    if den < 0 {
        den = -den;
        s = -s;
        t = -t;
    }
    if !(0..den).contains(&s) || !(0..den).contains(&t) {
        return None;
    }
    Some(I2::new(
        narrow(i128::from(a.x) + dx * t / den),
        narrow(i128::from(a.y) + dy * t / den),
    ))
}

/// Intersection of the infinite lines through `p, q` and `a, b`.
///
/// Returns `None` if the lines are parallel or either pair of points
/// coincides. The point is truncated toward zero along `p-q`, and saturates
/// when it lies outside the `i32` range.
pub fn line_intersect(p: I2, q: I2, a: I2, b: I2) -> Option<I2> {
    let (rx, ry) = diff(q, p);
    let (dx, dy) = diff(b, a);
    let (wx, wy) = diff(a, p);

    let den = rx * dy - ry * dx;
    if den == 0 {
        return None;
    }
    let s = wx * dy - wy * dx;
    Some(I2::new(
        narrow(i128::from(p.x) + rx * s / den),
        narrow(i128::from(p.y) + ry * s / den),
    ))
}

/// The point on the infinite line through `u` and `v` nearest to `p`.
///
/// Returns the projection rounded to the nearest lattice point, together with
/// the exact squared distance from `p` to the line, rounded down. When
/// `u == v` the "line" is the single point `u`.
pub fn nearest_point_on_line(u: I2, v: I2, p: I2) -> (I2, i128) {
    if u == v {
        return (u, p.distance_squared(u));
    }
    let d = diff(v, u);
    let w = diff(p, u);
    let den = dot(d, d);
    (project(u, d, dot(w, d), den), perp_distance_squared(d, w, den))
}

/// The point on the segment `u-v` nearest to `p`.
///
/// The orthogonal projection of `p` is clamped to the segment's endpoints.
/// The result is rounded to the nearest lattice point. The distance is the
/// exact squared distance from `p` to the segment, rounded down: to the
/// clamped endpoint, or perpendicular to the segment when the projection
/// falls inside it. It is not the distance to the rounded point. A
/// degenerate segment (`u == v`) yields `u`.
///
/// ```
/// use understory_ivec::{I2, nearest_point_on_segment};
///
/// let (q, d2) = nearest_point_on_segment(I2::new(0, 0), I2::new(4, 0), I2::new(1, 1));
/// assert_eq!((q, d2), (I2::new(1, 0), 1));
///
/// // Beyond an endpoint, the endpoint itself is nearest.
/// let (q, d2) = nearest_point_on_segment(I2::new(0, 0), I2::new(4, 0), I2::new(6, 0));
/// assert_eq!((q, d2), (I2::new(4, 0), 4));
/// ```
pub fn nearest_point_on_segment(u: I2, v: I2, p: I2) -> (I2, i128) {
    if u == v {
        return (u, p.distance_squared(u));
    }
    let d = diff(v, u);
    let w = diff(p, u);
    let num = dot(w, d);
    if num <= 0 {
        return (u, p.distance_squared(u));
    }
    let den = dot(d, d);
    if num >= den {
        return (v, p.distance_squared(v));
    }
    (project(u, d, num, den), perp_distance_squared(d, w, den))
}

/// `floor(cross(d, w)^2 / den)`, the squared distance from `u + w` to the
/// line through `u` along `d`, where `den = dot(d, d) > 0`.
///
/// With every point inside the `i32` square, `|cross(d, w)|` is twice a
/// triangle's area and so at most `(2^32 - 1)^2`; its square fits `u128`.
#[allow(
    clippy::cast_possible_wrap,
    reason = "The quotient is at most `dot(w, w)`, which fits in `i128`."
)]
#[inline]
fn perp_distance_squared(d: (i128, i128), w: (i128, i128), den: i128) -> i128 {
    let c = cross(d, w).unsigned_abs();
    (c * c / den.unsigned_abs()) as i128
}

/// `u + d * num / den`, rounded to nearest. `den` must be positive.
#[inline]
fn project(u: I2, (dx, dy): (i128, i128), num: i128, den: i128) -> I2 {
    I2::new(
        narrow(i128::from(u.x) + div_round(dx * num, den)),
        narrow(i128::from(u.y) + div_round(dy * num, den)),
    )
}

/// Division rounding half up. `d` must be positive.
#[inline]
fn div_round(n: i128, d: i128) -> i128 {
    debug_assert!(d > 0, "div_round expects a positive divisor");
    (2 * n + d).div_euclid(2 * d)
}

/// `a - b`, widened before subtracting so extreme coordinates cannot overflow.
#[inline]
fn diff(a: I2, b: I2) -> (i128, i128) {
    (
        i128::from(a.x) - i128::from(b.x),
        i128::from(a.y) - i128::from(b.y),
    )
}

#[inline]
fn dot((ax, ay): (i128, i128), (bx, by): (i128, i128)) -> i128 {
    ax * bx + ay * by
}

#[inline]
fn cross((ax, ay): (i128, i128), (bx, by): (i128, i128)) -> i128 {
    ax * by - ay * bx
}
