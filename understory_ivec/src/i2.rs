// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The exact integer 2-vector.

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// A pair of integers `(x, y)`.
///
/// Components are `i32`. Every product the crate forms from them (dot and
/// cross products, signed areas, squared distances) is widened to `i128`, so
/// those values are exact for the full `i32` range.
///
/// The y axis grows downward, matching screen space and [`kurbo`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct I2 {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl I2 {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new vector from its components.
    #[inline(always)]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The components as a tuple.
    #[inline]
    pub const fn components(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Element-wise product.
    #[inline]
    pub const fn emul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Element-wise quotient, truncating toward zero like `/`.
    #[inline]
    pub const fn ediv(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Sign of each component (`-1`, `0`, or `1`).
    #[inline]
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// Dot product, widened.
    #[inline]
    pub const fn dot(self, other: Self) -> i128 {
        self.x as i128 * other.x as i128 + self.y as i128 * other.y as i128
    }

    /// The z component of the 3D cross product, widened.
    ///
    /// Positive when `other` is clockwise from `self` in y-down screen space.
    #[inline]
    pub const fn cross(self, other: Self) -> i128 {
        self.x as i128 * other.y as i128 - self.y as i128 * other.x as i128
    }

    /// A perpendicular vector of the same length, `(-y, x)`.
    #[inline]
    pub const fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Exchange the components.
    #[inline]
    pub const fn swap(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Complex product, treating `x` as the real and `y` as the imaginary part.
    #[inline]
    pub const fn cmul(self, other: Self) -> Self {
        Self::new(
            other.x * self.x - other.y * self.y,
            other.y * self.x + other.x * self.y,
        )
    }

    /// Product of the components, widened.
    #[inline]
    pub const fn area(self) -> i64 {
        self.x as i64 * self.y as i64
    }

    /// Scale by the rational `n / d` without intermediate overflow.
    ///
    /// Division truncates toward zero. Results outside `i32` saturate.
    #[inline]
    pub fn mul_div(self, n: i128, d: i128) -> Self {
        debug_assert!(d != 0, "mul_div denominator must be non-zero");
        Self::new(
            narrow(i128::from(self.x) * n / d),
            narrow(i128::from(self.y) * n / d),
        )
    }

    /// Clamp each component from below by the matching component of `lo`.
    #[inline]
    pub fn clamp_lo(self, lo: Self) -> Self {
        Self::new(self.x.max(lo.x), self.y.max(lo.y))
    }

    /// Clamp each component from above by the matching component of `hi`.
    #[inline]
    pub fn clamp_hi(self, hi: Self) -> Self {
        Self::new(self.x.min(hi.x), self.y.min(hi.y))
    }

    /// Whether `self` lies in the rectangle spanned by `ul` and `dr`, both
    /// corners included.
    #[inline]
    pub const fn in_rect(self, ul: Self, dr: Self) -> bool {
        self.x >= ul.x && self.x <= dr.x && self.y >= ul.y && self.y <= dr.y
    }

    /// Exact squared Euclidean distance to `other`.
    #[inline]
    pub const fn distance_squared(self, other: Self) -> i128 {
        let dx = other.x as i128 - self.x as i128;
        let dy = other.y as i128 - self.y as i128;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    /// Convert to a [`Vec2`]. Exact for every `i32`.
    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Convert to a [`Point`]. Exact for every `i32`.
    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Round a [`Vec2`] to the nearest lattice point.
    ///
    /// Halves round away from zero; values outside `i32` saturate.
    #[inline]
    pub fn from_vec2_rounded(v: Vec2) -> Self {
        Self::new(round_to_i32(v.x), round_to_i32(v.y))
    }

    /// Round a [`Point`] to the nearest lattice point.
    #[inline]
    pub fn from_point_rounded(p: Point) -> Self {
        Self::new(round_to_i32(p.x), round_to_i32(p.y))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "The value is clamped into `i32` range first."
)]
#[inline]
pub(crate) fn narrow(v: i128) -> i32 {
    v.clamp(i128::from(i32::MIN), i128::from(i32::MAX)) as i32
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Float to int casts saturate, which is the documented behavior."
)]
#[inline]
fn round_to_i32(v: f64) -> i32 {
    v.round() as i32
}

impl Add for I2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for I2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for I2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for I2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for I2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for I2 {
    type Output = Self;

    #[inline]
    fn mul(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl Div<i32> for I2 {
    type Output = Self;

    /// Truncating division of both components.
    #[inline]
    fn div(self, k: i32) -> Self {
        Self::new(self.x / k, self.y / k)
    }
}

impl From<(i32, i32)> for I2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<I2> for (i32, i32) {
    #[inline]
    fn from(v: I2) -> Self {
        (v.x, v.y)
    }
}

impl From<I2> for Vec2 {
    #[inline]
    fn from(v: I2) -> Self {
        v.to_vec2()
    }
}

impl From<I2> for Point {
    #[inline]
    fn from(v: I2) -> Self {
        v.to_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_are_widened() {
        let big = I2::new(i32::MAX, i32::MIN);
        assert_eq!(
            big.dot(big),
            2 * i128::from(i32::MAX) * i128::from(i32::MAX) + 1 + 2 * i128::from(i32::MAX)
        );
        assert_eq!(I2::new(1, 0).cross(I2::new(0, 1)), 1);
        assert_eq!(I2::new(0, 1).cross(I2::new(1, 0)), -1);
    }

    #[test]
    fn normal_rotates_a_quarter_turn() {
        assert_eq!(I2::new(0, 5).normal(), I2::new(-5, 0));
        assert_eq!(I2::new(5, 0).normal(), I2::new(0, 5));
        assert_eq!(I2::new(0, -5).normal(), I2::new(5, 0));
        assert_eq!(I2::new(-5, 0).normal(), I2::new(0, -5));
    }

    #[test]
    fn mul_div_avoids_overflow_and_saturates() {
        let v = I2::new(2_000_000, -2_000_000);
        assert_eq!(v.mul_div(2_000_000, 4_000_000), I2::new(1_000_000, -1_000_000));
        assert_eq!(I2::new(i32::MAX, 0).mul_div(4, 1), I2::new(i32::MAX, 0));
    }

    #[test]
    fn in_rect_includes_both_corners() {
        let ul = I2::new(0, 0);
        let dr = I2::new(4, 4);
        assert!(ul.in_rect(ul, dr));
        assert!(dr.in_rect(ul, dr));
        assert!(!I2::new(5, 4).in_rect(ul, dr));
        assert!(!I2::new(2, -1).in_rect(ul, dr));
    }

    #[test]
    fn rounding_from_floats() {
        assert_eq!(I2::from_vec2_rounded(Vec2::new(1.5, -1.5)), I2::new(2, -2));
        assert_eq!(I2::from_point_rounded(Point::new(0.4, 2.6)), I2::new(0, 3));
        assert_eq!(I2::from_vec2_rounded(Vec2::new(1e20, -1e20)), I2::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(I2::new(0, 0).distance_squared(I2::new(3, 4)), 25);
        assert!((I2::new(0, 0).distance(I2::new(3, 4)) - 5.0).abs() < 1e-12);
    }
}
