// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer axis-aligned rectangles.

use crate::I2;

/// Axis-aligned integer rectangle.
///
/// `min` is inclusive and `max` is exclusive, so the rectangle covers the
/// lattice points `[min.x, max.x) x [min.y, max.y)`. Use
/// [`contains_inclusive`](Self::contains_inclusive) when both corners should
/// count, as for search bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IRect {
    /// Minimum corner (upper-left in screen space), inclusive.
    pub min: I2,
    /// Maximum corner (lower-right in screen space), exclusive.
    pub max: I2,
}

impl IRect {
    /// Create a rectangle from its min/max coordinates.
    #[inline(always)]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: I2::new(x0, y0),
            max: I2::new(x1, y1),
        }
    }

    /// Create a rectangle from its two corners.
    #[inline(always)]
    pub const fn from_corners(min: I2, max: I2) -> Self {
        Self { min, max }
    }

    /// Whether `p` lies in the half-open rectangle.
    #[inline]
    pub const fn contains(&self, p: I2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Whether `p` lies in the rectangle with both corners included.
    #[inline]
    pub const fn contains_inclusive(&self, p: I2) -> bool {
        p.in_rect(self.min, self.max)
    }

    /// Whether the two rectangles share some area.
    ///
    /// Rectangles that only touch along an edge or at a corner do not
    /// overlap, and empty rectangles overlap nothing.
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        other.max.x > self.min.x
            && other.min.x < self.max.x
            && other.max.y > self.min.y
            && other.min.y < self.max.y
    }

    /// The rectangle moved by `offset`.
    #[inline]
    pub fn translate(&self, offset: I2) -> Self {
        Self::from_corners(self.min + offset, self.max + offset)
    }

    /// Width and height.
    #[inline]
    pub fn size(&self) -> I2 {
        self.max - self.min
    }

    /// The same size, with the min corner moved to `min`.
    #[inline]
    pub fn reposition(&self, min: I2) -> Self {
        Self::from_corners(min, min + self.size())
    }

    /// The same min corner, with a new size.
    #[inline]
    pub fn resize(&self, size: I2) -> Self {
        Self::from_corners(self.min, self.min + size)
    }

    /// Whether the rectangle covers no lattice points.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    /// Iterate the lattice points of the half-open rectangle, column by
    /// column.
    pub fn points(&self) -> impl Iterator<Item = I2> + use<> {
        let Self { min, max } = *self;
        (min.x..max.x).flat_map(move |x| (min.y..max.y).map(move |y| I2::new(x, y)))
    }
}
