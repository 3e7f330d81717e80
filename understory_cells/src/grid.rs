// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid addressing.

use alloc::vec::Vec;

use smallvec::SmallVec;
use understory_ivec::{I2, IRect};

use crate::segment;

/// A uniform grid of `cell_size` rectangles anchored at `origin`.
///
/// Cell `(x, y)` covers the half-open rectangle
/// `origin + [x * w, (x + 1) * w) x [y * h, (y + 1) * h)`. Cell coordinates
/// round toward negative infinity, so points just left of or above the
/// origin land in cell `-1`, not `0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellGrid {
    cell_size: I2,
    origin: I2,
}

impl CellGrid {
    /// Create a grid with the given cell size, anchored at `(0, 0)`.
    pub fn new(cell_size: I2) -> Self {
        Self::with_origin(cell_size, I2::ZERO)
    }

    /// Create a grid with the given cell size and origin.
    pub fn with_origin(cell_size: I2, origin: I2) -> Self {
        debug_assert!(
            cell_size.x > 0 && cell_size.y > 0,
            "cell_size must be strictly positive"
        );
        Self { cell_size, origin }
    }

    /// Width and height of each cell.
    pub fn cell_size(&self) -> I2 {
        self.cell_size
    }

    /// The corner of cell `(0, 0)`.
    pub fn origin(&self) -> I2 {
        self.origin
    }

    /// The cell containing `p`.
    ///
    /// With a small cell size and a distant origin the true index can fall
    /// outside `i32`; it then saturates.
    pub fn cell_of(&self, p: I2) -> I2 {
        let (x, y) = self.cell_of_wide(p);
        I2::new(saturate(x), saturate(y))
    }

    /// The cell containing `p`, without narrowing back to `i32`.
    pub(crate) fn cell_of_wide(&self, p: I2) -> (i64, i64) {
        let (rx, ry) = self.relative(p);
        (
            rx.div_euclid(i64::from(self.cell_size.x)),
            ry.div_euclid(i64::from(self.cell_size.y)),
        )
    }

    /// `p - origin`, widened.
    pub(crate) fn relative(&self, p: I2) -> (i64, i64) {
        (
            i64::from(p.x) - i64::from(self.origin.x),
            i64::from(p.y) - i64::from(self.origin.y),
        )
    }

    /// The half-open rectangle covered by `cell`.
    ///
    /// Corners outside the `i32` range saturate.
    pub fn cell_rect(&self, cell: I2) -> IRect {
        let corner = |c: i32, size: i32, origin: i32| {
            saturate(i64::from(c) * i64::from(size) + i64::from(origin))
        };
        let (w, h) = self.cell_size.components();
        IRect::new(
            corner(cell.x, w, self.origin.x),
            corner(cell.y, h, self.origin.y),
            corner(cell.x.saturating_add(1), w, self.origin.x),
            corner(cell.y.saturating_add(1), h, self.origin.y),
        )
    }

    /// Call `visit` for every cell the segment `start-end` touches, in order
    /// from the cell of `start` to the cell of `end`.
    ///
    /// Returns `false` if `visit` returned `false` (and stops there), `true`
    /// otherwise. Each cell is visited at most once, and consecutive cells
    /// share an edge. Where the segment passes exactly through a lattice
    /// corner, one of the two side cells is visited as well.
    ///
    /// Cells whose index does not fit in `i32` have no address and are
    /// skipped; the walk continues past them.
    pub fn cells_touching_segment<F>(&self, start: I2, end: I2, visit: F) -> bool
    where
        F: FnMut(I2) -> bool,
    {
        segment::walk(self, start, end, visit)
    }

    /// Collect the cells touched by `start-end`, in visiting order.
    pub fn segment_cells(&self, start: I2, end: I2) -> Vec<I2> {
        let mut out = Vec::new();
        self.cells_touching_segment(start, end, |cell| {
            out.push(cell);
            true
        });
        out
    }

    /// The cells sharing area with the half-open rectangle `rect`, column by
    /// column. Empty rectangles touch no cells.
    pub fn cells_overlapping(&self, rect: IRect) -> SmallVec<[I2; 4]> {
        let mut out = SmallVec::new();
        if rect.is_empty() {
            return out;
        }
        let lo = self.cell_of(rect.min);
        let hi = self.cell_of(rect.max - I2::new(1, 1));
        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                out.push(I2::new(x, y));
            }
        }
        out
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Cell indices are i32; out-of-range values are saturated."
)]
#[inline]
pub(crate) fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> I2 {
        I2::new(x, y)
    }

    #[test]
    fn cell_of_floors_negative_coordinates() {
        let g = CellGrid::new(p(16, 16));
        assert_eq!(g.cell_of(p(0, 0)), p(0, 0));
        assert_eq!(g.cell_of(p(15, 15)), p(0, 0));
        assert_eq!(g.cell_of(p(16, 31)), p(1, 1));
        assert_eq!(g.cell_of(p(-1, -16)), p(-1, -1));
        assert_eq!(g.cell_of(p(-17, -15)), p(-2, -1));
    }

    #[test]
    fn origin_shifts_cells() {
        let g = CellGrid::with_origin(p(10, 20), p(5, -5));
        assert_eq!(g.cell_of(p(5, -5)), p(0, 0));
        assert_eq!(g.cell_of(p(4, -6)), p(-1, -1));
        assert_eq!(g.cell_rect(p(1, 1)), IRect::new(15, 15, 25, 35));
        assert_eq!(g.cell_size(), p(10, 20));
        assert_eq!(g.origin(), p(5, -5));
    }

    #[test]
    fn cell_rect_contains_its_points() {
        let g = CellGrid::with_origin(p(7, 3), p(-2, 1));
        for cell in [p(0, 0), p(-3, 2), p(4, -5)] {
            let r = g.cell_rect(cell);
            for q in r.points() {
                assert_eq!(g.cell_of(q), cell, "{q:?} in {r:?}");
            }
        }
    }

    #[test]
    fn extreme_coordinates_saturate() {
        let g = CellGrid::with_origin(p(1, 1), p(i32::MIN, i32::MIN));
        assert_eq!(g.cell_of(p(i32::MAX, i32::MAX)), p(i32::MAX, i32::MAX));
    }

    #[test]
    fn overlapping_cells_of_a_rect() {
        let g = CellGrid::new(p(16, 16));
        let cells = g.cells_overlapping(IRect::new(8, 8, 24, 16));
        assert_eq!(cells.as_slice(), &[p(0, 0), p(1, 0)]);
        let cells = g.cells_overlapping(IRect::new(-1, -1, 1, 1));
        assert_eq!(cells.as_slice(), &[p(-1, -1), p(-1, 0), p(0, -1), p(0, 0)]);
        assert!(g.cells_overlapping(IRect::new(3, 3, 3, 9)).is_empty());
    }
}
