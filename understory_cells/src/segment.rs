// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact DDA traversal of the cells under a segment.

use tracing::trace;
use understory_ivec::I2;

use crate::CellGrid;

/// Call `visit` for every cell of a grid anchored at `(0, 0)` that the
/// segment `start-end` touches.
///
/// This is [`CellGrid::cells_touching_segment`] on `CellGrid::new(cell_size)`.
///
/// ```
/// use understory_ivec::I2;
/// use understory_cells::cells_touching_segment;
///
/// let mut n = 0;
/// cells_touching_segment(I2::new(16, 16), I2::new(0, 0), I2::new(159, 15), |_| {
///     n += 1;
///     true
/// });
/// assert_eq!(n, 10);
/// ```
pub fn cells_touching_segment<F>(cell_size: I2, start: I2, end: I2, visit: F) -> bool
where
    F: FnMut(I2) -> bool,
{
    CellGrid::new(cell_size).cells_touching_segment(start, end, visit)
}

/// Cell coordinates are kept in `i64` during the walk so stepping can never
/// overflow. Cells whose index does not fit `i32` are stepped over without a
/// visit.
pub(crate) fn walk<F>(grid: &CellGrid, start: I2, end: I2, mut visit: F) -> bool
where
    F: FnMut(I2) -> bool,
{
    let (mut px, mut py) = grid.cell_of_wide(start);
    let (qx, qy) = grid.cell_of_wide(end);
    let (sx, sy) = ((qx - px).signum(), (qy - py).signum());
    let mut emit = |x: i64, y: i64| match (i32::try_from(x), i32::try_from(y)) {
        (Ok(x), Ok(y)) => visit(I2::new(x, y)),
        _ => true,
    };

    // Same row or column: unit steps from cell to cell.
    if sx == 0 || sy == 0 {
        loop {
            if !emit(px, py) {
                return false;
            }
            if (px, py) == (qx, qy) {
                return true;
            }
            px += sx;
            py += sy;
        }
    }

    // General case. The segment parameter at the next boundary on each axis
    // is `n / d`: `d` is the extent along that axis and `n` the distance from
    // `start` to the boundary. Comparisons cross-multiply, so no rounding.
    let w = i64::from(grid.cell_size().x);
    let h = i64::from(grid.cell_size().y);
    let (rx, ry) = grid.relative(start);
    let (ex, ey) = grid.relative(end);
    let dx = i128::from((ex - rx).abs());
    let dy = i128::from((ey - ry).abs());
    let mut nx = i128::from(if sx > 0 { (px + 1) * w - rx } else { rx - px * w });
    let mut ny = i128::from(if sy > 0 { (py + 1) * h - ry } else { ry - py * h });

    loop {
        if !emit(px, py) {
            return false;
        }
        if (px, py) == (qx, qy) {
            return true;
        }
        if nx > dx && ny > dy {
            trace!(?start, ?end, cell_x = px, cell_y = py, "walk ran past end");
            return true;
        }
        // An axis that already reached the end cell never steps again. On a
        // tie (a lattice corner), y steps first.
        let step_x = py == qy || (px != qx && nx * dy < ny * dx);
        if step_x {
            nx += i128::from(w);
            px += sx;
        } else {
            ny += i128::from(h);
            py += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn p(x: i32, y: i32) -> I2 {
        I2::new(x, y)
    }

    fn cells(start: I2, end: I2) -> Vec<I2> {
        CellGrid::new(p(16, 16)).segment_cells(start, end)
    }

    /// Visits are unique, edge-connected, and run from the start cell to the
    /// end cell.
    fn assert_chain(grid: &CellGrid, start: I2, end: I2, got: &[I2]) {
        assert_eq!(got.first(), Some(&grid.cell_of(start)), "{start:?}-{end:?}");
        assert_eq!(got.last(), Some(&grid.cell_of(end)), "{start:?}-{end:?}");
        for pair in got.windows(2) {
            let step = pair[1] - pair[0];
            assert_eq!(
                step.x.abs() + step.y.abs(),
                1,
                "{start:?}-{end:?}: {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
        let span = grid.cell_of(end) - grid.cell_of(start);
        let want = usize::try_from(span.x.abs() + span.y.abs() + 1).unwrap();
        assert_eq!(got.len(), want, "{start:?}-{end:?}: {got:?}");
    }

    #[test]
    fn special_case_counts() {
        let cases = [
            (p(0, 0), p(0, 0), 1),
            (p(0, 0), p(16, 0), 2),
            (p(0, 0), p(-1, 0), 2),
            (p(0, 0), p(0, -1), 2),
            (p(0, 0), p(-15, 0), 2),
            (p(0, 0), p(0, -15), 2),
            (p(0, 0), p(-16, 0), 2),
            (p(0, 0), p(0, -16), 2),
            (p(0, 0), p(15, -16), 2),
            (p(8, 8), p(9, 9), 1),
            (p(0, 0), p(15, 15), 1),
            (p(0, 0), p(159, 15), 10),
        ];
        for (i, (start, end, want)) in cases.into_iter().enumerate() {
            let mut got = 0;
            let done = cells_touching_segment(p(16, 16), start, end, |_| {
                got += 1;
                true
            });
            assert!(done, "case #{i}: walk was cut short");
            assert_eq!(got, want, "case #{i}: {start:?}-{end:?}");
        }
    }

    #[test]
    fn diagonal_through_corners() {
        assert_eq!(
            cells(p(0, 0), p(32, 32)),
            [p(0, 0), p(0, 1), p(1, 1), p(1, 2), p(2, 2)]
        );
        assert_eq!(
            cells(p(32, 32), p(0, 0)),
            [p(2, 2), p(2, 1), p(1, 1), p(1, 0), p(0, 0)]
        );
    }

    #[test]
    fn shallow_diagonal() {
        assert_eq!(
            cells(p(8, 8), p(40, 24)),
            [p(0, 0), p(1, 0), p(1, 1), p(2, 1)]
        );
    }

    #[test]
    fn ends_on_a_corner_moving_up() {
        // Passes exactly through the corner at (16, 16) as it ends there.
        assert_eq!(cells(p(0, 40), p(16, 16)), [p(0, 2), p(0, 1), p(1, 1)]);
        let g = CellGrid::new(p(16, 16));
        assert_chain(&g, p(0, 40), p(16, 16), &cells(p(0, 40), p(16, 16)));
    }

    #[test]
    fn negative_coordinates_floor() {
        assert_eq!(
            cells(p(-1, -1), p(1, 1)),
            [p(-1, -1), p(-1, 0), p(0, 0)]
        );
    }

    #[test]
    fn visit_can_stop_early() {
        let mut seen = Vec::new();
        let done = cells_touching_segment(p(16, 16), p(0, 0), p(159, 15), |c| {
            seen.push(c);
            c.x < 2
        });
        assert!(!done);
        assert_eq!(seen, [p(0, 0), p(1, 0), p(2, 0)]);

        let mut calls = 0;
        let done = cells_touching_segment(p(16, 16), p(0, 0), p(40, 40), |_| {
            calls += 1;
            false
        });
        assert!(!done);
        assert_eq!(calls, 1);
    }

    #[test]
    fn origin_and_uneven_cells() {
        let g = CellGrid::with_origin(p(10, 4), p(3, -2));
        let got = g.segment_cells(p(3, -2), p(27, 9));
        assert_chain(&g, p(3, -2), p(27, 9), &got);
    }

    #[test]
    fn sweep_always_reaches_the_end_cell() {
        // Small LCG so the sweep is deterministic.
        let mut state = 0x2545_f491_u32;
        let mut next = || {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            i32::try_from(state >> 22).unwrap() - 512
        };
        let grids = [
            CellGrid::new(p(16, 16)),
            CellGrid::new(p(7, 13)),
            CellGrid::with_origin(p(5, 5), p(-3, 11)),
        ];
        for grid in grids {
            for _ in 0..300 {
                let start = p(next(), next());
                let end = p(next(), next());
                let got = grid.segment_cells(start, end);
                assert_chain(&grid, start, end, &got);
            }
        }
    }

    #[test]
    fn cells_past_the_i32_range_are_not_visited() {
        // Cell x is `p.x + 2^31`, so only cells up to `p.x = -1` are addressable.
        let g = CellGrid::with_origin(p(1, 1), p(i32::MIN, i32::MIN));
        let got = g.segment_cells(p(-3, i32::MIN), p(2, i32::MIN));
        assert_eq!(
            got,
            [p(i32::MAX - 2, 0), p(i32::MAX - 1, 0), p(i32::MAX, 0)]
        );

        let got = g.segment_cells(p(-3, i32::MIN), p(2, i32::MIN + 3));
        assert!(!got.is_empty());
        for (i, a) in got.iter().enumerate() {
            assert!(!got[i + 1..].contains(a), "{a:?} visited twice");
        }
    }

    #[test]
    fn extreme_coordinates_terminate() {
        let g = CellGrid::new(p(1 << 20, 1 << 20));
        let start = p(i32::MIN, i32::MIN);
        let end = p(i32::MAX, i32::MAX - 12_345);
        assert_chain(&g, start, end, &g.segment_cells(start, end));
    }
}
