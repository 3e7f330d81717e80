// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cells --heading-base-level=0

//! Understory Cells: which grid cells does a segment touch?
//!
//! Tile renderers, broad-phase collision, and line-of-sight checks over a
//! tile map all need the cells under a line segment, in order, with none
//! skipped and none repeated. [`CellGrid::cells_touching_segment`] walks them
//! with a DDA whose boundary parameters are exact rationals, so long or
//! nearly axis-aligned segments do not drift into the wrong row.
//!
//! - Cells are addressed with floor division, so negative coordinates work.
//! - Segments inside one row or column step straight to the end cell.
//! - Where a segment crosses a lattice corner, the walk stays edge-connected.
//! - The visitor returns `false` to stop early.
//!
//! # Example
//!
//! ```rust
//! use understory_cells::CellGrid;
//! use understory_ivec::I2;
//!
//! let grid = CellGrid::new(I2::new(16, 16));
//! let cells = grid.segment_cells(I2::new(8, 8), I2::new(40, 24));
//! assert_eq!(
//!     cells,
//!     [I2::new(0, 0), I2::new(1, 0), I2::new(1, 1), I2::new(2, 1)]
//! );
//!
//! // Stop at the first cell in column 1.
//! let mut hit = None;
//! let finished = grid.cells_touching_segment(I2::new(8, 8), I2::new(40, 24), |cell| {
//!     if cell.x == 1 {
//!         hit = Some(cell);
//!         return false;
//!     }
//!     true
//! });
//! assert!(!finished);
//! assert_eq!(hit, Some(I2::new(1, 0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to `understory_ivec`.
//! - `libm`: forwarded to `understory_ivec` for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod segment;

pub use grid::CellGrid;
pub use segment::cells_touching_segment;
