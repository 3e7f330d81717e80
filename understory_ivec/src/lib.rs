// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ivec --heading-base-level=0

//! Understory `IVec`: exact integer 2D vectors and predicates.
//!
//! Obstacle geometry and waypoint graphs want coordinates that do not drift
//! under repeated queries. This crate provides the integer primitives they
//! are built on:
//!
//! - [`I2`], an `(x, y)` pair of `i32`s whose products are widened to `i128`.
//! - [`IRect`], a half-open integer rectangle.
//! - Exact predicates: [`segment_intersect`], [`line_intersect`],
//!   [`nearest_point_on_segment`], [`nearest_point_on_line`], and
//!   [`signed_area2`].
//!
//! The [`float`] module holds the floating-point counterparts on
//! [`kurbo::Vec2`] for continuous-angle work, plus the [`float::Direction`]
//! classifier.
//!
//! # Example
//!
//! ```rust
//! use understory_ivec::{I2, segment_intersect, signed_area2};
//!
//! // Two diagonals of a square cross at its center.
//! let hit = segment_intersect(I2::new(0, 0), I2::new(4, 4), I2::new(0, 4), I2::new(4, 0));
//! assert_eq!(hit, Some(I2::new(2, 2)));
//!
//! // Orientation of a triangle, exactly, even at the ends of the `i32` range.
//! let a = I2::new(i32::MIN, i32::MIN);
//! let b = I2::new(i32::MAX, i32::MIN);
//! let c = I2::new(i32::MAX, i32::MAX);
//! assert!(signed_area2(a, b, c) > 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in `kurbo`.
//! - `libm`: `no_std` builds that use `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc` only in tests.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod float;
mod i2;
mod predicates;
mod rect;

pub use i2::I2;
pub use predicates::{
    line_intersect, nearest_point_on_line, nearest_point_on_segment, segment_intersect,
    signed_area2,
};
pub use rect::IRect;
