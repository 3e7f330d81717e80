// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_visibility --heading-base-level=0

//! Understory Visibility: obstacle graphs and shortest paths by line of sight.
//!
//! Obstacles are directed edges on the integer lattice, stored in a
//! [`Graph`]. An edge blocks a line of sight only from the side it faces,
//! so a polygon wound one way blocks from outside, and a barrier inserted in
//! both directions blocks from either side. All intersection tests are exact
//! (see [`understory_ivec`]).
//!
//! [`find_path`] answers "how do I get from here to there" without a grid:
//! it goes straight when it can, and otherwise turns only at the vertices of
//! a second *waypoint* graph, typically the obstacle corners nudged outward.
//! The search is Dijkstra's algorithm, seeded with every waypoint visible
//! from the start and finished by any waypoint that can see the end.
//!
//! # Example
//!
//! ```rust
//! use understory_ivec::{I2, IRect};
//! use understory_visibility::{Graph, find_path, path_length};
//!
//! // A wall from (10, -5) to (10, 20), solid from both sides.
//! let mut obstacles = Graph::new();
//! obstacles.add_edge(I2::new(10, -5), I2::new(10, 20));
//! obstacles.add_edge(I2::new(10, 20), I2::new(10, -5));
//!
//! // Its two ends are the places to turn.
//! let mut waypoints = Graph::new();
//! waypoints.add_edge(I2::new(10, -5), I2::new(10, 20));
//! waypoints.add_edge(I2::new(10, 20), I2::new(10, -5));
//!
//! let start = I2::new(0, 0);
//! let end = I2::new(20, 0);
//! let bounds = IRect::new(-100, -100, 100, 100);
//! let path = find_path(&obstacles, &waypoints, start, end, bounds).unwrap();
//!
//! // The short way round is past the top end of the wall.
//! assert_eq!(path.as_slice(), &[I2::new(10, -5), end]);
//! assert!(path_length(start, &path) < 23.0);
//! ```
//!
//! Queries that cannot succeed report why through [`PathError`].
//!
//! ## Features
//!
//! - `std` (default): forwarded to `understory_ivec`.
//! - `libm`: `no_std` floating-point math, forwarded to `understory_ivec`.
//!
//! Diagnostic events are emitted through [`tracing`]; install a subscriber
//! to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod graph;
mod path;

pub use error::PathError;
pub use graph::{Edge, Graph};
pub use path::{Path, find_path, path_length};
