// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path search failures.

use understory_ivec::I2;

/// Why [`find_path`](crate::find_path) could not produce a path.
///
/// ```
/// use understory_ivec::I2;
/// use understory_visibility::PathError;
///
/// let err = PathError::NoPath { start: I2::new(0, 0), end: I2::new(9, 9) };
/// assert!(err.is_no_path());
/// assert!(err.to_string().contains("no path"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PathError {
    /// No usable waypoint is visible from `start`, or none can see `end`.
    ///
    /// The search was not run.
    #[error("no path possible from {start:?} to {end:?}: no waypoint links them")]
    NoPathPossible {
        /// Requested start point.
        start: I2,
        /// Requested end point.
        end: I2,
    },

    /// The search ran but never reached `end`.
    #[error("no path found from {start:?} to {end:?}")]
    NoPath {
        /// Requested start point.
        start: I2,
        /// Requested end point.
        end: I2,
    },
}

impl PathError {
    /// Whether seeding ruled the query out before searching.
    #[must_use]
    pub const fn is_no_path_possible(&self) -> bool {
        matches!(self, Self::NoPathPossible { .. })
    }

    /// Whether the search ran and failed.
    #[must_use]
    pub const fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPath { .. })
    }
}
