// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directed edge graphs used both for obstacles and for waypoints.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use understory_ivec::{I2, nearest_point_on_segment, segment_intersect, signed_area2};

/// A directed edge from `u` to `v`.
///
/// As an obstacle, an edge only blocks lines of sight from the side it
/// faces; see [`Graph::edges_facing`]. Insert both directions for a barrier
/// that blocks from either side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Start vertex.
    pub u: I2,
    /// End vertex.
    pub v: I2,
}

impl Edge {
    /// Create an edge from `u` to `v`.
    #[inline]
    pub const fn new(u: I2, v: I2) -> Self {
        Self { u, v }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.u.distance(self.v)
    }

    /// The same segment, traversed from `v` to `u`.
    #[inline]
    pub const fn reverse(&self) -> Self {
        Self::new(self.v, self.u)
    }
}

impl From<(I2, I2)> for Edge {
    #[inline]
    fn from((u, v): (I2, I2)) -> Self {
        Self::new(u, v)
    }
}

/// A set of vertices with directed successor sets.
///
/// The same type serves two roles. As an obstacle graph, its edges are
/// barriers tested by [`blocks`](Self::blocks) and friends. As a waypoint
/// graph, its vertices are candidate turning points for
/// [`find_path`](crate::find_path) and its edges are the hops allowed between
/// them.
///
/// Vertices are never removed; build a new graph when the scene changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: HashSet<I2>,
    edges: HashMap<I2, HashSet<I2>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the directed edge `u -> v`, inserting both endpoints as vertices.
    ///
    /// The reverse edge is not added. Returns `true` if the edge was new.
    pub fn add_edge(&mut self, u: I2, v: I2) -> bool {
        self.vertices.insert(u);
        self.vertices.insert(v);
        self.edges.entry(u).or_default().insert(v)
    }

    /// Add a closed ring of edges `ring[0] -> ring[1] -> ... -> ring[0]`.
    ///
    /// Each edge faces the points on its positive side (see
    /// [`edges_facing`](Self::edges_facing)), so the winding decides whether
    /// the ring blocks sight from outside or from inside. Rings with fewer
    /// than two points add nothing.
    pub fn add_polygon(&mut self, ring: &[I2]) {
        if ring.len() < 2 {
            return;
        }
        for (i, &u) in ring.iter().enumerate() {
            let v = ring[(i + 1) % ring.len()];
            if u != v {
                self.add_edge(u, v);
            }
        }
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.edges.values().map(HashSet::len).sum()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `p` is a vertex.
    pub fn contains_vertex(&self, p: I2) -> bool {
        self.vertices.contains(&p)
    }

    /// Whether the directed edge `u -> v` is present.
    pub fn contains_edge(&self, u: I2, v: I2) -> bool {
        self.edges.get(&u).is_some_and(|succ| succ.contains(&v))
    }

    /// Iterate all vertices, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = I2> + '_ {
        self.vertices.iter().copied()
    }

    /// Iterate the successors of `u`. Empty if `u` has no outgoing edges.
    pub fn successors(&self, u: I2) -> impl Iterator<Item = I2> + '_ {
        self.edges.get(&u).into_iter().flatten().copied()
    }

    /// Iterate all edges, in unspecified order.
    ///
    /// Use iterator adapters such as [`Iterator::any`] to stop early.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .flat_map(|(&u, succ)| succ.iter().map(move |&v| Edge::new(u, v)))
    }

    /// Collect all edges into a vector.
    pub fn edges_vec(&self) -> Vec<Edge> {
        self.edges().collect()
    }

    /// Iterate the edges that face `p`.
    ///
    /// An edge `u -> v` faces `p` when `signed_area2(p, u, v) > 0`. Points
    /// collinear with an edge are faced by neither direction of it.
    pub fn edges_facing(&self, p: I2) -> impl Iterator<Item = Edge> + '_ {
        self.edges().filter(move |e| signed_area2(p, e.u, e.v) > 0)
    }

    /// Whether some edge facing `start` crosses the segment `start-end`.
    ///
    /// Both the edge and the query segment are half-open, so a line of sight
    /// that ends exactly on an obstacle vertex is not blocked by that
    /// vertex's edges.
    pub fn blocks(&self, start: I2, end: I2) -> bool {
        self.edges_facing(start)
            .any(|e| segment_intersect(e.u, e.v, start, end).is_some())
    }

    /// Whether any edge, regardless of facing, crosses `start-end`.
    pub fn fully_blocks(&self, start: I2, end: I2) -> bool {
        self.edges()
            .any(|e| segment_intersect(e.u, e.v, start, end).is_some())
    }

    /// The first point along `start-end` where an edge facing `start` blocks
    /// it, or `None` when nothing does.
    ///
    /// Candidate hits are compared by exact squared distance from `start`.
    pub fn nearest_block(&self, start: I2, end: I2) -> Option<I2> {
        self.edges_facing(start)
            .filter_map(|e| segment_intersect(e.u, e.v, start, end))
            .min_by_key(|hit| start.distance_squared(*hit))
    }

    /// The edge closest to `query`, with the nearest lattice point on it.
    ///
    /// Returns `None` for a graph without edges. Ties are broken by
    /// iteration order, which is unspecified.
    pub fn nearest_point(&self, query: I2) -> Option<(Edge, I2)> {
        self.edges()
            .map(|e| {
                let (p, d2) = nearest_point_on_segment(e.u, e.v, query);
                (d2, e, p)
            })
            .min_by_key(|&(d2, ..)| d2)
            .map(|(_, e, p)| (e, p))
    }
}

impl Extend<Edge> for Graph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for e in iter {
            self.add_edge(e.u, e.v);
        }
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut g = Self::new();
        g.extend(iter);
        g
    }
}
