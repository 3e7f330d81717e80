// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility-seeded shortest paths.

use alloc::collections::BinaryHeap;
use core::cmp::Ordering;

use hashbrown::HashMap;
use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};
use understory_ivec::{I2, IRect};

use crate::{Graph, PathError};

/// The points of a path after its start, ending with the requested end.
pub type Path = SmallVec<[I2; 8]>;

/// Per-vertex search state.
#[derive(Clone, Copy, Debug)]
struct Node {
    dist: f64,
    prev: Option<I2>,
    settled: bool,
    sees_end: bool,
}

impl Node {
    const UNREACHED: Self = Self {
        dist: f64::INFINITY,
        prev: None,
        settled: false,
        sees_end: false,
    };
}

/// Priority queue entry, ordered so the smallest distance pops first.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    dist: f64,
    vertex: I2,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest path from `start` to `end` around `obstacles`.
///
/// If nothing in `obstacles` blocks the straight line, the path is just
/// `[end]`. Otherwise the path turns only at vertices of `waypoints` that lie
/// inside `bounds` (both corners included):
///
/// - every such vertex visible from `start` is reachable in one straight hop,
/// - hops between vertices follow the edges of `waypoints`,
/// - any vertex that can see `end` may finish with a straight hop to it.
///
/// Lines of sight are tested with [`Graph::blocks`], so only obstacle edges
/// facing the viewer count. Hop costs are Euclidean lengths. When several
/// routes are equally short, which one is returned is unspecified.
///
/// The returned path excludes `start` and ends with `end`.
///
/// # Errors
///
/// - [`PathError::NoPathPossible`] when no candidate vertex is visible from
///   `start`, or none can see `end`.
/// - [`PathError::NoPath`] when the search exhausts the reachable vertices
///   without reaching `end`.
pub fn find_path(
    obstacles: &Graph,
    waypoints: &Graph,
    start: I2,
    end: I2,
    bounds: IRect,
) -> Result<Path, PathError> {
    if !obstacles.blocks(start, end) {
        debug!(?start, ?end, "direct line of sight");
        return Ok(smallvec![end]);
    }

    let mut nodes: HashMap<I2, Node> = HashMap::new();
    let mut seeded = 0_usize;
    let mut end_neighbors = 0_usize;
    for v in waypoints.vertices() {
        if !bounds.contains_inclusive(v) {
            continue;
        }
        let mut node = Node::UNREACHED;
        if !obstacles.blocks(start, v) {
            node.dist = start.distance(v);
            node.prev = Some(start);
            seeded += 1;
        }
        if !obstacles.blocks(v, end) {
            node.sees_end = true;
            end_neighbors += 1;
        }
        nodes.insert(v, node);
    }
    debug!(
        candidates = nodes.len(),
        seeded, end_neighbors, "seeded visibility search"
    );
    if seeded == 0 || end_neighbors == 0 {
        debug!(?start, ?end, "no path possible");
        return Err(PathError::NoPathPossible { start, end });
    }

    // `end` joins the open set; it may already be a candidate.
    nodes.entry(end).or_insert(Node::UNREACHED);

    let mut heap: BinaryHeap<Frontier> = nodes
        .iter()
        .filter(|(_, n)| n.dist.is_finite())
        .map(|(&vertex, n)| Frontier {
            dist: n.dist,
            vertex,
        })
        .collect();

    while let Some(Frontier { dist, vertex: u }) = heap.pop() {
        let Some(node) = nodes.get_mut(&u) else {
            continue;
        };
        if node.settled || dist > node.dist {
            continue;
        }
        node.settled = true;
        if u == end {
            break;
        }
        trace!(vertex = ?u, dist, "settled");
        let sees_end = node.sees_end;
        for v in waypoints.successors(u) {
            relax(&mut nodes, &mut heap, u, dist, v);
        }
        if sees_end {
            relax(&mut nodes, &mut heap, u, dist, end);
        }
    }

    if nodes.get(&end).and_then(|n| n.prev).is_none() {
        debug!(?start, ?end, "search exhausted without reaching end");
        return Err(PathError::NoPath { start, end });
    }

    let mut path = Path::new();
    let mut v = end;
    while v != start {
        path.push(v);
        match nodes.get(&v).and_then(|n| n.prev) {
            Some(prev) => v = prev,
            None => return Err(PathError::NoPath { start, end }),
        }
    }
    path.reverse();
    Ok(path)
}

/// Offer `v` the route through `u`, if `v` is an unsettled open-set member.
fn relax(
    nodes: &mut HashMap<I2, Node>,
    heap: &mut BinaryHeap<Frontier>,
    u: I2,
    dist_u: f64,
    v: I2,
) {
    let Some(node) = nodes.get_mut(&v) else {
        return;
    };
    if node.settled {
        return;
    }
    let alt = dist_u + u.distance(v);
    if alt < node.dist {
        node.dist = alt;
        node.prev = Some(u);
        heap.push(Frontier { dist: alt, vertex: v });
    }
}

/// Total Euclidean length of `path` when walked from `start`.
///
/// ```
/// use understory_ivec::I2;
/// use understory_visibility::path_length;
///
/// let len = path_length(I2::new(0, 0), &[I2::new(3, 4), I2::new(3, 10)]);
/// assert!((len - 11.0).abs() < 1e-12);
/// ```
pub fn path_length(start: I2, path: &[I2]) -> f64 {
    path.iter()
        .fold((start, 0.0), |(from, len), &to| (to, len + from.distance(to)))
        .1
}
