// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route around a box, then list the tiles each leg of the route crosses.
//!
//! This example shows how to combine:
//! - `understory_visibility` to find a shortest route past a solid obstacle,
//! - `understory_cells` to turn each straight leg into the grid tiles under it.
//!
//! Run:
//! - `cargo run -p understory_examples --example route_and_cells`

use understory_cells::CellGrid;
use understory_ivec::{I2, IRect};
use understory_visibility::{Graph, PathError, find_path, path_length};

/// Add a box that blocks sight from every side: both windings of its ring.
fn add_solid_box(g: &mut Graph, min: I2, max: I2) {
    let ring = [
        I2::new(min.x, min.y),
        I2::new(max.x, min.y),
        I2::new(max.x, max.y),
        I2::new(min.x, max.y),
    ];
    g.add_polygon(&ring);
    let mut rev = ring;
    rev.reverse();
    g.add_polygon(&rev);
}

fn main() {
    let mut obstacles = Graph::new();
    add_solid_box(&mut obstacles, I2::new(40, 10), I2::new(80, 70));

    // Waypoints sit one unit outside each corner and run around the box.
    let mut waypoints = Graph::new();
    add_solid_box(&mut waypoints, I2::new(39, 9), I2::new(81, 71));

    let start = I2::new(10, 40);
    let end = I2::new(110, 30);
    let bounds = IRect::new(0, 0, 128, 128);

    let path = match find_path(&obstacles, &waypoints, start, end, bounds) {
        Ok(path) => path,
        Err(PathError::NoPathPossible { .. }) => {
            println!("no waypoint links {start:?} and {end:?}");
            return;
        }
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    println!(
        "route {start:?} -> {:?}, length {:.2}",
        path.as_slice(),
        path_length(start, &path)
    );

    let grid = CellGrid::new(I2::new(16, 16));
    let mut from = start;
    for &to in &path {
        let cells = grid.segment_cells(from, to);
        println!("  leg {from:?} -> {to:?}: {} tiles {cells:?}", cells.len());
        from = to;
    }

    // Stop at the first tile the box occupies, like a tile raycast would.
    let box_tiles = grid.cells_overlapping(IRect::new(40, 10, 80, 70));
    let mut first_hit = None;
    grid.cells_touching_segment(start, end, |cell| {
        if box_tiles.contains(&cell) {
            first_hit = Some(cell);
            return false;
        }
        true
    });
    println!("straight line first enters a box tile at {first_hit:?}");
}
