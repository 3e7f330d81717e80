// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_ivec::{I2, IRect};
use understory_visibility::{Graph, find_path};

/// A `n x n` lattice of solid square pillars, with waypoints just outside
/// each pillar's corners, linked around each pillar and to the pillars
/// beside it.
fn pillar_field(n: i32, pitch: i32, size: i32) -> (Graph, Graph) {
    let mut obstacles = Graph::new();
    let mut waypoints = Graph::new();
    for i in 0..n {
        for j in 0..n {
            let x0 = i * pitch;
            let y0 = j * pitch;
            let ring = [
                I2::new(x0, y0),
                I2::new(x0 + size, y0),
                I2::new(x0 + size, y0 + size),
                I2::new(x0, y0 + size),
            ];
            obstacles.add_polygon(&ring);
            let mut rev = ring;
            rev.reverse();
            obstacles.add_polygon(&rev);

            let corners = [
                I2::new(x0 - 1, y0 - 1),
                I2::new(x0 + size + 1, y0 - 1),
                I2::new(x0 + size + 1, y0 + size + 1),
                I2::new(x0 - 1, y0 + size + 1),
            ];
            waypoints.add_polygon(&corners);
            let mut rev = corners;
            rev.reverse();
            waypoints.add_polygon(&rev);
            for c in corners {
                for d in [I2::new(pitch, 0), I2::new(0, pitch)] {
                    waypoints.add_edge(c, c + d);
                    waypoints.add_edge(c + d, c);
                }
            }
        }
    }
    (obstacles, waypoints)
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");
    for n in [4, 8, 16] {
        let pitch = 40;
        let (obstacles, waypoints) = pillar_field(n, pitch, 20);
        let bounds = IRect::new(-pitch, -pitch, (n + 1) * pitch, (n + 1) * pitch);
        let start = I2::new(-10, 10);
        let end = I2::new(n * pitch + 10, n * pitch - 30);
        group.bench_function(format!("pillars_{n}x{n}"), |b| {
            b.iter(|| {
                let path = find_path(
                    black_box(&obstacles),
                    black_box(&waypoints),
                    start,
                    end,
                    bounds,
                );
                black_box(path.map(|p| p.len()).unwrap_or(0));
            });
        });
    }
    group.finish();
}

fn bench_blocks(c: &mut Criterion) {
    let (obstacles, _) = pillar_field(16, 40, 20);
    c.bench_function("blocks_across_16x16", |b| {
        b.iter(|| black_box(obstacles.blocks(I2::new(-10, -10), I2::new(650, 630))));
    });
    c.bench_function("nearest_block_across_16x16", |b| {
        b.iter(|| black_box(obstacles.nearest_block(I2::new(-10, 5), I2::new(650, 630))));
    });
}

criterion_group!(benches, bench_find_path, bench_blocks);
criterion_main!(benches);
