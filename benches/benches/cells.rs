// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_cells::CellGrid;
use understory_ivec::I2;

fn bench_segment_walk(c: &mut Criterion) {
    let grid = CellGrid::new(I2::new(16, 16));
    let mut group = c.benchmark_group("cells_touching_segment");
    for (name, end) in [
        ("axis_aligned", I2::new(16_000, 0)),
        ("diagonal", I2::new(16_000, 16_000)),
        ("shallow", I2::new(16_000, 1_234)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut n = 0_u32;
                grid.cells_touching_segment(I2::new(3, 5), black_box(end), |_| {
                    n += 1;
                    true
                });
                black_box(n);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segment_walk);
criterion_main!(benches);
