//! Criterion benchmarks for courier dispatch.
//!
//! Measures a full `find_best_courier` query on serpentine city maps of
//! increasing size. Every query runs three breadth-first searches, so the
//! cost tracks the number of open cells.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package dispatch-core
//! ```

#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dispatch_core::{
    Constraint, DispatchRequest, Dispatcher, Grid, GridDispatcher, Location, Objective,
};

/// Side lengths of the square benchmark maps.
const MAP_SIZES: &[usize] = &[50, 100, 200];

/// Build a square map whose wall rows force a serpentine route.
///
/// Every fourth row, starting at row two, is a wall with a single gap, alternating
/// between the left and right edge. The car sits top-left, the bike on the
/// second row at the right edge, the restaurant mid-way along the top row and
/// the client in the bottom-right corner.
fn serpentine_layout(size: usize) -> Vec<Vec<char>> {
    let last = size - 1;
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| match (row, col) {
                    (0, 0) => 'A',
                    (1, c) if c == last => 'B',
                    (0, c) if c == size >> 1 => 'R',
                    (r, c) if r == last && c == last => 'C',
                    (r, c) if r & 3 == 2 => {
                        let gap = if (r >> 2) & 1 == 0 { last } else { 0 };
                        if c == gap { '.' } else { '#' }
                    }
                    _ => '.',
                })
                .collect()
        })
        .collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_best_courier");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(5));

    for &size in MAP_SIZES {
        let Ok(grid) = Grid::build(&serpentine_layout(size)) else {
            continue;
        };
        let cells = grid.cell_count();
        let dispatcher = GridDispatcher::new(grid);
        let request = DispatchRequest {
            restaurant: Location::new(0, size >> 1),
            client: Location::new(size - 1, size - 1),
            constraint: Constraint::unconstrained(),
            objective: Objective::Fastest,
        };

        group.throughput(Throughput::Elements(u64::try_from(cells).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::new("side", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking dispatch, result is intentionally discarded"
                )]
                let _ = dispatcher.find_best_courier(&request);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
