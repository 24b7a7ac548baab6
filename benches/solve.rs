//! Performance measurement for complete tour searches at varying board sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use greedyknight::algorithm::executor::TourSolver;
use greedyknight::spatial::{BoardStyle, TourConfig};
use std::hint::black_box;

fn tour_config(size: usize, closed_tour: bool) -> TourConfig {
    TourConfig {
        size,
        layers: 1,
        style: BoardStyle::Regular,
        dimension: 2,
        closed_tour,
    }
}

/// Measures open-tour search cost as the board grows
fn bench_open_tour_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_tour");

    for size in &[6usize, 8, 12, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut solver = TourSolver::new(tour_config(size, false), 12345);
                black_box(solver.solve_with_random_start(50))
            });
        });
    }

    group.finish();
}

/// Measures a closed-tour search including its retry loop
fn bench_closed_tour_with_retries(c: &mut Criterion) {
    c.bench_function("closed_tour_6x6", |b| {
        b.iter(|| {
            let mut solver = TourSolver::new(tour_config(6, true), 12345);
            black_box(solver.solve_with_random_start(200))
        });
    });
}

/// Measures a single fixed-start attempt without retries
fn bench_single_attempt(c: &mut Criterion) {
    c.bench_function("solve_8x8_fixed_start", |b| {
        b.iter(|| {
            let mut solver = TourSolver::new(tour_config(8, false), 12345);
            black_box(solver.solve([0, 0, 0]))
        });
    });
}

criterion_group!(
    benches,
    bench_open_tour_sizes,
    bench_closed_tour_with_retries,
    bench_single_attempt
);
criterion_main!(benches);
