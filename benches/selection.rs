//! Performance measurement for per-step candidate scoring

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use greedyknight::algorithm::moves::degree;
use greedyknight::algorithm::selection::{RandomSelector, collect_candidates, select_next_move};
use greedyknight::spatial::{Board, BoardStyle, TourConfig};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

fn fresh_board(size: usize) -> Board {
    let config = TourConfig {
        size,
        layers: 1,
        style: BoardStyle::Regular,
        dimension: 2,
        closed_tour: false,
    };
    let mut rng = StdRng::seed_from_u64(12345);
    Board::new(config, &mut rng)
}

/// Measures the degree lookahead across corner, edge, and center cells
fn bench_degree(c: &mut Criterion) {
    let board = fresh_board(8);
    let positions = [[0, 0, 0], [0, 0, 4], [0, 3, 3], [0, 7, 7]];

    c.bench_function("degree_8x8", |b| {
        b.iter(|| {
            for &position in &positions {
                black_box(degree(&board, black_box(position)));
            }
        });
    });
}

/// Measures candidate collection from a central cell
fn bench_collect_candidates(c: &mut Criterion) {
    let board = fresh_board(8);

    c.bench_function("collect_candidates_center", |b| {
        b.iter(|| {
            black_box(collect_candidates(
                &board,
                black_box([0, 3, 3]),
                [0, 0, 0],
                63,
            ))
        });
    });
}

/// Measures a full selection step including tie-breaking
fn bench_select_next_move(c: &mut Criterion) {
    let board = fresh_board(8);
    let mut selector = RandomSelector::new(12345);

    c.bench_function("select_next_move_corner", |b| {
        b.iter(|| {
            black_box(select_next_move(
                &board,
                black_box([0, 0, 0]),
                [0, 0, 0],
                63,
                &mut selector,
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_degree,
    bench_collect_candidates,
    bench_select_next_move
);
criterion_main!(benches);
