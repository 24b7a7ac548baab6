//! Knight move offset tables and reachability queries
//!
//! Offsets are (layer, row, column) deltas. The 8-offset table covers
//! planar movement; the 24-offset table adds knight jumps through the
//! row and column planes for high-dimensional boards. Admissibility
//! filtering is left to callers via [`Board::is_occupiable`].

use crate::spatial::{Board, BoardStyle, TourConfig};

/// Planar knight jumps
pub const KNIGHT_MOVES_2D: [[i32; 3]; 8] = [
    [0, 2, 1],
    [0, 1, 2],
    [0, -1, 2],
    [0, -2, 1],
    [0, -2, -1],
    [0, -1, -2],
    [0, 1, -2],
    [0, 2, -1],
];

/// Knight jumps in all three coordinate planes
pub const KNIGHT_MOVES_3D: [[i32; 3]; 24] = [
    // In-layer moves
    [0, 2, 1],
    [0, 1, 2],
    [0, -1, 2],
    [0, -2, 1],
    [0, -2, -1],
    [0, -1, -2],
    [0, 1, -2],
    [0, 2, -1],
    // Row-plane moves crossing layers
    [1, 0, 2],
    [2, 0, 1],
    [2, 0, -1],
    [1, 0, -2],
    [-1, 0, -2],
    [-2, 0, -1],
    [-2, 0, 1],
    [-1, 0, 2],
    // Column-plane moves crossing layers
    [1, 2, 0],
    [2, 1, 0],
    [2, -1, 0],
    [1, -2, 0],
    [-1, -2, 0],
    [-2, -1, 0],
    [-2, 1, 0],
    [-1, 2, 0],
];

/// Offset table for the given configuration
///
/// The 8-offset set applies when the dimensionality is 2 or the style is
/// not high-dimensional; the 24-offset set applies otherwise.
pub const fn move_offsets(config: TourConfig) -> &'static [[i32; 3]] {
    if config.dimension == 2 || !matches!(config.style, BoardStyle::HighDimensional) {
        &KNIGHT_MOVES_2D
    } else {
        &KNIGHT_MOVES_3D
    }
}

/// Layer deltas only apply on 3-dimensional boards
const fn layer_scale(config: TourConfig) -> i32 {
    if config.dimension == 3 { 1 } else { 0 }
}

/// Absolute coordinates reachable by one knight jump from `from`
///
/// No admissibility filtering is performed; results may be out of bounds,
/// holed, or visited.
pub fn candidate_moves(config: TourConfig, from: [i32; 3]) -> Vec<[i32; 3]> {
    let scale = layer_scale(config);

    move_offsets(config)
        .iter()
        .map(|&[dl, dr, dc]| [from[0] + dl * scale, from[1] + dr, from[2] + dc])
        .collect()
}

/// Count of occupiable cells among the candidate moves of `from`
///
/// Pure depth-1 lookahead used by Warnsdorff's rule; marks nothing.
pub fn degree(board: &Board, from: [i32; 3]) -> u32 {
    let config = board.config();
    let scale = layer_scale(config);

    move_offsets(config)
        .iter()
        .filter(|&&[dl, dr, dc]| {
            board.is_occupiable([from[0] + dl * scale, from[1] + dr, from[2] + dc])
        })
        .count() as u32
}

/// Whether `start` is one knight jump from `from`
///
/// Used only for closed-tour termination checks.
pub fn reaches_start(config: TourConfig, from: [i32; 3], start: [i32; 3]) -> bool {
    candidate_moves(config, from)
        .iter()
        .any(|&target| target == start)
}
