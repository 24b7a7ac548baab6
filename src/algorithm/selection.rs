//! Warnsdorff candidate selection with closing-move override and tie-breaking
//!
//! Each step scores every admissible onward cell by its degree and keeps
//! the minimum-degree subset. Closed tours force the final step toward a
//! start-adjacent cell and prefer center-ward cells among ties; open
//! tours break ties uniformly at random through the injected selector.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::moves::{candidate_moves, degree, reaches_start};
use crate::spatial::Board;

/// Priority of a candidate move
///
/// A tagged value rather than a raw degree so the forced closing move can
/// never collide with a legitimately computed degree. The derived
/// ordering places `ForcedClose` before every `Normal` degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MovePriority {
    /// Final step of a closed tour that returns to a start-adjacent cell
    ForcedClose,
    /// Ordinary candidate carrying its Warnsdorff degree
    Normal(u32),
}

/// Transient (target, priority) pair produced during one step's decision
#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    /// Absolute coordinates of the onward cell
    pub target: [i32; 3],
    /// Selection priority
    pub priority: MovePriority,
}

/// Seeded random selector for reproducible stochastic choices
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index into a slice of the given length
    pub fn uniform_choice(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Uniform cell coordinates on a board of the given dimensions
    pub fn random_cell(&mut self, layers: usize, size: usize) -> [i32; 3] {
        [
            self.rng.random_range(0..layers) as i32,
            self.rng.random_range(0..size) as i32,
            self.rng.random_range(0..size) as i32,
        ]
    }
}

/// Collect admissible onward candidates with their priorities
///
/// When exactly one move remains in a closed tour, only cells that reach
/// the start survive, tagged [`MovePriority::ForcedClose`]; everything
/// else is scored by its degree. The degree lookahead deliberately does
/// not account for the closing-move override.
pub fn collect_candidates(
    board: &Board,
    current: [i32; 3],
    start: [i32; 3],
    moves_remaining: usize,
) -> Vec<Candidate> {
    let config = board.config();
    let closing_step = config.closed_tour && moves_remaining == 1;
    let mut candidates = Vec::new();

    for target in candidate_moves(config, current) {
        if !board.is_occupiable(target) {
            continue;
        }

        let priority = if closing_step {
            if !reaches_start(config, target, start) {
                continue;
            }
            MovePriority::ForcedClose
        } else {
            MovePriority::Normal(degree(board, target))
        };

        candidates.push(Candidate { target, priority });
    }

    candidates
}

/// Choose the next move by Warnsdorff's rule with tie-breaking
///
/// Returns `None` when no admissible candidate survives, which the tour
/// driver reports as a stuck attempt.
pub fn select_next_move(
    board: &Board,
    current: [i32; 3],
    start: [i32; 3],
    moves_remaining: usize,
    selector: &mut RandomSelector,
) -> Option<[i32; 3]> {
    let candidates = collect_candidates(board, current, start, moves_remaining);
    let best = candidates.iter().map(|candidate| candidate.priority).min()?;

    let tied: Vec<[i32; 3]> = candidates
        .iter()
        .filter(|candidate| candidate.priority == best)
        .map(|candidate| candidate.target)
        .collect();

    if tied.len() == 1 {
        return tied.first().copied();
    }

    // Closed tours drift toward the center, keeping edge cells available
    // for the eventual return jump
    if board.config().closed_tour {
        if let Some(choice) = closest_to_center(board.size(), &tied) {
            return Some(choice);
        }
    }

    let index = selector.uniform_choice(tied.len());
    tied.get(index).copied()
}

/// Candidate nearest the board's geometric center, by row and column only
///
/// Strict less-than comparison on the Euclidean distance; exact ties fall
/// to enumeration order rather than re-randomizing.
fn closest_to_center(size: usize, targets: &[[i32; 3]]) -> Option<[i32; 3]> {
    let center = (size as f64 - 1.0) / 2.0;
    let mut best: Option<([i32; 3], f64)> = None;

    for &target in targets {
        let distance = f64::hypot(
            f64::from(target[1]) - center,
            f64::from(target[2]) - center,
        );

        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((target, distance));
        }
    }

    best.map(|(target, _)| target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::{BoardStyle, TourConfig};

    fn board(size: usize, closed_tour: bool) -> Board {
        let config = TourConfig {
            size,
            layers: 1,
            style: BoardStyle::Regular,
            dimension: 2,
            closed_tour,
        };
        let mut rng = StdRng::seed_from_u64(11);
        Board::new(config, &mut rng)
    }

    #[test]
    fn test_forced_close_outranks_any_degree() {
        assert!(MovePriority::ForcedClose < MovePriority::Normal(0));
        assert!(MovePriority::Normal(2) < MovePriority::Normal(3));
        assert_eq!(
            [MovePriority::Normal(1), MovePriority::ForcedClose]
                .iter()
                .min(),
            Some(&MovePriority::ForcedClose)
        );
    }

    #[test]
    fn test_candidates_carry_degrees() {
        let fresh = board(8, false);
        let candidates = collect_candidates(&fresh, [0, 0, 0], [0, 0, 0], 63);

        assert_eq!(candidates.len(), 2);
        for candidate in &candidates {
            // Onward cells from a corner sit near the edge
            assert_eq!(
                candidate.priority,
                MovePriority::Normal(degree(&fresh, candidate.target))
            );
        }
    }

    #[test]
    fn test_closing_step_keeps_only_start_adjacent_cells() {
        let mut closed = board(5, true);
        let start = [0, 0, 0];

        // Visit everything except the two cells adjacent to the corner
        let keep = [[0, 2, 1], [0, 1, 2]];
        for row in 0..5 {
            for col in 0..5 {
                let cell = [0, row, col];
                if cell == start || keep.contains(&cell) {
                    continue;
                }
                assert!(closed.mark(cell, 1).is_ok());
            }
        }

        // (0, 4, 2) reaches (0, 2, 1), which in turn reaches the start
        let candidates = collect_candidates(&closed, [0, 4, 2], start, 1);
        assert!(!candidates.is_empty());
        for candidate in &candidates {
            assert_eq!(candidate.priority, MovePriority::ForcedClose);
            assert!(keep.contains(&candidate.target));
        }
    }

    #[test]
    fn test_center_tie_break_picks_strictly_closest() {
        let tied = [[0, 0, 0], [0, 3, 3], [0, 7, 7]];
        assert_eq!(closest_to_center(8, &tied), Some([0, 3, 3]));

        // Exact ties fall to enumeration order
        let symmetric = [[0, 0, 0], [0, 7, 7]];
        assert_eq!(closest_to_center(8, &symmetric), Some([0, 0, 0]));
    }

    #[test]
    fn test_selector_is_deterministic_for_a_seed() {
        let mut first = RandomSelector::new(42);
        let mut second = RandomSelector::new(42);

        for _ in 0..32 {
            assert_eq!(first.uniform_choice(9), second.uniform_choice(9));
            assert_eq!(first.random_cell(3, 8), second.random_cell(3, 8));
        }
    }
}
