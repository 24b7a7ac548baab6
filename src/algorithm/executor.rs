//! Tour driver orchestrating move selection, termination, and retries
//!
//! One [`TourSolver`] owns the board and the per-attempt state for a
//! single in-progress attempt; the retry loop restarts from fresh random
//! cells rather than backtracking within a stuck attempt.

use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::moves::reaches_start;
use crate::algorithm::selection::{RandomSelector, select_next_move};
use crate::io::error::{Result, SolverError};
use crate::io::visualization::TourCapture;
use crate::spatial::{Board, TourConfig};

/// Mutable per-attempt counters, distinct from the board's cell grids
///
/// Reset at the start of every solve attempt and mutated by the driver
/// after each accepted move.
#[derive(Clone, Copy, Debug)]
pub struct TourState {
    /// Start cell of the attempt
    pub start: [i32; 3],
    /// Cell the knight currently occupies
    pub current: [i32; 3],
    /// Step number of the most recent move (1-based)
    pub step: u32,
    /// Squares visited so far
    pub visited: usize,
}

impl TourState {
    /// Fresh state positioned at the attempt's start cell
    pub const fn new(start: [i32; 3]) -> Self {
        Self {
            start,
            current: start,
            step: 0,
            visited: 0,
        }
    }
}

/// Warnsdorff tour solver with bounded random-start retries
///
/// Single-threaded and synchronous: each attempt runs to completion
/// before returning. The seeded generator drives hole placement, random
/// start selection, and tie-breaking, so runs are reproducible for a
/// given seed. Parallel adaptations must clone the solver per attempt.
#[derive(Clone, Debug)]
pub struct TourSolver {
    config: TourConfig,
    board: Board,
    state: TourState,
    selector: RandomSelector,
    /// Optional per-move capture for animation export
    pub visualization: Option<TourCapture>,
}

impl TourSolver {
    /// Create a solver for the given configuration and seed
    ///
    /// Configuration values are taken as given; callers validate ranges
    /// before construction.
    pub fn new(config: TourConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::new(config, &mut rng);

        Self {
            config,
            board,
            state: TourState::new([0, 0, 0]),
            selector: RandomSelector::new(seed),
            visualization: None,
        }
    }

    /// Enable per-move capture for GIF export
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(TourCapture::new(&self.board));
    }

    /// Run one tour attempt from the given start cell
    ///
    /// Repeatedly marks the current cell and requests the next move until
    /// the board is full or no move exists. For closed tours the final
    /// cell must reach the start.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidStart`] for an inadmissible start
    /// (rejected before any state mutation), [`SolverError::Stuck`] when
    /// no admissible move remains mid-tour, and [`SolverError::NotClosed`]
    /// when a closed tour fills the board without closing. The board is
    /// left as-is on failure for diagnostic inspection.
    pub fn solve(&mut self, start: [i32; 3]) -> Result<()> {
        if !self.board.is_occupiable(start) {
            return Err(SolverError::InvalidStart { position: start });
        }

        self.state = TourState::new(start);
        self.advance(start)?;

        while self.state.visited < self.board.traversable() {
            let moves_remaining = self.board.traversable() - self.state.visited;
            let next = select_next_move(
                &self.board,
                self.state.current,
                start,
                moves_remaining,
                &mut self.selector,
            )
            .ok_or_else(|| SolverError::Stuck {
                step: self.state.step,
                visited: self.state.visited,
                total: self.board.traversable(),
            })?;

            self.advance(next)?;
        }

        if self.config.closed_tour && !reaches_start(self.config, self.state.current, start) {
            return Err(SolverError::NotClosed {
                total: self.board.traversable(),
            });
        }

        Ok(())
    }

    /// Mark a cell as the next step and update the attempt state
    fn advance(&mut self, target: [i32; 3]) -> Result<()> {
        self.state.step += 1;
        self.board.mark(target, self.state.step)?;
        self.state.current = target;
        self.state.visited += 1;

        if let Some(capture) = &mut self.visualization {
            capture.record_visit(target, self.state.step);
        }

        Ok(())
    }

    /// Retry `solve` from uniformly random admissible start cells
    ///
    /// Each attempt resets the board (holes and configuration are kept)
    /// and carries no other state from earlier attempts. Stops at the
    /// first completed tour.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::AttemptsExhausted`] when no attempt
    /// completes within the budget. Non-attempt failures propagate
    /// immediately.
    pub fn solve_with_random_start(&mut self, max_attempts: usize) -> Result<[i32; 3]> {
        for _ in 0..max_attempts {
            self.reset();
            let start = self.random_admissible_start();

            match self.solve(start) {
                Ok(()) => return Ok(start),
                Err(error) if error.is_attempt_failure() => {}
                Err(error) => return Err(error),
            }
        }

        Err(SolverError::AttemptsExhausted {
            attempts: max_attempts,
        })
    }

    /// Clear visit state for a fresh attempt, keeping holes and configuration
    pub fn reset(&mut self) {
        self.board.reset();
        self.state = TourState::new(self.state.start);

        if let Some(capture) = &mut self.visualization {
            capture.clear();
        }
    }

    /// Uniformly random admissible cell for use as a start
    ///
    /// Rejection-samples holed cells; corners are never holed, so a reset
    /// board always yields a cell. Intended to be called after
    /// [`TourSolver::reset`].
    pub fn random_admissible_start(&mut self) -> [i32; 3] {
        loop {
            let cell = self
                .selector
                .random_cell(self.config.layers, self.config.size);
            if self.board.is_occupiable(cell) {
                return cell;
            }
        }
    }

    /// Board configuration
    pub const fn config(&self) -> TourConfig {
        self.config
    }

    /// Read-only view of the board for rendering and reporting
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Per-attempt counters of the most recent attempt
    pub const fn state(&self) -> TourState {
        self.state
    }

    /// Squares visited in the most recent attempt
    pub const fn visited(&self) -> usize {
        self.state.visited
    }

    /// Traversable squares on the board
    pub const fn total_squares(&self) -> usize {
        self.board.traversable()
    }

    /// Whether the most recent attempt visited every traversable square
    pub const fn has_full_tour(&self) -> bool {
        self.state.visited == self.board.traversable()
    }

    /// Whether the board holds a full tour whose final cell reaches the start
    ///
    /// Locates the cell carrying the highest visit order and checks start
    /// adjacency, independent of the configured tour type.
    pub fn is_tour_closed(&self) -> bool {
        if !self.has_full_tour() {
            return false;
        }

        let total = self.board.traversable() as u32;
        let last = self
            .board
            .visit_order()
            .indexed_iter()
            .find_map(|((layer, row, col), &order)| {
                (order == total).then_some([layer as i32, row as i32, col as i32])
            });

        last.is_some_and(|cell| reaches_start(self.config, cell, self.state.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::BoardStyle;

    fn config(size: usize, closed_tour: bool) -> TourConfig {
        TourConfig {
            size,
            layers: 1,
            style: BoardStyle::Regular,
            dimension: 2,
            closed_tour,
        }
    }

    #[test]
    fn test_invalid_start_rejected_without_mutation() {
        let mut solver = TourSolver::new(config(5, false), 42);

        let result = solver.solve([0, 5, 5]);
        assert!(matches!(result, Err(SolverError::InvalidStart { .. })));
        assert_eq!(solver.visited(), 0);
        assert_eq!(solver.board().order_at([0, 0, 0]), 0);
    }

    #[test]
    fn test_three_by_three_always_stalls() {
        // The center of a 3x3 board has degree zero, so no full tour
        // exists; the driver must stop cleanly rather than spin
        for corner in [[0, 0, 0], [0, 0, 2], [0, 2, 0], [0, 2, 2]] {
            let mut solver = TourSolver::new(config(3, false), 42);
            let result = solver.solve(corner);

            match result {
                Err(SolverError::Stuck { visited, total, .. }) => {
                    assert!(visited < total);
                    assert_eq!(total, 9);
                }
                other => unreachable!("expected a stuck attempt, got {other:?}"),
            }
            assert!(solver.visited() <= solver.total_squares());
        }
    }

    #[test]
    fn test_state_resets_between_attempts() {
        let mut solver = TourSolver::new(config(3, false), 42);
        let _ = solver.solve([0, 0, 0]);
        assert!(solver.visited() > 0);

        solver.reset();
        assert_eq!(solver.visited(), 0);
        assert_eq!(solver.state().step, 0);

        let unvisited = solver
            .board()
            .visit_order()
            .iter()
            .all(|&order| order == 0);
        assert!(unvisited);
    }
}
