//! Heuristic knight's tour solver using Warnsdorff's rule with tie-breaking
//!
//! The solver performs a constructive greedy search over 2D or 3D boards,
//! optionally with holed squares, and supports both open and closed tours.
//! Failed attempts are retried from randomized start cells rather than
//! backtracked.

#![forbid(unsafe_code)]

/// Core solver implementation including move generation, candidate selection, and tour orchestration
pub mod algorithm;
/// Input/output operations, rendering, and error handling
pub mod io;
/// Board state management and admissibility checks
pub mod spatial;

pub use io::error::{Result, SolverError};
