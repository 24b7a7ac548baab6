//! Error types for solver operations and export surfaces

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Start cell rejected before any state mutation
    ///
    /// The cell was out of bounds, holed, or already visited.
    InvalidStart {
        /// Rejected (layer, row, column) coordinates
        position: [i32; 3],
    },

    /// No admissible move existed before the board was full
    ///
    /// The board is left as-is at the point of failure so callers can
    /// inspect the partial path.
    Stuck {
        /// Step number at which the attempt stalled
        step: u32,
        /// Squares visited before stalling
        visited: usize,
        /// Traversable squares on the board
        total: usize,
    },

    /// Board fully visited but the final cell cannot reach the start
    ///
    /// Distinguished from [`SolverError::Stuck`] by `visited == total`.
    NotClosed {
        /// Traversable squares, all of which were visited
        total: usize,
    },

    /// Retry budget spent without a completed tour
    AttemptsExhausted {
        /// Number of attempts made
        attempts: usize,
    },

    /// Configuration or argument validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered board or animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl SolverError {
    /// Whether this error is a per-attempt failure absorbed by retry
    /// orchestration rather than a fatal condition
    pub const fn is_attempt_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidStart { .. } | Self::Stuck { .. } | Self::NotClosed { .. }
        )
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart { position } => {
                write!(
                    f,
                    "Invalid starting position (layer {}, row {}, col {})",
                    position[0], position[1], position[2]
                )
            }
            Self::Stuck {
                step,
                visited,
                total,
            } => {
                write!(
                    f,
                    "Stuck at step {step}: visited {visited} of {total} squares"
                )
            }
            Self::NotClosed { total } => {
                write!(
                    f,
                    "Tour visited all {total} squares but did not close back to the start"
                )
            }
            Self::AttemptsExhausted { attempts } => {
                write!(f, "No complete tour found after {attempts} attempts")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
