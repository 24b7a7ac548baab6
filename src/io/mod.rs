//! Input/output surfaces: CLI, rendering, export, and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Solver constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of solved boards
pub mod image;
/// Retry progress reporting
pub mod progress;
/// Compact text rendering of boards and summaries
pub mod render;
/// Per-move capture and GIF generation
pub mod visualization;
