//! Solver constants and runtime configuration defaults

/// Smallest board the solver accepts per side
pub const MIN_BOARD_SIZE: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed cells per side
pub const MAX_BOARD_SIZE: usize = 512;

/// Maximum allowed layer count
pub const MAX_BOARD_LAYERS: usize = 64;

// Default values for configurable parameters
/// Default cells per side
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Default layer count
pub const DEFAULT_LAYERS: usize = 1;

/// Layer count a 3-dimensional board is raised to when only one is given
pub const DEFAULT_3D_LAYERS: usize = 3;

/// Fixed seed for reproducible solving
pub const DEFAULT_SEED: u64 = 42;

/// Default retry budget for open tours
pub const DEFAULT_OPEN_ATTEMPTS: usize = 500;

// Closed tours fail far more often and need the larger budget
/// Default retry budget for closed tours
pub const DEFAULT_CLOSED_ATTEMPTS: usize = 2000;

// Output settings
/// Delay between GIF animation frames (one frame per knight move)
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Rendered pixel width of one board cell
pub const CELL_PIXEL_SIZE: u32 = 12;
/// Pixel gap between layers rendered side by side
pub const LAYER_GUTTER_PIXELS: u32 = 2;
