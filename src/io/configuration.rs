//! Carving defaults and runtime configuration caps

// Default values for configurable parameters
/// Default maze side length in cells
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Default pixel size of one cell
pub const DEFAULT_CELL_SIZE: u32 = 25;

/// Default blank border around the maze in pixels
pub const DEFAULT_MARGIN: u32 = 50;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default output image path
pub const DEFAULT_OUTPUT: &str = "labyrinth.png";

// Safety limits to prevent excessive memory allocation
/// Maximum allowed maze side length
pub const MAX_GRID_SIZE: usize = 1000;

/// Maximum allowed canvas side length in pixels
pub const MAX_CANVAS_EXTENT: u64 = 16_384;

// Progress bar display settings
/// Width of the carve progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
