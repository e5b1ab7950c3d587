//! Spatial data structures for the maze lattice
//!
//! This module contains grid-related functionality including:
//! - Cardinal directions and their wall placement rules
//! - Wall segments with shared visibility
//! - Grid construction and neighbor lookup

/// Cardinal directions with neighbor offsets and wall corner rules
pub mod direction;
/// Grid construction, cell lookup, and wall arena management
pub mod grid;
/// Wall segments with endpoints and visibility
pub mod wall;

pub use grid::Grid;
