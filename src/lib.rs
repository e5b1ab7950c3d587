//! Perfect maze generation through randomized depth-first wall carving
//!
//! The generator builds a square grid whose neighboring cells share wall
//! segments, carves a spanning tree of passages with a seeded random walk,
//! and renders the surviving walls to a PNG image.

#![forbid(unsafe_code)]

/// Carving walk, visitation tracking, and seeded random selection
pub mod algorithm;
/// Structural verification of carved passage graphs
pub mod analysis;
/// Command-line interface, configuration, errors, and PNG export
pub mod io;
/// Grid, cell, and wall data structures
pub mod spatial;

pub use io::error::{MazeError, Result};
