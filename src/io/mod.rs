//! Command-line shell around the carving core

/// Argument parsing and the generation pipeline
pub mod cli;
/// Carving defaults and safety caps
pub mod configuration;
/// Error taxonomy for the generation pipeline
pub mod error;
/// PNG rendering of carved grids
pub mod image;
/// Carve progress reporting
pub mod progress;
