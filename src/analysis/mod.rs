//! Structural analysis of carved mazes

/// Passage graph survey: connectivity and acyclicity
pub mod topology;
