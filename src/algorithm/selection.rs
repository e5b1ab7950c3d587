//! Seeded random selection for the carving walk

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
///
/// The carver materializes its candidate directions into a list and asks
/// for one index; with a fixed seed the whole walk replays identically.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform choice over a materialized candidate list of length `len`
    ///
    /// Returns an index in `0..len`, or `None` when the list is empty.
    pub fn uniform_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}
