//! Visitation record for the carving walk

use bitvec::prelude::*;

/// Bit set tracking which cells the walk has entered
///
/// Positions map to bits in row-major order. Marking is idempotent and
/// membership tests are O(1), which the carve loop relies on every step.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    side: usize,
}

impl VisitedSet {
    /// Create an empty record for a `side` × `side` grid
    pub fn new(side: usize) -> Self {
        Self {
            bits: bitvec![0; side * side],
            side,
        }
    }

    /// Mark the cell at `position` as visited
    ///
    /// Re-marking an already visited cell is a no-op, which happens on
    /// every re-entry after a backtrack. Out-of-range positions are
    /// ignored.
    pub fn mark(&mut self, position: [usize; 2]) {
        if let Some(index) = self.linear_index(position) {
            self.bits.set(index, true);
        }
    }

    /// Test whether the cell at `position` has been visited
    pub fn contains(&self, position: [usize; 2]) -> bool {
        self.linear_index(position)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Number of visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether every cell has been visited
    pub fn is_complete(&self) -> bool {
        self.count() == self.side * self.side
    }

    fn linear_index(&self, position: [usize; 2]) -> Option<usize> {
        (position[0] < self.side && position[1] < self.side)
            .then_some(position[0] * self.side + position[1])
    }
}
