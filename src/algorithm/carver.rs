//! Randomized depth-first wall carving

use crate::algorithm::selection::RandomSelector;
use crate::algorithm::visited::VisitedSet;
use crate::spatial::Grid;
use crate::spatial::direction::Direction;

/// Counters accumulated over a carving run
#[derive(Clone, Copy, Debug, Default)]
pub struct CarveStats {
    /// Iterations of the step loop
    pub steps: usize,
    /// Walls hidden between cells, one per carving move
    pub passages: usize,
    /// Retreats along the backtrack list
    pub backtracks: usize,
}

/// Depth-first maze carver over a fixed grid
///
/// Owns the walk state: a position cursor, the visitation record, and the
/// backtrack list of cells that still had unexplored branches when the walk
/// moved on. Each step either carves one passage or retreats one entry; the
/// walk ends when every cell has been visited, at which point exactly
/// cells−1 walls have been hidden.
pub struct DepthFirstCarver {
    grid: Grid,
    visited: VisitedSet,
    backtrack: Vec<[usize; 2]>,
    cursor: [usize; 2],
    selector: RandomSelector,
    stats: CarveStats,
}

impl DepthFirstCarver {
    /// Create a carver positioned at the top-left cell
    pub fn new(grid: Grid, seed: u64) -> Self {
        let visited = VisitedSet::new(grid.size());

        Self {
            grid,
            visited,
            backtrack: Vec::new(),
            cursor: [0, 0],
            selector: RandomSelector::new(seed),
            stats: CarveStats::default(),
        }
    }

    /// Execute a single carving step
    ///
    /// Returns `false` once every cell has been visited, `true` while more
    /// steps are needed.
    pub fn step(&mut self) -> bool {
        // Phase 1: stop once the visitation record is full
        if self.visited.is_complete() {
            return false;
        }

        self.stats.steps += 1;

        // Phase 2: survey unexplored branches, then record the visit
        let available = self.unvisited_neighbors();
        self.visited.mark(self.cursor);

        // Phase 3: dead end, retreat to the most recent branching cell
        if available.is_empty() {
            let Some(previous) = self.backtrack.pop() else {
                // Empty only on a single-cell grid, where the first visit
                // completes the walk with nothing to retreat to
                return false;
            };

            self.cursor = previous;
            self.stats.backtracks += 1;
            return true;
        }

        // Phase 4: leave a marker while other branches remain unexplored
        if available.len() > 1 {
            self.backtrack.push(self.cursor);
        }

        // Phase 5: carve toward one neighbor chosen uniformly at random
        if let Some(&(direction, next)) = self
            .selector
            .uniform_index(available.len())
            .and_then(|index| available.get(index))
        {
            self.grid.hide_wall(self.cursor, direction);
            self.stats.passages += 1;
            self.cursor = next;
        }

        true
    }

    /// Drive the walk to completion and open the boundary entrances
    pub fn run(&mut self) -> CarveStats {
        while self.step() {}

        self.open_entrances();
        self.stats
    }

    /// Force-hide the entrance and exit walls on the outer boundary
    ///
    /// The entrance is the LEFT wall of the top-left cell and the exit the
    /// RIGHT wall of the bottom-right cell. Both are boundary walls, so
    /// they never coincide with a carved passage.
    pub fn open_entrances(&mut self) {
        let last = self.grid.size().saturating_sub(1);
        self.grid.hide_wall([0, 0], Direction::Left);
        self.grid.hide_wall([last, last], Direction::Right);
    }

    /// Neighbors of the cursor not yet visited, keyed by direction
    ///
    /// Scanned in the fixed `Direction::ALL` order so a fixed seed replays
    /// the identical walk.
    fn unvisited_neighbors(&self) -> Vec<(Direction, [usize; 2])> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                self.grid
                    .neighbor(self.cursor, direction)
                    .filter(|&next| !self.visited.contains(next))
                    .map(|next| (direction, next))
            })
            .collect()
    }

    /// Access the grid in its current carving state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the carver, returning the carved grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Counters for the run so far
    pub const fn stats(&self) -> CarveStats {
        self.stats
    }

    /// Number of cells the walk has visited
    pub fn visited_count(&self) -> usize {
        self.visited.count()
    }
}
