//! Structural survey of carved mazes
//!
//! Treats cells as graph nodes and hidden interior walls as edges, then
//! reports the counts that decide whether a carve produced a perfect maze.
//! Used by the CLI verification pass and by tests.

use ndarray::Array2;

use crate::spatial::Grid;
use crate::spatial::direction::Direction;

/// Structural summary of a carved grid's passage graph
#[derive(Clone, Copy, Debug)]
pub struct TopologyReport {
    /// Total number of cells
    pub cells: usize,
    /// Hidden interior walls, each counted once
    pub passages: usize,
    /// Connected components of the passage graph
    pub components: usize,
}

impl TopologyReport {
    /// Whether every cell is reachable from every other cell
    pub const fn is_connected(&self) -> bool {
        self.components <= 1
    }

    /// Whether the passage graph contains no cycle
    ///
    /// A forest over `cells` nodes with `components` trees has exactly
    /// `cells − components` edges; any extra passage closes a cycle.
    pub const fn is_acyclic(&self) -> bool {
        self.passages + self.components == self.cells
    }

    /// Whether the maze is perfect: connected and acyclic
    pub const fn is_perfect(&self) -> bool {
        self.is_connected() && self.is_acyclic()
    }
}

/// Survey the passage graph of a carved grid
///
/// Passages are counted by scanning only Down and Right adjacencies so
/// each shared wall contributes once. Components come from a flood fill
/// over passage-connected cells. Boundary openings such as the entrance
/// and exit have no neighboring cell and never count as passages.
pub fn analyze(grid: &Grid) -> TopologyReport {
    let size = grid.size();

    let mut passages = 0;
    for row in 0..size {
        for col in 0..size {
            for direction in [Direction::Down, Direction::Right] {
                if has_passage(grid, [row, col], direction) {
                    passages += 1;
                }
            }
        }
    }

    TopologyReport {
        cells: size * size,
        passages,
        components: count_components(grid),
    }
}

/// Whether a hidden wall joins `position` to a neighbor in `direction`
fn has_passage(grid: &Grid, position: [usize; 2], direction: Direction) -> bool {
    if grid.neighbor(position, direction).is_none() {
        return false;
    }

    grid.wall_id(position, direction)
        .and_then(|id| grid.wall(id))
        .is_some_and(|wall| !wall.is_visible())
}

fn count_components(grid: &Grid) -> usize {
    let size = grid.size();
    let mut seen = Array2::from_elem((size, size), false);
    let mut components = 0;

    for row in 0..size {
        for col in 0..size {
            if seen.get([row, col]).copied().unwrap_or(true) {
                continue;
            }

            components += 1;
            flood_from(grid, [row, col], &mut seen);
        }
    }

    components
}

/// Mark every cell reachable from `start` through hidden walls
fn flood_from(grid: &Grid, start: [usize; 2], seen: &mut Array2<bool>) {
    let mut frontier = vec![start];

    while let Some(position) = frontier.pop() {
        let Some(entry) = seen.get_mut(position) else {
            continue;
        };

        if *entry {
            continue;
        }
        *entry = true;

        for direction in Direction::ALL {
            let Some(next) = grid.neighbor(position, direction) else {
                continue;
            };

            if has_passage(grid, position, direction) && !seen.get(next).copied().unwrap_or(true) {
                frontier.push(next);
            }
        }
    }
}
