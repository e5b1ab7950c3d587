//! Grid construction and shared-wall bookkeeping
//!
//! Cells hold arena handles rather than wall references, so the wall between
//! two neighbors is a single entry reachable from both sides and hiding it
//! from either cell opens the same passage. The arena is built once with the
//! exact deduplicated wall count and never grows.

use ndarray::Array2;

use crate::spatial::direction::Direction;
use crate::spatial::wall::Wall;

/// Copyable handle naming one wall in the grid's arena
///
/// Interior walls are referenced by both bordering cells through the same
/// handle, which is what makes shared visibility observable from either
/// side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WallId(usize);

impl WallId {
    /// Position of the wall in the arena
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One grid position holding handles to its four bounding walls
#[derive(Clone, Copy, Debug, Default)]
pub struct Cell {
    up: WallId,
    down: WallId,
    left: WallId,
    right: WallId,
}

impl Cell {
    /// Arena handle of the wall on the given side
    pub const fn wall(&self, direction: Direction) -> WallId {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// N×N lattice of cells over a deduplicated wall arena
///
/// Fixed topology: cells and walls are all created during construction and
/// carving only flips visibility flags. The cell-size multiplier and canvas
/// margin are captured here so wall endpoints and the canvas extent stay
/// consistent.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
    walls: Vec<Wall>,
    size: usize,
    cell_size: u32,
    margin: u32,
}

impl Grid {
    /// Build a grid of `size` × `size` cells
    ///
    /// Each cell creates its RIGHT and DOWN walls fresh and reuses the
    /// neighbor's DOWN/RIGHT handle for its own UP/LEFT side, except on
    /// row 0 and column 0 where fresh boundary walls are created. This
    /// yields exactly `2·size·(size+1)` arena entries with no dedup pass.
    pub fn new(size: usize, cell_size: u32, margin: u32) -> Self {
        let mut walls = Vec::with_capacity(2 * size * (size + 1));
        let mut cells = Vec::with_capacity(size * size);

        // Down-wall handles of the row above, reused as this row's up walls
        let mut row_above_down: Vec<WallId> = Vec::new();

        for row in 0..size {
            let mut row_down = Vec::with_capacity(size);
            let mut left_right: Option<WallId> = None;

            for col in 0..size {
                let position = [row, col];
                let up = row_above_down.get(col).copied().unwrap_or_else(|| {
                    Self::push_wall(&mut walls, position, Direction::Up, cell_size, margin)
                });
                let left = left_right.unwrap_or_else(|| {
                    Self::push_wall(&mut walls, position, Direction::Left, cell_size, margin)
                });
                let right =
                    Self::push_wall(&mut walls, position, Direction::Right, cell_size, margin);
                let down =
                    Self::push_wall(&mut walls, position, Direction::Down, cell_size, margin);

                cells.push(Cell {
                    up,
                    down,
                    left,
                    right,
                });
                row_down.push(down);
                left_right = Some(right);
            }

            row_above_down = row_down;
        }

        let cells = Array2::from_shape_vec((size, size), cells)
            .unwrap_or_else(|_| Array2::from_elem((0, 0), Cell::default()));

        Self {
            cells,
            walls,
            size,
            cell_size,
            margin,
        }
    }

    fn push_wall(
        walls: &mut Vec<Wall>,
        position: [usize; 2],
        direction: Direction,
        cell_size: u32,
        margin: u32,
    ) -> WallId {
        let id = WallId(walls.len());
        walls.push(Wall::from_cell(position, direction, cell_size, margin));
        id
    }

    /// Side length in cells
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Canvas side length in pixels: `size · cell_size + 2 · margin`
    pub const fn canvas_extent(&self) -> u32 {
        self.size as u32 * self.cell_size + 2 * self.margin
    }

    /// Look up the cell at `position`, if in bounds
    pub fn cell(&self, position: [usize; 2]) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Coordinates of the neighbor in the given direction, if in bounds
    ///
    /// Leaving the grid is a normal boundary condition, reported as an
    /// empty result rather than an error.
    pub fn neighbor(&self, position: [usize; 2], direction: Direction) -> Option<[usize; 2]> {
        let (row_delta, col_delta) = direction.offset();
        let row = position[0] as isize + row_delta;
        let col = position[1] as isize + col_delta;
        let side = self.size as isize;

        (row >= 0 && row < side && col >= 0 && col < side)
            .then_some([row as usize, col as usize])
    }

    /// Arena handle of the wall on the given side of `position`
    pub fn wall_id(&self, position: [usize; 2], direction: Direction) -> Option<WallId> {
        self.cell(position).map(|cell| cell.wall(direction))
    }

    /// Resolve an arena handle to its wall
    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.get(id.index())
    }

    /// Hide the wall on the given side of `position`
    ///
    /// The flag is cleared on the shared arena entry, so the passage is
    /// equally open when queried from the neighboring cell. Out-of-range
    /// positions are a silent no-op.
    pub fn hide_wall(&mut self, position: [usize; 2], direction: Direction) {
        let Some(id) = self.wall_id(position, direction) else {
            return;
        };

        if let Some(wall) = self.walls.get_mut(id.index()) {
            wall.hide();
        }
    }

    /// The full deduplicated wall collection, in arena order
    ///
    /// Each interior wall appears exactly once despite being referenced by
    /// two cells; rendering iterates this without any dedup of its own.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }
}
