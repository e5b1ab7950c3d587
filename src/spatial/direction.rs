//! Cardinal directions linking cells to their neighbors and bounding walls

/// One of the four sides of a cell
///
/// Carries both the unit offset used for neighbor lookup and the
/// lattice-corner rule used to place the wall segment on that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    Up,
    /// Toward row N-1
    Down,
    /// Toward column 0
    Left,
    /// Toward column N-1
    Right,
}

impl Direction {
    /// All directions in the fixed scan order used during carving
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit offset as (row delta, column delta)
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The reciprocal direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lattice corners of the wall on this side of the cell at `position`
    ///
    /// Returns `(start, end)` in (x, y) order on the unit cell lattice,
    /// before scaling. Adjacent cells derive byte-identical corners for
    /// their shared side, which keeps rendered segments aligned.
    pub const fn unit_segment(self, position: [usize; 2]) -> ([usize; 2], [usize; 2]) {
        let row = position[0];
        let col = position[1];
        match self {
            Self::Up => ([col, row], [col + 1, row]),
            Self::Down => ([col, row + 1], [col + 1, row + 1]),
            Self::Left => ([col, row + 1], [col, row]),
            Self::Right => ([col + 1, row + 1], [col + 1, row]),
        }
    }
}
