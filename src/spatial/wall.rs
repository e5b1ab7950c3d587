//! Wall segments in canvas pixel coordinates

use crate::spatial::direction::Direction;

/// One wall segment between a cell and its neighbor (or the grid exterior)
///
/// Endpoints are fixed at construction in canvas pixel coordinates; carving
/// only ever flips the visibility flag. Interior walls are stored once and
/// referenced from both bordering cells, so hiding from either side affects
/// the single shared segment.
#[derive(Clone, Debug)]
pub struct Wall {
    /// Segment start in (x, y) pixel coordinates
    pub start: [u32; 2],
    /// Segment end in (x, y) pixel coordinates
    pub end: [u32; 2],
    visible: bool,
}

impl Wall {
    /// Build the wall on the given side of the cell at `position`
    ///
    /// Lattice corners from the direction are scaled by `cell_size` and
    /// translated by `margin`. Two adjacent cells produce identical
    /// endpoints for their shared side regardless of which one builds it.
    pub const fn from_cell(
        position: [usize; 2],
        direction: Direction,
        cell_size: u32,
        margin: u32,
    ) -> Self {
        let (start, end) = direction.unit_segment(position);
        Self {
            start: [
                start[0] as u32 * cell_size + margin,
                start[1] as u32 * cell_size + margin,
            ],
            end: [
                end[0] as u32 * cell_size + margin,
                end[1] as u32 * cell_size + margin,
            ],
            visible: true,
        }
    }

    /// Whether the wall should be drawn
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Clear the visibility flag, opening a passage through this wall
    ///
    /// There is no reverse operation; walls only ever go from visible to
    /// hidden.
    pub const fn hide(&mut self) {
        self.visible = false;
    }
}
