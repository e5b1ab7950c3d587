//! PNG rendering of carved mazes

use crate::io::error::{MazeError, Result};
use crate::spatial::Grid;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Canvas background colour.
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Wall stroke colour.
const STROKE: Rgb<u8> = Rgb([0, 0, 0]);

/// Renders the visible walls of a carved grid and writes the result as a PNG.
///
/// The canvas is a square of `grid.canvas_extent()` pixels filled with the
/// background colour. Every wall still marked visible is drawn as a
/// one-pixel-wide black segment between its lattice endpoints. Hidden walls
/// are skipped, so carved passages and the entrance and exit openings appear
/// as gaps in the outline.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory of the output path cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_maze_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    let extent = grid.canvas_extent();
    let mut img = RgbImage::from_pixel(extent, extent, BACKGROUND);

    for wall in grid.walls() {
        if wall.is_visible() {
            draw_segment(&mut img, wall.start, wall.end);
        }
    }

    // Bare filenames have an empty parent, which create_dir_all rejects
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

// Strokes an axis-aligned segment one pixel wide, endpoints inclusive
fn draw_segment(img: &mut RgbImage, start: [u32; 2], end: [u32; 2]) {
    let (x_min, x_max) = span(start[0], end[0]);
    let (y_min, y_max) = span(start[1], end[1]);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            if x < img.width() && y < img.height() {
                img.put_pixel(x, y, STROKE);
            }
        }
    }
}

const fn span(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}
