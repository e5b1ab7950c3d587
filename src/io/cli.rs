//! Command-line interface for maze generation and PNG export

use crate::algorithm::carver::DepthFirstCarver;
use crate::analysis::topology;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, DEFAULT_MARGIN, DEFAULT_OUTPUT, DEFAULT_SEED,
    MAX_CANVAS_EXTENT, MAX_GRID_SIZE,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::io::image::export_maze_as_png;
use crate::io::progress::ProgressManager;
use crate::spatial::Grid;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "mazecarve")]
#[command(
    author,
    version,
    about = "Generate perfect mazes using randomized depth-first carving"
)]
/// Command-line arguments for the maze generation tool
pub struct Cli {
    /// Number of cells along each side of the square grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Edge length of one cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Blank border around the maze in pixels
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,

    /// Random seed for reproducible generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Verify the carved maze is connected and acyclic before saving
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one generation run: validate, carve, verify, export
pub struct MazeProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate a maze according to CLI arguments and write it to disk
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, the optional verification
    /// pass, or the PNG export fails
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;

        let start_time = Instant::now();
        let grid = Grid::new(self.cli.size, self.cli.cell_size, self.cli.margin);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(grid.cell_count());
        }

        let mut carver = DepthFirstCarver::new(grid, self.cli.seed);

        while carver.step() {
            if let Some(ref pm) = self.progress_manager {
                pm.update(carver.visited_count());
            }
        }
        carver.open_entrances();

        let stats = carver.stats();
        let grid = carver.into_grid();

        if self.cli.check {
            let report = topology::analyze(&grid);
            if !report.is_perfect() {
                return Err(MazeError::Verification {
                    reason: format!(
                        "expected a spanning tree over {} cells, found {} passages in {} components",
                        report.cells, report.passages, report.components
                    ),
                });
            }
        }

        export_maze_as_png(&grid, &self.cli.output)?;

        if let Some(ref pm) = self.progress_manager {
            pm.update(grid.cell_count());
            pm.finish(&stats, start_time.elapsed(), &self.cli.output);
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &"grid must contain at least one cell",
            ));
        }

        if self.cli.size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &format!("grid side may not exceed {MAX_GRID_SIZE} cells"),
            ));
        }

        if self.cli.cell_size == 0 {
            return Err(invalid_parameter(
                "cell-size",
                &self.cli.cell_size,
                &"cells must be at least one pixel wide",
            ));
        }

        // Computed in u64 so oversized inputs report instead of overflowing
        let extent =
            self.cli.size as u64 * u64::from(self.cli.cell_size) + 2 * u64::from(self.cli.margin);
        if extent > MAX_CANVAS_EXTENT {
            return Err(invalid_parameter(
                "canvas extent",
                &extent,
                &format!("canvas side may not exceed {MAX_CANVAS_EXTENT} pixels"),
            ));
        }

        Ok(())
    }
}
