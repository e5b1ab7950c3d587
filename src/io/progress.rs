//! Terminal progress reporting for carve runs

use crate::algorithm::carver::CarveStats;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static CARVE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Displays carve progress for a single generation run
///
/// The bar tracks visited cells out of the grid total and is replaced by a
/// one-line summary when the maze has been written to disk
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Start a progress bar sized to the total cell count of the grid
    pub fn initialize(&mut self, total_cells: usize) {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(CARVE_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Report the number of cells visited so far
    pub fn update(&self, visited: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(visited as u64);
        }
    }

    /// Complete the bar with a summary of the finished run
    pub fn finish(&self, stats: &CarveStats, elapsed: Duration, output_path: &Path) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!(
                "✓ Saved {} in {elapsed:.2?} ({} passages, {} backtracks)",
                output_path.display(),
                stats.passages,
                stats.backtracks,
            ));
        }
    }
}
