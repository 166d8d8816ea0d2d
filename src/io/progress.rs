//! Batch progress display for multi-file conversion

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many images of a batch have been converted
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
    skipped: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with a hidden bar
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: 0,
            skipped: 0,
        }
    }

    /// Show a bar sized for `file_count` images
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
    }

    /// Show which image is being converted
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Record a converted image
    pub fn complete_file(&mut self) {
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Record an image skipped because its output already exists
    pub fn skip_file(&mut self) {
        self.skipped += 1;
        self.bar.inc(1);
    }

    /// Images converted so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Images skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Clear the bar with a summary message
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} converted, {} skipped",
            self.completed, self.skipped
        ));
    }
}
