//! Batch progress display for sequential file processing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of files
///
/// Constructed disabled when the user asked for quiet output, in which case
/// every method is a no-op.
pub struct BatchProgress {
    bar: Option<ProgressBar>,
}

impl BatchProgress {
    /// Create a progress bar over `len` items, or a silent stand-in
    pub fn new(enabled: bool, len: usize) -> Self {
        let bar = (enabled && len > 0).then(|| {
            let pb = ProgressBar::new(len as u64);
            pb.set_style(BATCH_STYLE.clone());
            pb
        });
        Self { bar }
    }

    /// Show the name of the item being processed
    pub fn start_item(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// Mark the current item as done
    pub fn complete_item(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
