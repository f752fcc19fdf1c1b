//! # Download Progress Reporting

use std::sync::Arc;

use downloader::progress::Reporter;
use indicatif::ProgressBar;

/// [`Reporter`] counting completed downloads on a shared progress bar.
///
/// The download pool reports per-download byte progress, but for batches of
/// many small documents the useful signal is documents completed; per-byte
/// callbacks are ignored and each `done` ticks the bar once.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Create a shared reporter over `total` downloads.
    pub fn new(total: u64) -> Arc<Self> {
        Arc::new(Self {
            bar: ProgressBar::new(total),
        })
    }

    /// Finish and clear the bar.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Reporter for BatchProgress {
    fn setup(
        &self,
        _max_progress: Option<u64>,
        _message: &str,
    ) {
    }

    fn progress(
        &self,
        _current: u64,
    ) {
    }

    fn set_message(
        &self,
        _message: &str,
    ) {
    }

    fn done(&self) {
        self.bar.inc(1);
    }
}
