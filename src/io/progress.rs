//! Progress reporting for multi-PDF conversions

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Completion fractions of a conversion, each in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    /// PDFs completed out of the total
    pub outer: f64,
    /// Pages completed within the current PDF
    pub inner: f64,
}

impl Progress {
    /// Compute both fractions from counts
    ///
    /// Zero totals count as complete.
    pub fn from_counts(
        pdfs_done: usize,
        pdfs_total: usize,
        pages_done: usize,
        pages_total: usize,
    ) -> Self {
        Self {
            outer: fraction(pdfs_done, pdfs_total),
            inner: fraction(pages_done, pages_total),
        }
    }
}

fn fraction(done: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        (done.min(total) as f64) / (total as f64)
    }
}

/// Receives progress after every page and every PDF
pub trait ProgressSink {
    /// Record the latest progress
    fn report(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> ProgressSink for F {
    fn report(&mut self, progress: Progress) {
        self(progress);
    }
}

/// Sink that discards all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _progress: Progress) {}
}

// Bars track fractions scaled to this many steps
const BAR_RESOLUTION: u64 = 1000;

static OUTER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] PDFs  [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{percent:>3}}%"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static INNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "             Pages [{{bar:{PROGRESS_BAR_WIDTH}.green/blue}}] {{percent:>3}}%"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal display with one bar for PDFs and one for pages
pub struct ProgressManager {
    multi_progress: MultiProgress,
    outer: ProgressBar,
    inner: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create both bars, initially empty
    pub fn new() -> Self {
        let multi_progress = MultiProgress::new();
        let outer = multi_progress.add(ProgressBar::new(BAR_RESOLUTION));
        outer.set_style(OUTER_STYLE.clone());
        let inner = multi_progress.add(ProgressBar::new(BAR_RESOLUTION));
        inner.set_style(INNER_STYLE.clone());
        Self {
            multi_progress,
            outer,
            inner,
        }
    }

    /// Position of the PDF bar in `0..=1000`
    pub fn outer_position(&self) -> u64 {
        self.outer.position()
    }

    /// Position of the page bar in `0..=1000`
    pub fn inner_position(&self) -> u64 {
        self.inner.position()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        self.outer.finish_with_message("All PDFs written");
        self.inner.finish_and_clear();
        let _ = self.multi_progress.clear();
    }
}

impl ProgressSink for ProgressManager {
    fn report(&mut self, progress: Progress) {
        self.outer
            .set_position((progress.outer.clamp(0.0, 1.0) * BAR_RESOLUTION as f64) as u64);
        self.inner
            .set_position((progress.inner.clamp(0.0, 1.0) * BAR_RESOLUTION as f64) as u64);
    }
}
