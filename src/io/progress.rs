//! Retry progress reporting for random-start attempt loops

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Attempts: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for one random-start retry loop
///
/// Tracks the deepest partial tour seen so far so a long run shows how
/// close failed attempts are getting.
pub struct AttemptProgress {
    bar: ProgressBar,
    best_visited: usize,
}

impl AttemptProgress {
    /// Create a progress bar sized for the attempt budget
    pub fn new(max_attempts: usize) -> Self {
        let bar = ProgressBar::new(max_attempts as u64);
        bar.set_style(ATTEMPT_STYLE.clone());

        Self {
            bar,
            best_visited: 0,
        }
    }

    /// Record a failed attempt and how far it got
    pub fn record_failure(&mut self, attempt: usize, visited: usize, total: usize) {
        self.best_visited = self.best_visited.max(visited);
        self.bar.set_position(attempt as u64);
        self.bar
            .set_message(format!("best {}/{total}", self.best_visited));
    }

    /// Mark the loop as finished by a completed tour
    pub fn finish_success(&self, attempt: usize, start: [i32; 3]) {
        self.bar.set_position(attempt as u64);
        self.bar.finish_with_message(format!(
            "solved from (layer {}, row {}, col {}) on attempt {attempt}",
            start[0], start[1], start[2]
        ));
    }

    /// Mark the loop as finished with the budget exhausted
    pub fn finish_exhausted(&self) {
        self.bar.finish_with_message("no complete tour found");
    }
}
