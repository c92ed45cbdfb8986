// crates/infra/src/progress.rs
use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tree_inventory_ports::progress::ProgressSink;

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {pos} files ({per_sec}) {msg}";

/// Spinner on stderr counting processed files.
pub struct StderrProgress {
    bar: ProgressBar,
}

impl StderrProgress {
    pub fn new() -> Self {
        let progress = Self::with_draw_target(ProgressDrawTarget::stderr());
        progress.bar.enable_steady_tick(Duration::from_millis(100));
        progress
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        let style = ProgressStyle::default_spinner()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        bar.set_style(style);
        Self { bar }
    }

    pub fn seen(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for StderrProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for StderrProgress {
    fn on_file(&self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_complete(&self) {
        self.bar.finish_with_message("done");
    }
}
