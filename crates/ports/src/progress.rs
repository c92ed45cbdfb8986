// crates/ports/src/progress.rs
use std::path::Path;

pub trait ProgressSink: Send + Sync {
    fn on_file(&self, path: &Path);
    fn on_complete(&self);
}

/// Progress sink that reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_file(&self, _path: &Path) {}

    fn on_complete(&self) {}
}
