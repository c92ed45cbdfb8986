// crates/usecase/src/dto.rs
use std::{fmt, time::Duration};

/// Counters reported by [`crate::WorkerPool::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Paths handed to workers.
    pub submitted: u64,
    /// Records accepted by the consumer.
    pub produced: u64,
    /// Paths whose stat failed; no record was produced.
    pub vanished: u64,
    /// Records produced with an empty content hash.
    pub unhashed: u64,
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_discovered: u64,
    pub records_written: u64,
    pub skipped_directories: u64,
    pub vanished_files: u64,
    pub unhashed_files: u64,
    pub elapsed: Duration,
}

impl ScanSummary {
    /// `true` when something was skipped or left without a hash.
    pub fn is_partial(&self) -> bool {
        self.skipped_directories > 0 || self.vanished_files > 0 || self.unhashed_files > 0
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows written in {:.2?} ({} files discovered, {} unreadable directories skipped, {} vanished files skipped, {} files without hash)",
            self.records_written,
            self.elapsed,
            self.files_discovered,
            self.skipped_directories,
            self.vanished_files,
            self.unhashed_files,
        )
    }
}
