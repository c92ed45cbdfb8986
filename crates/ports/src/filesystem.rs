// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use tree_inventory_shared_kernel::{Record, ScanIssue};

/// Port turning a discovered path into a [`Record`].
pub trait MetadataExtractor: Send + Sync {
    /// Stat then hash `path`.
    ///
    /// Returns [`ScanIssue::FileVanished`] when the stat fails. Unreadable content is
    /// not an error: the record is returned with an empty hash.
    fn extract(&self, path: &Path) -> Result<Record, ScanIssue>;
}

/// Lazily discovered file paths with a tally of what could not be listed.
pub trait PathStream: Iterator<Item = PathBuf> {
    /// Directories skipped so far because they could not be listed.
    fn skipped_directories(&self) -> u64;
}
