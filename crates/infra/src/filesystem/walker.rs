// crates/infra/src/filesystem/walker.rs
//! Iterative directory traversal.
//!
//! Pending directories live on an explicit stack, so tree depth never grows the
//! call stack. At most one directory handle is open at a time.
//!
//! Symbolic links: a link to a regular file is reported as a file; a link to a
//! directory is never descended, so links cannot form cycles. Broken links and
//! special files (FIFOs, sockets, devices) are skipped.

use std::{
    fs::{self, DirEntry, ReadDir},
    path::PathBuf,
};

use tracing::{debug, warn};
use tree_inventory_ports::filesystem::PathStream;
use tree_inventory_shared_kernel::ScanIssue;

/// Counters describing a finished (or in-progress) walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: u64,
    pub directories_listed: u64,
    pub directories_skipped: u64,
    pub entries_skipped: u64,
}

/// Discovers regular files beneath a root.
#[derive(Debug, Default, Clone)]
pub struct TreeWalker {
    ignored: Option<PathBuf>,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never report `path`, e.g. the inventory being written inside the tree.
    pub fn ignoring(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignored = Some(path.into());
        self
    }

    /// Start a fresh walk. The returned iterator is lazy and single-use.
    pub fn walk(&self, root: impl Into<PathBuf>) -> Walk {
        Walk {
            pending: vec![root.into()],
            current: None,
            ignored: self.ignored.clone(),
            stats: WalkStats::default(),
        }
    }
}

/// Lazy sequence of file paths produced by [`TreeWalker::walk`].
#[derive(Debug)]
pub struct Walk {
    pending: Vec<PathBuf>,
    current: Option<(PathBuf, ReadDir)>,
    ignored: Option<PathBuf>,
    stats: WalkStats,
}

impl Walk {
    pub fn stats(&self) -> WalkStats {
        self.stats
    }

    fn open_next_directory(&mut self) -> bool {
        while let Some(dir) = self.pending.pop() {
            match fs::read_dir(&dir) {
                Ok(entries) => {
                    self.stats.directories_listed += 1;
                    self.current = Some((dir, entries));
                    return true;
                }
                Err(source) => {
                    self.stats.directories_skipped += 1;
                    let issue = ScanIssue::DirectoryUnreadable { path: dir, source };
                    warn!("{issue}");
                }
            }
        }
        false
    }

    /// Route one entry: subdirectories go to pending, files are returned.
    fn classify(&mut self, entry: DirEntry) -> Option<PathBuf> {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                self.stats.entries_skipped += 1;
                warn!("cannot determine type of '{}': {err}", path.display());
                return None;
            }
        };

        if file_type.is_dir() {
            self.pending.push(path);
            return None;
        }
        if self.ignored.as_deref() == Some(path.as_path()) {
            return None;
        }
        if file_type.is_file() {
            return Some(path);
        }
        if file_type.is_symlink() {
            return match fs::metadata(&path) {
                Ok(target) if target.is_file() => Some(path),
                Ok(target) if target.is_dir() => {
                    debug!("not following directory link '{}'", path.display());
                    None
                }
                Ok(_) => None,
                Err(err) => {
                    self.stats.entries_skipped += 1;
                    debug!("skipping broken link '{}': {err}", path.display());
                    None
                }
            };
        }

        debug!("skipping special file '{}'", path.display());
        None
    }
}

impl Iterator for Walk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let next = if let Some((_, entries)) = self.current.as_mut() {
                entries.next()
            } else if self.open_next_directory() {
                continue;
            } else {
                return None;
            };

            match next {
                Some(Ok(entry)) => {
                    if let Some(path) = self.classify(entry) {
                        self.stats.files_found += 1;
                        return Some(path);
                    }
                }
                Some(Err(err)) => {
                    self.stats.entries_skipped += 1;
                    if let Some((dir, _)) = &self.current {
                        warn!("failed to read an entry of '{}': {err}", dir.display());
                    }
                }
                None => self.current = None,
            }
        }
    }
}

impl PathStream for Walk {
    fn skipped_directories(&self) -> u64 {
        self.stats.directories_skipped
    }
}
