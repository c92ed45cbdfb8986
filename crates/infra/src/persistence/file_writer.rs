// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{File, OpenOptions},
    path::Path,
};

use fs2::FileExt;
use tree_inventory_shared_kernel::{OutputError, OutputResult};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create `path`, failing if it already exists, and take an exclusive advisory lock on it.
    ///
    /// The lock is held until the returned handle is dropped.
    pub fn create_exclusive<P: AsRef<Path>>(path: P) -> OutputResult<File> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|source| OutputError::Create { path: path.to_path_buf(), source })?;
        Self::lock_or_discard(file, path)
    }

    /// Lock a file just created at `path`; on failure the file is removed again.
    fn lock_or_discard(file: File, path: &Path) -> OutputResult<File> {
        match file.try_lock_exclusive() {
            Ok(()) => Ok(file),
            Err(source) => {
                drop(file);
                Self::discard(path);
                Err(OutputError::Lock { path: path.to_path_buf(), source })
            }
        }
    }

    /// Best-effort removal of a destination left unusable by a failed run.
    pub fn discard<P: AsRef<Path>>(path: P) -> bool {
        std::fs::remove_file(path.as_ref()).is_ok()
    }
}
