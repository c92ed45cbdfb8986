// crates/infra/src/persistence/file_reader.rs
use std::{fs::File, path::Path};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` for reading.
    ///
    /// Unbuffered: content is streamed through the hasher's own chunk buffer.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }
}
