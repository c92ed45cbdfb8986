// crates/shared-kernel/src/record.rs
use crate::value_objects::{
    ContentHash, FileExtension, FileName, FilePath, FileSize, ModificationTime,
};

/// Metadata and content digest of one file. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    path: FilePath,
    directory: FilePath,
    name: FileName,
    modified_at: Option<ModificationTime>,
    size: FileSize,
    extension: FileExtension,
    content_hash: ContentHash,
}

impl Record {
    /// Derive directory, name and extension from `path`.
    pub fn new(
        path: FilePath,
        size: FileSize,
        modified_at: Option<ModificationTime>,
        content_hash: ContentHash,
    ) -> Self {
        let directory = path.parent();
        let name = path.file_name().unwrap_or_else(|| FileName::new(String::new()));
        let extension = name.extension();
        Self { path, directory, name, modified_at, size, extension, content_hash }
    }

    pub fn path(&self) -> &FilePath {
        &self.path
    }

    pub fn directory(&self) -> &FilePath {
        &self.directory
    }

    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn modified_at(&self) -> Option<&ModificationTime> {
        self.modified_at.as_ref()
    }

    pub fn size(&self) -> FileSize {
        self.size
    }

    pub fn extension(&self) -> &FileExtension {
        &self.extension
    }

    pub fn content_hash(&self) -> ContentHash {
        self.content_hash
    }
}
