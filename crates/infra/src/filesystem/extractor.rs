// crates/infra/src/filesystem/extractor.rs
use std::{fs, io, path::Path};

use tracing::warn;
use tree_inventory_ports::{
    filesystem::MetadataExtractor,
    hashing::{ContentHasher, HashValue},
};
use tree_inventory_shared_kernel::{
    ContentHash, FilePath, FileSize, ModificationTime, Record, ScanIssue,
};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `MetadataExtractor` port.
///
/// Stat follows symbolic links, so a link to a file reports its target's size and time.
#[derive(Debug, Clone, Default)]
pub struct FsMetadataExtractor<H> {
    hasher: H,
}

impl<H: ContentHasher> FsMetadataExtractor<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    fn hash_content(&self, path: &Path) -> std::io::Result<HashValue> {
        let mut file = FileReader::open(path)?;
        self.hasher.hash_reader(&mut file)
    }
}

impl<H: ContentHasher> MetadataExtractor for FsMetadataExtractor<H> {
    fn extract(&self, path: &Path) -> Result<Record, ScanIssue> {
        let metadata = fs::metadata(path)
            .map_err(|source| ScanIssue::FileVanished { path: path.to_path_buf(), source })?;
        if !metadata.is_file() {
            // Replaced by a directory or special file since discovery.
            return Err(ScanIssue::FileVanished {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no longer a regular file"),
            });
        }
        let size = FileSize::new(metadata.len());
        let modified_at = metadata.modified().ok().map(ModificationTime::from);

        let content_hash = match self.hash_content(path) {
            Ok(value) => ContentHash::digest(value),
            Err(source) => {
                let issue = ScanIssue::ContentUnreadable { path: path.to_path_buf(), source };
                warn!("{issue}");
                ContentHash::empty()
            }
        };

        Ok(Record::new(FilePath::from(path), size, modified_at, content_hash))
    }
}
