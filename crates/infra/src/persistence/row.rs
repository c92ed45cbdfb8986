// crates/infra/src/persistence/row.rs
use serde::Serialize;
use tree_inventory_shared_kernel::Record;

use crate::platform::file_uri;

/// One output row; field order matches [`tree_inventory_ports::sink::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub path_link: String,
    pub path: String,
    pub folder: String,
    pub filename: String,
    pub modified: String,
    pub size: u64,
    pub pretty_size: String,
    pub extension: String,
    pub hash: String,
}

impl From<&Record> for InventoryRow {
    fn from(record: &Record) -> Self {
        Self {
            path_link: file_uri(record.path().as_path()),
            path: record.path().to_string_lossy().into_owned(),
            folder: record.directory().to_string_lossy().into_owned(),
            filename: record.name().to_string(),
            modified: record.modified_at().map(|m| m.to_rfc3339()).unwrap_or_default(),
            size: record.size().bytes(),
            pretty_size: record.size().to_human(),
            extension: record.extension().to_string(),
            hash: record.content_hash().to_string(),
        }
    }
}
