// crates/shared-kernel/src/value_objects/mod.rs
pub mod concurrency;
pub mod content_hash;
pub mod file_info;

pub use concurrency::Concurrency;
pub use content_hash::{ContentHash, HashValue};
pub use file_info::{FileExtension, FileName, FilePath, FileSize, ModificationTime};
