// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod hashing;
pub mod persistence;
pub mod platform;
pub mod progress;

pub use filesystem::{FsMetadataExtractor, TreeWalker, Walk, WalkStats};
pub use hashing::Xxh3ContentHasher;
pub use persistence::{CsvRowSink, unique_output_path};
