// crates/infra/src/filesystem.rs
mod extractor;
mod walker;

pub use extractor::FsMetadataExtractor;
pub use walker::{TreeWalker, Walk, WalkStats};
