// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, InfrastructureError, InputError, InventoryError, OutputError,
    OutputResult, Result, ScanIssue,
};

pub mod error;
pub mod path;
pub mod record;
pub mod value_objects;

pub use record::Record;
pub use value_objects::{
    Concurrency, ContentHash, FileExtension, FileName, FilePath, FileSize, HashValue,
    ModificationTime,
};
