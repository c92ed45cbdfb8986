// crates/ports/src/sink.rs
use tree_inventory_shared_kernel::{OutputResult, Record};

/// Column names, in output order.
pub const COLUMNS: [&str; 9] = [
    "path-link",
    "path",
    "folder",
    "filename",
    "modified",
    "size",
    "pretty-size",
    "extension",
    "hash",
];

/// Row-oriented destination shared by all extraction workers.
///
/// Implementations must serialize concurrent `write` calls so rows never interleave.
pub trait RowSink: Send + Sync {
    /// Emit the column header. Called once, before any record.
    fn write_header(&self) -> OutputResult<()>;

    /// Append exactly one row.
    fn write(&self, record: &Record) -> OutputResult<()>;

    /// Flush buffered rows to the destination.
    fn finish(&self) -> OutputResult<()>;
}
