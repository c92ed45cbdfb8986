// crates/ports/src/hashing.rs
use std::io::Read;

pub use tree_inventory_shared_kernel::HashValue;

/// Streaming content digest.
pub trait ContentHasher: Send + Sync {
    /// Consume `reader` to its end and digest everything read.
    ///
    /// Any read error aborts the digest; no partial value is returned.
    fn hash_reader(&self, reader: &mut dyn Read) -> std::io::Result<HashValue>;
}
