// crates/infra/src/hashing.rs
use std::io::{ErrorKind, Read};

use tree_inventory_ports::hashing::{ContentHasher, HashValue};
use xxhash_rust::xxh3::{Xxh3, xxh3_128};

/// Read buffer used when no chunk size is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
/// Largest read buffer a worker allocates.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// XXH3-128 over the full content, read in fixed-size chunks.
///
/// Seedless, so digests are stable across runs and machines.
#[derive(Debug, Clone, Copy)]
pub struct Xxh3ContentHasher {
    chunk_size: usize,
}

impl Xxh3ContentHasher {
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// `chunk_size` is clamped to `1..=MAX_CHUNK_SIZE`.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size: chunk_size.clamp(1, MAX_CHUNK_SIZE) }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// One-shot digest of an in-memory buffer; equal to streaming the same bytes.
    pub fn hash_bytes(&self, data: &[u8]) -> HashValue {
        HashValue(xxh3_128(data))
    }
}

impl Default for Xxh3ContentHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHasher for Xxh3ContentHasher {
    fn hash_reader(&self, reader: &mut dyn Read) -> std::io::Result<HashValue> {
        let mut hasher = Xxh3::new();
        let mut buf = vec![0u8; self.chunk_size];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buf[..n]),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(HashValue(hasher.digest128()))
    }
}
