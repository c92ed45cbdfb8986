// crates/shared-kernel/src/value_objects/content_hash.rs
use std::fmt;

/// 128-bit content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct HashValue(pub u128);

impl HashValue {
    /// Length of the lowercase hex rendering.
    pub const HEX_LEN: usize = 32;
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// Digest of a file's full content, or nothing when the content could not be read.
///
/// Renders as exactly [`HashValue::HEX_LEN`] lowercase hex digits or as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[must_use]
pub struct ContentHash(Option<HashValue>);

impl ContentHash {
    pub const fn digest(value: HashValue) -> Self {
        Self(Some(value))
    }

    pub const fn empty() -> Self {
        Self(None)
    }

    pub const fn value(&self) -> Option<HashValue> {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}
