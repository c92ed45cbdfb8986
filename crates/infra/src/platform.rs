// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic so the rest of the crate stays free of
//! conditional compilation.

use std::path::Path;

use url::Url;

// ============================================================================
// File URIs
// ============================================================================

/// Render `path` as a `file://` URI for spreadsheet link columns.
///
/// Drive letters and UNC shares are handled per platform. Relative paths have no URI
/// and yield an empty string.
pub fn file_uri(path: &Path) -> String {
    Url::from_file_path(path).map(String::from).unwrap_or_default()
}
