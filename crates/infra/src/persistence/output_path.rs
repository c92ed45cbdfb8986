// crates/infra/src/persistence/output_path.rs
use std::path::{Path, PathBuf};

use tree_inventory_shared_kernel::{OutputError, OutputResult};

const MAX_SUFFIX: u32 = 10_000;

/// File name used when no destination is configured: `<root name>_inventory.csv`.
pub fn default_output_name(root: &Path) -> String {
    let stem = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "root".to_string());
    format!("{stem}_inventory.csv")
}

/// First of `desired`, `stem (1).ext`, `stem (2).ext`, ... that does not exist yet.
pub fn unique_output_path(desired: &Path) -> OutputResult<PathBuf> {
    if !desired.exists() {
        return Ok(desired.to_path_buf());
    }

    let stem = desired
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = desired.extension().map(|e| e.to_string_lossy().into_owned());

    (1..=MAX_SUFFIX)
        .map(|n| {
            let name = match &ext {
                Some(ext) => format!("{stem} ({n}).{ext}"),
                None => format!("{stem} ({n})"),
            };
            desired.with_file_name(name)
        })
        .find(|candidate| !candidate.exists())
        .ok_or_else(|| OutputError::NoFreeName { path: desired.to_path_buf() })
}
