// src/config.rs
use std::path::PathBuf;

use tree_inventory_infra::persistence::default_output_name;
use tree_inventory_shared_kernel::{
    Concurrency, InputError, Result,
    path::{logical_absolute, normalize_lexically, resolve_root},
};

use crate::cli::{Args, LogLevel};

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Absolute, normalized root.
    pub root: PathBuf,
    /// Desired destination; uniquified right before the file is created.
    pub output: PathBuf,
    pub concurrency: Concurrency,
    pub chunk_size: usize,
    pub progress: bool,
    pub log_level: LogLevel,
}

impl ScanConfig {
    /// Build from parsed arguments. `prompt` supplies the root when none was given.
    pub fn from_args<F>(args: Args, prompt: F) -> Result<Self>
    where
        F: FnOnce() -> std::io::Result<String>,
    {
        let raw_root = match args.root {
            Some(root) => root,
            None => PathBuf::from(clean_answer(&prompt()?)),
        };
        if raw_root.as_os_str().is_empty() {
            return Err(InputError::MissingRoot.into());
        }
        let root = resolve_root(&raw_root);

        let output = args.output.unwrap_or_else(|| PathBuf::from(default_output_name(&root)));
        let output = normalize_lexically(&logical_absolute(&output));

        Ok(Self {
            root,
            output,
            concurrency: Concurrency::or_detect(Some(args.jobs)),
            chunk_size: args.chunk_size,
            progress: args.progress,
            log_level: args.log_level,
        })
    }
}

/// Trim whitespace and one pair of matching quotes, as left by drag-and-drop into a terminal.
fn clean_answer(answer: &str) -> &str {
    let trimmed = answer.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|q| trimmed.strip_prefix(q).and_then(|s| s.strip_suffix(q)))
        .unwrap_or(trimmed)
}
