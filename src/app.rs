// src/app.rs
use std::{fs, io, path::{Path, PathBuf}};

use tracing::{debug, warn};
use tree_inventory_infra::{
    CsvRowSink, FsMetadataExtractor, TreeWalker, Xxh3ContentHasher,
    persistence::FileWriter, progress::StderrProgress, unique_output_path,
};
use tree_inventory_ports::sink::RowSink;
use tree_inventory_shared_kernel::{InputError, OutputError, OutputResult, Result};
use tree_inventory_usecase::{ScanInventory, ScanSummary, WorkerPool};

use crate::config::ScanConfig;

/// Attempts at claiming a fresh output name when another process takes it first.
const CREATE_ATTEMPTS: usize = 8;

/// Where the inventory went and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub output: PathBuf,
    pub summary: ScanSummary,
}

/// Inventory `config.root` into a new CSV file.
///
/// On a fatal error the partial output is removed.
pub fn run(config: &ScanConfig) -> Result<ScanReport> {
    validate_root(&config.root)?;

    let sink = create_sink(&config.output)?;
    let output = sink.path().to_path_buf();
    debug!(output = %output.display(), "output created");

    scan_into(config, sink, output)
}

/// Scan into `sink`, which owns the file at `output`.
fn scan_into<S: RowSink>(config: &ScanConfig, sink: S, output: PathBuf) -> Result<ScanReport> {
    let extractor = FsMetadataExtractor::new(Xxh3ContentHasher::with_chunk_size(config.chunk_size));
    let progress = config.progress.then(StderrProgress::new);
    let mut usecase = ScanInventory::new(&extractor, &sink, WorkerPool::new(config.concurrency));
    if let Some(progress) = &progress {
        usecase = usecase.with_progress(progress);
    }

    let outcome = usecase.run(TreeWalker::new().ignoring(&output).walk(&config.root));
    drop(usecase);

    match outcome {
        Ok(summary) => Ok(ScanReport { output, summary }),
        Err(err) => {
            // Release the lock before removing the file.
            drop(sink);
            if !FileWriter::discard(&output) {
                warn!(output = %output.display(), "could not remove partial output");
            }
            Err(err)
        }
    }
}

/// The root must exist and be a directory.
pub fn validate_root(root: &Path) -> Result<()> {
    let meta = fs::metadata(root).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::RootNotFound { path: root.to_path_buf() },
        _ => InputError::RootInaccessible { path: root.to_path_buf(), source },
    })?;
    if !meta.is_dir() {
        return Err(InputError::RootNotDirectory { path: root.to_path_buf() }.into());
    }
    Ok(())
}

fn create_sink(desired: &Path) -> OutputResult<CsvRowSink> {
    let mut attempt = 0;
    loop {
        let candidate = unique_output_path(desired)?;
        match CsvRowSink::create(&candidate) {
            Err(OutputError::Create { source, .. })
                if source.kind() == io::ErrorKind::AlreadyExists && attempt + 1 < CREATE_ATTEMPTS =>
            {
                attempt += 1;
                debug!(candidate = %candidate.display(), "output name taken, retrying");
            }
            other => return other,
        }
    }
}
