// crates/usecase/src/orchestrator.rs
use std::time::Instant;

use tracing::info;
use tree_inventory_ports::{
    filesystem::{MetadataExtractor, PathStream},
    progress::{NoProgress, ProgressSink},
    sink::RowSink,
};
use tree_inventory_shared_kernel::{ErrorContext, Result};

use crate::{dto::ScanSummary, worker_pool::WorkerPool};

/// Scan use case: header, then discovery → extraction → rows, then flush.
pub struct ScanInventory<'a> {
    extractor: &'a dyn MetadataExtractor,
    sink: &'a dyn RowSink,
    progress: &'a dyn ProgressSink,
    pool: WorkerPool,
}

impl<'a> ScanInventory<'a> {
    pub fn new(extractor: &'a dyn MetadataExtractor, sink: &'a dyn RowSink, pool: WorkerPool) -> Self {
        Self { extractor, sink, progress: &NoProgress, pool }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Drain `paths` into the sink.
    ///
    /// Any output failure is returned immediately; the caller owns the destination
    /// and decides what to do with the partial file.
    pub fn run<P: PathStream>(&self, mut paths: P) -> Result<ScanSummary> {
        let started = Instant::now();
        info!(workers = self.pool.concurrency().get(), "scan started");

        self.sink.write_header().context("writing header row")?;

        let stats = self.pool.run(&mut paths, self.extractor, |record| {
            self.progress.on_file(record.path().as_path());
            self.sink.write(&record)
        })?;

        self.sink.finish().context("flushing output")?;
        self.progress.on_complete();

        let summary = ScanSummary {
            files_discovered: stats.submitted,
            records_written: stats.produced,
            skipped_directories: paths.skipped_directories(),
            vanished_files: stats.vanished,
            unhashed_files: stats.unhashed,
            elapsed: started.elapsed(),
        };
        info!(rows = summary.records_written, elapsed = ?summary.elapsed, "scan finished");
        Ok(summary)
    }
}
