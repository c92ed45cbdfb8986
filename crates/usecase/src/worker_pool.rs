// crates/usecase/src/worker_pool.rs
//! Bounded parallel extraction.
//!
//! ```text
//! calling thread: paths ──► bounded channel ──► worker 0..N: extract ──► on_record
//! ```
//!
//! The calling thread feeds the channel, so a lazy path source is consumed as fast as
//! workers drain it and never buffers more than the channel capacity.

use std::{
    path::PathBuf,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    thread,
};

use crossbeam_channel::{Receiver, bounded};
use tracing::{debug, warn};
use tree_inventory_ports::filesystem::MetadataExtractor;
use tree_inventory_shared_kernel::{
    Concurrency, InfrastructureError, InventoryError, OutputError, OutputResult, Record, Result,
};

use crate::dto::PoolStats;

/// Paths buffered per worker between discovery and extraction.
const QUEUE_DEPTH_PER_WORKER: usize = 4;

/// Fixed-size pool of extraction workers.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    concurrency: Concurrency,
}

#[derive(Default)]
struct Shared {
    failed: AtomicBool,
    first_error: Mutex<Option<OutputError>>,
    produced: AtomicU64,
    vanished: AtomicU64,
    unhashed: AtomicU64,
}

impl Shared {
    fn fail(&self, err: OutputError) {
        self.failed.store(true, Ordering::Release);
        let mut slot = self.first_error.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.get_or_insert(err);
    }

    fn has_failed(&self) -> bool {
        self.failed.load(Ordering::Acquire)
    }

    fn take_error(&self) -> Option<OutputError> {
        self.first_error.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).take()
    }
}

impl WorkerPool {
    pub fn new(concurrency: Concurrency) -> Self {
        Self { concurrency }
    }

    pub fn concurrency(&self) -> Concurrency {
        self.concurrency
    }

    /// Extract every path and hand each record to `on_record`.
    ///
    /// `on_record` runs on worker threads, concurrently. Its first error stops the
    /// pool: no further paths are dispatched, workers exit after their current file,
    /// and the error is returned. Vanished files are logged and counted, never fatal.
    pub fn run<I, E, F>(&self, paths: I, extractor: &E, on_record: F) -> Result<PoolStats>
    where
        I: IntoIterator<Item = PathBuf>,
        E: MetadataExtractor + ?Sized,
        F: Fn(Record) -> OutputResult<()> + Sync,
    {
        let workers = self.concurrency.get();
        let shared = Shared::default();
        let mut submitted = 0u64;

        let panicked = thread::scope(|scope| -> Result<Vec<usize>> {
            let (tx, rx) = bounded::<PathBuf>(workers * QUEUE_DEPTH_PER_WORKER);

            let mut handles = Vec::with_capacity(workers);
            for id in 0..workers {
                let rx = rx.clone();
                let (shared, on_record) = (&shared, &on_record);
                let handle = thread::Builder::new()
                    .name(format!("extract-{id}"))
                    .spawn_scoped(scope, move || worker_loop(id, rx, extractor, on_record, shared))
                    .map_err(|err| InfrastructureError::ThreadSpawn { details: err.to_string() })?;
                handles.push(handle);
            }
            drop(rx);

            for path in paths {
                if shared.has_failed() {
                    break;
                }
                if tx.send(path).is_err() {
                    // Every worker is gone.
                    break;
                }
                submitted += 1;
            }
            drop(tx);

            Ok(handles
                .into_iter()
                .enumerate()
                .filter_map(|(id, handle)| handle.join().is_err().then_some(id))
                .collect())
        })?;

        if let Some(err) = shared.take_error() {
            return Err(InventoryError::Output(err));
        }
        if let Some(&worker) = panicked.first() {
            return Err(InfrastructureError::WorkerPanicked { worker }.into());
        }

        Ok(PoolStats {
            submitted,
            produced: shared.produced.load(Ordering::Relaxed),
            vanished: shared.vanished.load(Ordering::Relaxed),
            unhashed: shared.unhashed.load(Ordering::Relaxed),
        })
    }

    /// Extract every path and gather the records, in completion order.
    pub fn collect<I, E>(&self, paths: I, extractor: &E) -> Result<Vec<Record>>
    where
        I: IntoIterator<Item = PathBuf>,
        E: MetadataExtractor + ?Sized,
    {
        let records = Mutex::new(Vec::new());
        self.run(paths, extractor, |record| {
            records.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).push(record);
            Ok(())
        })?;
        Ok(records.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(Concurrency::detect())
    }
}

fn worker_loop<E, F>(id: usize, rx: Receiver<PathBuf>, extractor: &E, on_record: &F, shared: &Shared)
where
    E: MetadataExtractor + ?Sized,
    F: Fn(Record) -> OutputResult<()>,
{
    let mut handled = 0u64;
    // Ends once the channel is closed and drained.
    for path in rx {
        if shared.has_failed() {
            break;
        }
        handled += 1;
        let record = match extractor.extract(&path) {
            Ok(record) => record,
            Err(issue) => {
                shared.vanished.fetch_add(1, Ordering::Relaxed);
                warn!("{issue}");
                continue;
            }
        };
        let unhashed = record.content_hash().is_empty();
        match on_record(record) {
            Ok(()) => {
                shared.produced.fetch_add(1, Ordering::Relaxed);
                if unhashed {
                    shared.unhashed.fetch_add(1, Ordering::Relaxed);
                }
            }
            Err(err) => {
                shared.fail(err);
                break;
            }
        }
    }
    debug!(worker = id, handled, "extraction worker finished");
}
