// crates/infra/src/persistence/csv_sink.rs
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use tree_inventory_ports::sink::{COLUMNS, RowSink};
use tree_inventory_shared_kernel::{OutputError, OutputResult, Record};

use super::{FileWriter, InventoryRow};

struct SinkState<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

/// CSV destination shared by all workers.
///
/// The csv writer sits behind a mutex; one row is encoded and buffered per lock
/// acquisition, so rows from different workers never interleave.
pub struct CsvRowSink<W: Write = File> {
    path: PathBuf,
    state: Mutex<SinkState<W>>,
}

impl CsvRowSink<File> {
    /// Create a new file at `path` (never overwriting) and lock it for this run.
    pub fn create(path: impl Into<PathBuf>) -> OutputResult<Self> {
        let path = path.into();
        let file = FileWriter::create_exclusive(&path)?;
        Ok(Self::from_writer(path, file))
    }
}

impl<W: Write> CsvRowSink<W> {
    /// Wrap an arbitrary writer; `path` is only used in error messages.
    pub fn from_writer(path: impl Into<PathBuf>, writer: W) -> Self {
        let writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        Self { path: path.into(), state: Mutex::new(SinkState { writer, header_written: false }) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> OutputResult<W> {
        let path = self.path;
        let state = self.state.into_inner().map_err(|_| poisoned(&path))?;
        state.writer.into_inner().map_err(|err| OutputError::Write {
            path: path.clone(),
            source: std::io::Error::other(err.to_string()),
        })
    }

    fn lock(&self) -> OutputResult<MutexGuard<'_, SinkState<W>>> {
        self.state.lock().map_err(|_| poisoned(&self.path))
    }

    fn encode_error(&self, err: csv::Error) -> OutputError {
        let details = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => OutputError::Write { path: self.path.clone(), source },
            _ => OutputError::Encode { path: self.path.clone(), details },
        }
    }
}

impl<W: Write + Send> RowSink for CsvRowSink<W> {
    fn write_header(&self) -> OutputResult<()> {
        let mut state = self.lock()?;
        if state.header_written {
            return Ok(());
        }
        state.writer.write_record(COLUMNS).map_err(|err| self.encode_error(err))?;
        state.header_written = true;
        Ok(())
    }

    fn write(&self, record: &Record) -> OutputResult<()> {
        let row = InventoryRow::from(record);
        let mut state = self.lock()?;
        state.writer.serialize(&row).map_err(|err| self.encode_error(err))
    }

    fn finish(&self) -> OutputResult<()> {
        let mut state = self.lock()?;
        state
            .writer
            .flush()
            .map_err(|source| OutputError::Write { path: self.path.clone(), source })
    }
}

fn poisoned(path: &Path) -> OutputError {
    OutputError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other("a writer panicked while holding the output lock"),
    }
}
