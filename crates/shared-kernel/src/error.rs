// crates/shared-kernel/src/error.rs
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every variant is fatal to the run. Recoverable conditions met during a scan
/// are modelled separately by [`ScanIssue`].
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<InventoryError>,
    },

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, InventoryError>;

/// Problems with the scan root, detected before traversal starts.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no root directory was given")]
    MissingRoot,

    #[error("root '{path}' does not exist")]
    RootNotFound { path: PathBuf },

    #[error("root '{path}' is not a directory")]
    RootNotDirectory { path: PathBuf },

    #[error("root '{path}' cannot be inspected: {source}")]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Problems with the destination file. A partially written destination is unrecoverable.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is locked by another writer: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode row for '{path}': {details}")]
    Encode { path: PathBuf, details: String },

    #[error("no unused output name derived from '{path}'")]
    NoFreeName { path: PathBuf },
}

pub type OutputResult<T> = std::result::Result<T, OutputError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Worker spawn failed: {details}")]
    ThreadSpawn { details: String },

    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("I/O failure: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Recoverable conditions met while scanning a live filesystem.
///
/// These are logged and counted; none of them aborts the run.
#[derive(Debug, Error)]
pub enum ScanIssue {
    #[error("skipping unreadable directory '{path}': {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("skipping '{path}', it vanished before it could be inspected: {source}")]
    FileVanished {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content of '{path}' is unreadable, hash left empty: {source}")]
    ContentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanIssue {
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryUnreadable { path, .. }
            | Self::FileVanished { path, .. }
            | Self::ContentUnreadable { path, .. } => path,
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<InventoryError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| InventoryError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| InventoryError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
