// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tree_inventory_infra::hashing::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};

/// Log verbosity on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tree_inventory")]
#[command(about = "Inventory every file under a directory into a CSV (path, size, mtime, extension, hash)")]
#[command(version)]
pub struct Args {
    /// Directory to inventory (asked for interactively when omitted)
    pub root: Option<PathBuf>,

    /// CSV destination; an existing file is never overwritten, " (n)" is appended instead
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of extraction workers
    /// (0 = auto-detect: available cores minus one, at least 1)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    pub jobs: usize,

    /// Read buffer used while hashing, in bytes
    #[arg(long = "chunk-size", value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE, value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Print a running file count on stderr
    #[arg(long)]
    pub progress: bool,

    /// Log verbosity: error, warn, info, debug, trace
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

fn parse_chunk_size(s: &str) -> Result<usize, String> {
    let size: usize = s.trim().parse().map_err(|_| format!("invalid number: {s}"))?;
    if size == 0 {
        return Err("chunk size must be at least 1 byte".to_string());
    }
    if size > MAX_CHUNK_SIZE {
        return Err(format!("chunk size must not exceed {MAX_CHUNK_SIZE} bytes"));
    }
    Ok(size)
}
