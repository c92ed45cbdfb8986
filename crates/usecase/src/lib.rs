//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`worker_pool`]: bounded pool running metadata extraction in parallel
//! - [`orchestrator`]: the scan use case wiring discovery, extraction and output
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on the shared kernel and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod worker_pool;

pub use dto::{PoolStats, ScanSummary};
pub use orchestrator::ScanInventory;
pub use worker_pool::WorkerPool;
