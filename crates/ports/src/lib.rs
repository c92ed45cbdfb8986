//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`hashing`]: streaming content digests
//! - [`filesystem`]: per-file metadata extraction
//! - [`sink`]: row-oriented output destinations
//! - [`progress`]: progress reporting for long-running scans
//!
//! These ports keep the use cases independent of concrete adapters.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod hashing;
pub mod progress;
pub mod sink;
