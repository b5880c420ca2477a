//! GameSpace Core: game library scanning, reporting, and cleanup.
//!
//! This crate contains all business logic with zero CLI dependencies.
//! The `gamespace` binary is a thin shell around it.
//!
//! # Modules
//!
//! - [`model`]: Game roots, discovered entries, and size formatting.
//! - [`config`]: Startup configuration for scans and cleanup.
//! - [`scanner`]: Concurrent enumeration and sizing of game directories.
//! - [`report`]: Sorted, column-aligned text report.
//! - [`cleanup`]: Guarded removal of a single orphaned game folder.
//! - [`platform`]: Volume capacity queries per operating system.
//! - [`error`]: Error types for each of the above.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod report;
pub mod scanner;
