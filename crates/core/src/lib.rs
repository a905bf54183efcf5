//! Shared types for the hive write-batching layer.
//!
//! This crate holds the values the other layers exchange:
//! - [`Operation`]: one pending mutation (set or delete) for one key in one
//!   partition
//! - [`Error`] / [`Result`]: the canonical error surface
//! - default capacity limits for batches

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod operation;

pub use error::{Error, Result};
pub use operation::{OpKind, Operation};

/// Maximum operations queued in one batch before `add` rejects.
///
/// Keeps a single batch comfortably under the write volume where one
/// engine transaction stops being cheap.
pub const MAX_BATCH_OPERATIONS: usize = 5_000;

/// Default cap on partition transactions in flight during concurrent
/// execution.
pub const MAX_CONCURRENT_PARTITION_TXNS: usize = 10;
