//! Store adapter over the `redb` engine.
//!
//! One [`Store`] wraps one single-file database organized into named
//! partitions (engine tables) with ordered keys. This crate implements:
//! - pass-through operations: get, set, delete, list, contains, partitions
//! - [`PartitionScan`]: a lazy iterator over one partition's pairs
//! - [`Store::with_partition_write`]: the atomic per-partition write
//!   transaction surface the batch layer builds on
//! - [`StoreRegistry`]: a name-to-store map with lifecycle methods

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod registry;
pub mod scan;
pub mod store;

pub use registry::StoreRegistry;
pub use scan::PartitionScan;
pub use store::{PartitionTx, Store};
