//! Batched-write coordination over a partitioned store.
//!
//! A [`Batch`] accumulates set/delete operations destined for different
//! partitions of one store, groups them by partition, and commits each
//! partition's operations as one atomic transaction — sequentially with
//! fail-fast, or concurrently behind a bounded admission gate.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod gate;

pub mod batch;

pub use batch::Batch;
