//! # hivedb
//!
//! Batched-write coordination over a single-file, partition-organized,
//! ordered key-value store.
//!
//! A [`Store`] wraps one database file holding named partitions. A
//! [`Batch`] accepts any number of set/delete [`Operation`]s destined for
//! different partitions, groups them, and commits each partition's
//! operations as one atomic transaction — sequentially or with bounded
//! concurrency across partitions.
//!
//! ## Quick start
//!
//! ```ignore
//! use hivedb::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(Store::open("./data.hive")?);
//!
//! let batch = Batch::new(Arc::clone(&store));
//! batch.add(Operation::set("users", "u1", "alice"))?;
//! batch.add(Operation::set("users", "u2", "bob"))?;
//! batch.add(Operation::delete("sessions", "s9"))?;
//! batch.execute()?;
//!
//! assert_eq!(store.get("users", b"u1")?.as_deref(), Some(b"alice".as_slice()));
//! ```
//!
//! Atomicity is per partition: a failure in one partition's transaction
//! never rolls back another partition. The concurrent strategy
//! ([`Batch::execute_concurrent`]) additionally lets unaffected partitions
//! commit even when a sibling fails.

#![warn(missing_docs)]

mod view;

pub mod prelude;

// Re-export the core surface
pub use hive_batch::Batch;
pub use hive_core::{
    Error, OpKind, Operation, Result, MAX_BATCH_OPERATIONS, MAX_CONCURRENT_PARTITION_TXNS,
};
pub use hive_store::{PartitionScan, PartitionTx, Store, StoreRegistry};
pub use view::PartitionView;
