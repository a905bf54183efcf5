//! Operation accumulation and partition-atomic execution.

use std::cmp;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use hive_core::{Error, OpKind, Operation, Result};
use hive_core::{MAX_BATCH_OPERATIONS, MAX_CONCURRENT_PARTITION_TXNS};
use hive_store::Store;
use parking_lot::Mutex;

use crate::gate::Gate;

/// Operation queue and store handle, guarded together by the batch's one
/// exclusive lock: `add` and both execute strategies never overlap.
struct Inner {
    /// partition -> operations, insertion order preserved per partition.
    ops: BTreeMap<String, Vec<Operation>>,
    /// Total queued operations across all partitions.
    total: usize,
    store: Arc<Store>,
}

/// A thread-safe accumulator of write operations with grouped,
/// partition-atomic execution.
///
/// Operations are grouped by target partition. Execution opens one atomic
/// write transaction per partition and replays that partition's operations
/// in the order they were added; atomicity is per partition, never across
/// partitions. A batch is meant to be built, executed once, and discarded,
/// though the queue survives execution and the batch may be reused.
///
/// The batch holds a non-owning handle to its target store and never
/// closes it.
pub struct Batch {
    inner: Mutex<Inner>,
    max_operations: usize,
    max_concurrent: usize,
}

impl Batch {
    /// Create an empty batch bound to `store`, with the default limits
    /// ([`MAX_BATCH_OPERATIONS`], [`MAX_CONCURRENT_PARTITION_TXNS`]).
    pub fn new(store: Arc<Store>) -> Self {
        Self::with_limits(store, MAX_BATCH_OPERATIONS, MAX_CONCURRENT_PARTITION_TXNS)
    }

    /// Create an empty batch with explicit limits.
    ///
    /// `max_operations` caps the total queued operations across all
    /// partitions; `max_concurrent` caps partition transactions in flight
    /// during [`Batch::execute_concurrent`].
    pub fn with_limits(store: Arc<Store>, max_operations: usize, max_concurrent: usize) -> Self {
        Batch {
            inner: Mutex::new(Inner {
                ops: BTreeMap::new(),
                total: 0,
                store,
            }),
            max_operations,
            max_concurrent: cmp::max(max_concurrent, 1),
        }
    }

    /// Queue one operation, appending it to its partition's sequence.
    ///
    /// Fails with `CapacityExceeded` once the total queued operation count
    /// has reached the batch's limit; the rejected operation is not added.
    /// Safe to call from multiple producer threads.
    pub fn add(&self, op: Operation) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.total >= self.max_operations {
            return Err(Error::CapacityExceeded {
                limit: self.max_operations,
            });
        }
        inner.ops.entry(op.partition.clone()).or_default().push(op);
        inner.total += 1;
        Ok(())
    }

    /// Replace the target store. Queued operations are kept and will
    /// execute against the new store.
    pub fn set_store(&self, store: Arc<Store>) {
        self.inner.lock().store = store;
    }

    /// Total queued operations across all partitions.
    pub fn len(&self) -> usize {
        self.inner.lock().total
    }

    /// Check whether the batch has no queued operations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of partitions with queued operations.
    pub fn partition_count(&self) -> usize {
        self.inner.lock().ops.len()
    }

    /// Drop all queued operations, readying the batch for reuse.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.ops.clear();
        inner.total = 0;
    }

    /// Execute the batch sequentially: one atomic write transaction per
    /// partition, in the grouping map's order.
    ///
    /// Stops at the first failing partition and returns its error;
    /// partitions committed before it stay committed, partitions after it
    /// are left untouched.
    pub fn execute(&self) -> Result<()> {
        let inner = self.inner.lock();
        tracing::debug!(
            partitions = inner.ops.len(),
            operations = inner.total,
            "executing batch sequentially"
        );
        for (partition, ops) in &inner.ops {
            commit_partition(&inner.store, partition, ops)?;
        }
        Ok(())
    }

    /// Execute the batch concurrently: one task per partition, each with
    /// its own atomic write transaction, at most
    /// `min(max_concurrent, partition_count)` in flight at once.
    ///
    /// Every task is launched before any result is awaited, and the call
    /// blocks until all have finished. Unlike [`Batch::execute`], a
    /// failing partition never prevents the others from committing: the
    /// first-observed error is returned after completion, and any further
    /// errors are logged.
    pub fn execute_concurrent(&self) -> Result<()> {
        let inner = self.inner.lock();
        if inner.ops.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            partitions = inner.ops.len(),
            operations = inner.total,
            cap = self.max_concurrent,
            "executing batch concurrently"
        );

        let gate = Gate::new(cmp::min(self.max_concurrent, inner.ops.len()));
        let first_err: Mutex<Option<Error>> = Mutex::new(None);
        let store = Arc::clone(&inner.store);

        thread::scope(|s| {
            let gate = &gate;
            let first_err = &first_err;
            let store = &store;
            for (partition, ops) in &inner.ops {
                s.spawn(move || {
                    let _permit = gate.acquire();
                    if let Err(e) = commit_partition(store, partition, ops) {
                        let mut slot = first_err.lock();
                        if slot.is_none() {
                            *slot = Some(e);
                        } else {
                            tracing::warn!(
                                partition = %partition,
                                error = %e,
                                "suppressing secondary batch error"
                            );
                        }
                    }
                });
            }
        });

        match first_err.into_inner() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Replay one partition's operations, in insertion order, inside one
/// atomic write transaction.
///
/// Every operation applies: each set overwrites, each delete removes,
/// independent of its neighbors. Any failure rolls the whole transaction
/// back; store-level failures are wrapped as `PartitionTransaction`.
fn commit_partition(store: &Store, partition: &str, ops: &[Operation]) -> Result<()> {
    store
        .with_partition_write(partition, |tx| {
            for op in ops {
                match op.kind {
                    OpKind::Set => {
                        let value = op.value.as_deref().ok_or_else(|| Error::ValueMissing {
                            partition: partition.to_string(),
                            key: op.key.clone(),
                        })?;
                        tx.put(&op.key, value)?;
                    }
                    OpKind::Delete => tx.delete(&op.key)?,
                }
            }
            Ok(())
        })
        .map_err(|e| match e {
            e @ Error::ValueMissing { .. } => e,
            other => Error::PartitionTransaction {
                partition: partition.to_string(),
                source: Box::new(other),
            },
        })
}
