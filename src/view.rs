//! Partition-scoped convenience facade.

use std::sync::Arc;

use hive_batch::Batch;
use hive_core::{Operation, Result};
use hive_store::{PartitionScan, Store};

/// A view of one store fixed to one partition, so callers omit the
/// partition name per call.
///
/// Everything delegates to the underlying [`Store`]; [`PartitionView::batch`]
/// hands out a [`Batch`] bound to the same store (the batch itself is not
/// partition-scoped — build its operations with [`PartitionView::set_op`]
/// and [`PartitionView::delete_op`], or name partitions explicitly).
#[derive(Debug, Clone)]
pub struct PartitionView {
    store: Arc<Store>,
    partition: String,
}

impl PartitionView {
    /// Create a view of `partition` within `store`.
    pub fn new(store: Arc<Store>, partition: impl Into<String>) -> Self {
        PartitionView {
            store,
            partition: partition.into(),
        }
    }

    /// The partition this view is fixed to.
    pub fn partition(&self) -> &str {
        &self.partition
    }

    /// Retrieve the value stored under `key`.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        self.store.get(&self.partition, key)
    }

    /// Store `value` under `key`.
    pub fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.store.set(&self.partition, key, value)
    }

    /// Remove `key` from the partition.
    pub fn delete(&self, key: &[u8]) -> Result<()> {
        self.store.delete(&self.partition, key)
    }

    /// Check whether `key` exists.
    pub fn contains(&self, key: &[u8]) -> Result<bool> {
        self.store.contains(&self.partition, key)
    }

    /// All key-value pairs of the partition, in key order.
    pub fn list(&self) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        self.store.list(&self.partition)
    }

    /// Lazily iterate over the partition in key order.
    pub fn scan(&self) -> Result<PartitionScan> {
        self.store.scan(&self.partition)
    }

    /// Create a batch bound to this view's store.
    pub fn batch(&self) -> Batch {
        Batch::new(Arc::clone(&self.store))
    }

    /// Build a set operation targeting this view's partition.
    pub fn set_op(&self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Operation {
        Operation::set(self.partition.clone(), key, value)
    }

    /// Build a delete operation targeting this view's partition.
    pub fn delete_op(&self, key: impl Into<Vec<u8>>) -> Operation {
        Operation::delete(self.partition.clone(), key)
    }
}
