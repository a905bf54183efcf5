//! Capacity: `add` counts total queued operations across all partitions.

use crate::common::*;
use hivedb::prelude::*;
use std::sync::Arc;

#[test]
fn add_beyond_limit_is_rejected() {
    let ts = TestStore::new();
    let batch = Batch::with_limits(Arc::clone(&ts.store), 3, 10);

    batch.add(Operation::set("a", "k1", "v")).unwrap();
    batch.add(Operation::set("b", "k2", "v")).unwrap();
    batch.add(Operation::set("c", "k3", "v")).unwrap();

    let err = batch.add(Operation::set("d", "k4", "v")).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { limit: 3 }), "got {err:?}");
    assert!(err.is_capacity());

    // The rejected operation left the queue untouched.
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.partition_count(), 3);
}

#[test]
fn limit_counts_operations_not_partitions() {
    let ts = TestStore::new();
    let batch = Batch::with_limits(Arc::clone(&ts.store), 3, 10);

    // Three operations in one partition exhaust the limit.
    batch.add(Operation::set("same", "k1", "v")).unwrap();
    batch.add(Operation::set("same", "k2", "v")).unwrap();
    batch.add(Operation::set("same", "k3", "v")).unwrap();

    let err = batch.add(Operation::set("other", "k", "v")).unwrap_err();
    assert!(err.is_capacity());
    assert_eq!(batch.partition_count(), 1);
}

#[test]
fn full_batch_still_executes() {
    let ts = TestStore::new();
    let batch = Batch::with_limits(Arc::clone(&ts.store), 2, 10);

    batch.add(Operation::set("a", "k", "v")).unwrap();
    batch.add(Operation::set("b", "k", "v")).unwrap();
    batch.add(Operation::set("c", "k", "v")).unwrap_err();

    batch.execute().unwrap();
    assert_eq!(ts.get("a", b"k").as_deref(), Some(b"v".as_slice()));
    assert_eq!(ts.get("b", b"k").as_deref(), Some(b"v".as_slice()));
    assert_eq!(ts.get("c", b"k"), None);
}

#[test]
fn clear_frees_capacity() {
    let ts = TestStore::new();
    let batch = Batch::with_limits(Arc::clone(&ts.store), 1, 10);

    batch.add(Operation::set("a", "k", "v")).unwrap();
    batch.add(Operation::set("a", "k2", "v")).unwrap_err();

    batch.clear();
    batch.add(Operation::set("a", "k2", "v")).unwrap();
    assert_eq!(batch.len(), 1);
}
