//! Pending write operations.
//!
//! An [`Operation`] describes one mutation destined for one key in one
//! partition. Operations are plain values: a batch groups them by partition
//! and replays them inside that partition's write transaction.

/// The kind of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Store a key-value pair (overwrites any existing value).
    Set,
    /// Remove a key (no-op if the key is absent).
    Delete,
}

/// One pending mutation targeting one key within one partition.
///
/// Fields are public so callers may build a `Set` before deciding its value;
/// a `Set` still missing its value when the batch executes fails that
/// partition's transaction with `ValueMissing`. A `Delete` ignores any value
/// it carries. Operations are immutable once added to a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Target partition name.
    pub partition: String,
    /// Target key.
    pub key: Vec<u8>,
    /// Value to store. Required by `Set` at execution time, ignored by
    /// `Delete`.
    pub value: Option<Vec<u8>>,
    /// Whether this operation stores or removes the key.
    pub kind: OpKind,
}

impl Operation {
    /// Create a set operation storing `value` under `key`.
    pub fn set(
        partition: impl Into<String>,
        key: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        Operation {
            partition: partition.into(),
            key: key.into(),
            value: Some(value.into()),
            kind: OpKind::Set,
        }
    }

    /// Create a delete operation removing `key`.
    pub fn delete(partition: impl Into<String>, key: impl Into<Vec<u8>>) -> Self {
        Operation {
            partition: partition.into(),
            key: key.into(),
            value: None,
            kind: OpKind::Delete,
        }
    }
}
