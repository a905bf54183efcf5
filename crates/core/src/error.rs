//! Canonical error types for hive operations.
//!
//! Storage-engine errors are converted to strings at the store boundary so
//! this crate stays free of engine dependencies.

use thiserror::Error;

/// All hive errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A batch rejected an `add` because its operation queue is full.
    ///
    /// Recoverable: start a new batch or construct one with a larger limit.
    #[error("batch capacity exceeded: limit is {limit} operations")]
    CapacityExceeded {
        /// The batch's configured operation limit.
        limit: usize,
    },

    /// A set operation reached execution without a value.
    ///
    /// Value presence is checked when the operation replays inside its
    /// partition's transaction, not at construction. Aborts only that
    /// partition's transaction.
    #[error("set operation missing value for key {} in partition {}", String::from_utf8_lossy(.key), .partition)]
    ValueMissing {
        /// Partition the operation targeted.
        partition: String,
        /// Key the operation targeted.
        key: Vec<u8>,
    },

    /// A partition's write transaction failed and was rolled back.
    #[error("transaction failed for partition {partition}")]
    PartitionTransaction {
        /// Partition whose transaction failed.
        partition: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// The named partition does not exist in the store.
    #[error("partition not found: {0}")]
    PartitionNotFound(String),

    /// The registry has no store under the given name.
    #[error("store not found: {0}")]
    StoreNotFound(String),

    /// Storage engine failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hive operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a storage-engine error, keeping its message only.
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Error::Storage(err.to_string())
    }

    /// Check whether this error is recoverable by the caller retrying with
    /// adjusted input (a fresh or larger batch).
    pub fn is_capacity(&self) -> bool {
        matches!(self, Error::CapacityExceeded { .. })
    }

    /// Check whether this is a not-found error (partition or store).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::PartitionNotFound(_) | Error::StoreNotFound(_))
    }

    /// Check whether this error aborted a partition transaction.
    pub fn is_transaction(&self) -> bool {
        matches!(self, Error::PartitionTransaction { .. })
    }
}
