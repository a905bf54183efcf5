//! Single-store adapter: pass-through operations plus the atomic
//! per-partition write transaction the batch layer drives.

use std::fmt;
use std::path::{Path, PathBuf};

use hive_core::{Error, Result};
use redb::{Database, Table, TableDefinition, TableError, TableHandle};

use crate::scan::PartitionScan;

/// Definition for one partition's table: raw bytes to raw bytes, keys in
/// byte order.
pub(crate) fn partition_def(name: &str) -> TableDefinition<'_, &'static [u8], &'static [u8]> {
    TableDefinition::new(name)
}

/// One on-disk store: a single file holding any number of named partitions.
///
/// The engine serializes write transactions internally, so concurrent
/// callers of [`Store::with_partition_write`] queue on commit rather than
/// conflict. Handles are shared as `Arc<Store>`; the store closes when the
/// last handle drops.
pub struct Store {
    db: Database,
    path: PathBuf,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").field("path", &self.path).finish()
    }
}

impl Store {
    /// Open the store at `path`, creating the file if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let db = Database::create(&path).map_err(Error::storage)?;
        tracing::debug!(path = %path.display(), "store opened");
        Ok(Store { db, path })
    }

    /// The file path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retrieve the value stored under `key` in `partition`.
    ///
    /// Returns `None` when the partition or the key does not exist.
    pub fn get(&self, partition: &str, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let txn = self.db.begin_read().map_err(Error::storage)?;
        let table = match txn.open_table(partition_def(partition)) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(Error::storage(e)),
        };
        let value = table
            .get(key)
            .map_err(Error::storage)?
            .map(|guard| guard.value().to_vec());
        Ok(value)
    }

    /// Check whether `key` exists in `partition`.
    pub fn contains(&self, partition: &str, key: &[u8]) -> Result<bool> {
        Ok(self.get(partition, key)?.is_some())
    }

    /// Store `value` under `key` in `partition`, creating the partition if
    /// absent.
    pub fn set(&self, partition: &str, key: &[u8], value: &[u8]) -> Result<()> {
        self.with_partition_write(partition, |tx| tx.put(key, value))
    }

    /// Remove `key` from `partition`.
    ///
    /// Fails with `PartitionNotFound` when the partition does not exist;
    /// removing an absent key from an existing partition is a no-op.
    pub fn delete(&self, partition: &str, key: &[u8]) -> Result<()> {
        let txn = self.db.begin_write().map_err(Error::storage)?;
        let exists = txn
            .list_tables()
            .map_err(Error::storage)?
            .any(|handle| handle.name() == partition);
        if !exists {
            let _ = txn.abort();
            return Err(Error::PartitionNotFound(partition.to_string()));
        }
        {
            let mut table = txn
                .open_table(partition_def(partition))
                .map_err(Error::storage)?;
            table.remove(key).map_err(Error::storage)?;
        }
        txn.commit().map_err(Error::storage)?;
        Ok(())
    }

    /// All key-value pairs of `partition`, in key order.
    ///
    /// A missing partition yields an empty list. Prefer [`Store::scan`] for
    /// large partitions.
    pub fn list(&self, partition: &str) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        self.scan(partition)?.collect()
    }

    /// Lazily iterate over `partition` in key order.
    ///
    /// The scan reads from a snapshot taken when it is created; writes
    /// committed afterwards are not observed. A missing partition yields an
    /// empty scan.
    pub fn scan(&self, partition: &str) -> Result<PartitionScan> {
        let txn = self.db.begin_read().map_err(Error::storage)?;
        match txn.open_table(partition_def(partition)) {
            Ok(table) => Ok(PartitionScan::new(table)),
            Err(TableError::TableDoesNotExist(_)) => Ok(PartitionScan::empty()),
            Err(e) => Err(Error::storage(e)),
        }
    }

    /// Names of all partitions in this store.
    pub fn partitions(&self) -> Result<Vec<String>> {
        let txn = self.db.begin_read().map_err(Error::storage)?;
        let mut names: Vec<String> = txn
            .list_tables()
            .map_err(Error::storage)?
            .map(|handle| handle.name().to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    /// Run `f` inside one atomic write transaction scoped to `partition`.
    ///
    /// The partition is created if absent. The transaction commits when `f`
    /// returns `Ok` and rolls back when it returns `Err`; either way the
    /// error (if any) propagates unchanged. The engine admits one write
    /// transaction at a time, so this call may block behind other writers.
    pub fn with_partition_write<R>(
        &self,
        partition: &str,
        f: impl FnOnce(&mut PartitionTx<'_>) -> Result<R>,
    ) -> Result<R> {
        let txn = self.db.begin_write().map_err(Error::storage)?;
        let result = match txn.open_table(partition_def(partition)) {
            Ok(table) => {
                let mut ptx = PartitionTx { table };
                f(&mut ptx)
                // table drops here, releasing its borrow of txn
            }
            Err(e) => Err(Error::storage(e)),
        };
        match result {
            Ok(value) => {
                txn.commit().map_err(Error::storage)?;
                Ok(value)
            }
            Err(e) => {
                let _ = txn.abort();
                Err(e)
            }
        }
    }
}

/// A write transaction scoped to one partition.
///
/// Handed to the closure of [`Store::with_partition_write`]; mutations are
/// invisible to readers until the transaction commits.
pub struct PartitionTx<'txn> {
    table: Table<'txn, &'static [u8], &'static [u8]>,
}

impl PartitionTx<'_> {
    /// Store `value` under `key` within this transaction.
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.table.insert(key, value).map_err(Error::storage)?;
        Ok(())
    }

    /// Remove `key` within this transaction. No-op if the key is absent.
    pub fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.table.remove(key).map_err(Error::storage)?;
        Ok(())
    }
}
