//! Lazy iteration over one partition.

use std::ops::Bound;

use hive_core::{Error, Result};
use redb::ReadOnlyTable;

/// A lazy, finite iterator over one partition's key-value pairs in key
/// order.
///
/// The scan owns a read snapshot of the partition and advances with a
/// cursor: each step seeks past the last yielded key, so the sequence can
/// be resumed no matter how the caller interleaves other work. Once an
/// engine error is yielded the scan is exhausted.
pub struct PartitionScan {
    table: Option<ReadOnlyTable<&'static [u8], &'static [u8]>>,
    cursor: Option<Vec<u8>>,
}

impl PartitionScan {
    pub(crate) fn new(table: ReadOnlyTable<&'static [u8], &'static [u8]>) -> Self {
        PartitionScan {
            table: Some(table),
            cursor: None,
        }
    }

    /// A scan over a partition that does not exist: yields nothing.
    pub(crate) fn empty() -> Self {
        PartitionScan {
            table: None,
            cursor: None,
        }
    }
}

impl Iterator for PartitionScan {
    type Item = Result<(Vec<u8>, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table.as_ref()?;
        let bounds: (Bound<&[u8]>, Bound<&[u8]>) = match self.cursor.as_deref() {
            Some(last) => (Bound::Excluded(last), Bound::Unbounded),
            None => (Bound::Unbounded, Bound::Unbounded),
        };
        let mut range = match table.range::<&[u8]>(bounds) {
            Ok(range) => range,
            Err(e) => {
                self.table = None;
                return Some(Err(Error::storage(e)));
            }
        };
        match range.next() {
            Some(Ok((key, value))) => {
                let key = key.value().to_vec();
                let value = value.value().to_vec();
                self.cursor = Some(key.clone());
                Some(Ok((key, value)))
            }
            Some(Err(e)) => {
                self.table = None;
                Some(Err(Error::storage(e)))
            }
            None => {
                self.table = None;
                None
            }
        }
    }
}
