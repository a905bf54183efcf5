//! Convenient imports for common usage.
//!
//! ```ignore
//! use hivedb::prelude::*;
//! ```

pub use crate::{Batch, Error, OpKind, Operation, PartitionView, Result, Store, StoreRegistry};
