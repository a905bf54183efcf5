//! Multi-store registry.
//!
//! Maps store names to open [`Store`] handles so an embedding application
//! can manage several database files through one object.

use std::path::Path;
use std::sync::Arc;

use hive_core::{Error, Result};
use parking_lot::RwLock;

use crate::store::Store;

/// A name-to-store map with lifecycle methods.
///
/// Lookups take a read lock; open and close take a write lock. Handles are
/// `Arc<Store>`, so closing a name here only drops the registry's handle —
/// a store stays open until every outstanding handle is gone.
#[derive(Debug, Default)]
pub struct StoreRegistry {
    stores: RwLock<std::collections::HashMap<String, Arc<Store>>>,
}

impl StoreRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the store at `path` and register it under `name`.
    ///
    /// An existing store under the same name is replaced; the replaced
    /// handle is dropped, closing that store once no other handles remain.
    pub fn open(&self, name: impl Into<String>, path: impl AsRef<Path>) -> Result<Arc<Store>> {
        let name = name.into();
        let store = Arc::new(Store::open(path)?);
        let mut stores = self.stores.write();
        if stores.insert(name.clone(), Arc::clone(&store)).is_some() {
            tracing::debug!(name, "replaced existing store");
        }
        Ok(store)
    }

    /// Look up the store registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<Store>> {
        self.stores.read().get(name).cloned()
    }

    /// Names of all registered stores, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.stores.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Close the store registered under `name`.
    ///
    /// Fails with `StoreNotFound` when no store is registered under that
    /// name.
    pub fn close(&self, name: &str) -> Result<()> {
        let mut stores = self.stores.write();
        match stores.remove(name) {
            Some(_) => Ok(()),
            None => Err(Error::StoreNotFound(name.to_string())),
        }
    }

    /// Close every registered store.
    pub fn close_all(&self) {
        self.stores.write().clear();
    }

    /// Number of registered stores.
    pub fn len(&self) -> usize {
        self.stores.read().len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.stores.read().is_empty()
    }
}
