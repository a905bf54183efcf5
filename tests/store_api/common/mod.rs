//! Shared test harness: one temp-dir-backed store per test.

use std::path::PathBuf;
use std::sync::Arc;

use hivedb::prelude::*;
use tempfile::TempDir;

pub struct TestStore {
    pub dir: TempDir,
    pub store: Arc<Store>,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let store = Store::open(dir.path().join("store.hive")).expect("open store");
        TestStore {
            dir,
            store: Arc::new(store),
        }
    }

    pub fn side_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
