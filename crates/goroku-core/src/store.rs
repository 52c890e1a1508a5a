//! Persisted client state as a narrow key-value capability.
//!
//! The engine only ever needs synchronous string get/set under a fixed key,
//! so that is the whole interface. The production store writes one JSON file
//! per key under the platform data directory; tests use [`MemoryStore`].

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::config::AppConfig;

/// Synchronous string-keyed storage for client state.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Write errors are logged, not propagated; persisted client state is a
    /// convenience, not critical path.
    fn set(&self, key: &str, value: &str);
}

/// One JSON file per key under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the platform data directory.
    pub fn open_default() -> Self {
        Self::new(AppConfig::data_dir())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.root) {
            warn!(key, error = %e, "failed to create store directory");
            return;
        }
        if let Err(e) = std::fs::write(self.path_for(key), value) {
            warn!(key, error = %e, "failed to persist store entry");
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}
