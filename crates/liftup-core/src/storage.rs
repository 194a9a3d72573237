//! Key-value persistence backends.
//!
//! The store treats storage as a string-keyed, string-valued record
//! that may fail on either side. `FileStorage` keeps one JSON file per
//! key under the platform data dir (`~/.local/share/liftup` or
//! equivalent); `MemoryStorage` backs tests and doubles as a fallback
//! when no data dir can be resolved, keeping the app fully
//! interactive without persistence.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::LiftupError;

/// String-keyed persistence used by the settings store.
pub trait KeyValueStorage: Send {
    /// Read the value stored under `key`, `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, LiftupError>;

    /// Write `value` under `key`, replacing any prior value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), LiftupError>;
}

/// File-backed storage: one file per key inside a root directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the platform data dir.
    ///
    /// Returns `None` when no home directory can be resolved.
    pub fn open() -> Option<Self> {
        directories::ProjectDirs::from("", "", "liftup")
            .map(|dirs| Self::at(dirs.data_dir().to_path_buf()))
    }

    /// Storage rooted at an explicit directory.
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Map a key like `"@app_state"` to `<dir>/app_state.json`.
    fn path_for(&self, key: &str) -> PathBuf {
        let stem: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        self.dir.join(format!("{stem}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, LiftupError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| LiftupError::StorageRead(format!("{}: {e}", path.display())))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), LiftupError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LiftupError::StorageWrite(format!("{}: {e}", parent.display())))?;
        }
        std::fs::write(&path, value)
            .map_err(|e| LiftupError::StorageWrite(format!("{}: {e}", path.display())))
    }
}

/// In-memory storage. Clones share the same map, so a test can hand
/// one clone to a store and inspect the other. Failure injection
/// covers the two error paths the store has to survive.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose reads always fail.
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// A backend whose writes always fail.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Direct lookup, bypassing the failure flags.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, LiftupError> {
        if self.fail_reads {
            return Err(LiftupError::StorageRead("injected failure".into()));
        }
        let values = self
            .values
            .lock()
            .map_err(|_| LiftupError::StorageRead("poisoned lock".into()))?;
        Ok(values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), LiftupError> {
        if self.fail_writes {
            return Err(LiftupError::StorageWrite("injected failure".into()));
        }
        let mut values = self
            .values
            .lock()
            .map_err(|_| LiftupError::StorageWrite("poisoned lock".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::at(dir.path().to_path_buf());

        assert!(storage.read("@app_state").unwrap().is_none());

        storage.write("@app_state", r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(
            storage.read("@app_state").unwrap().as_deref(),
            Some(r#"{"theme":"dark"}"#)
        );
        // The key's punctuation never reaches the filesystem.
        assert!(dir.path().join("app_state.json").exists());
    }

    #[test]
    fn file_storage_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::at(dir.path().join("nested").join("deeper"));
        storage.write("@app_state", "{}").unwrap();
        assert_eq!(storage.read("@app_state").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn memory_storage_clones_share_values() {
        let mut storage = MemoryStorage::new();
        let observer = storage.clone();
        storage.write("@app_state", "saved").unwrap();
        assert_eq!(observer.get("@app_state").as_deref(), Some("saved"));
    }

    #[test]
    fn injected_failures_surface_as_errors() {
        let failing = MemoryStorage::failing_reads();
        assert!(matches!(
            failing.read("@app_state"),
            Err(LiftupError::StorageRead(_))
        ));

        let mut failing = MemoryStorage::failing_writes();
        assert!(matches!(
            failing.write("@app_state", "x"),
            Err(LiftupError::StorageWrite(_))
        ));
    }
}
