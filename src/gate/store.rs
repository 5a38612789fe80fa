//! Persisted key-value substrate
//!
//! The daily gate keeps its facts as strings under fixed keys. Two stores are
//! provided: an in-memory map and a JSON file on disk.

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

/// Error type for store access
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage data is not valid JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// String key-value storage scoped to the local device
///
/// Methods take `&self`; implementations use interior mutability so a store
/// can be shared by reference between the gate and whoever drives a session.
pub trait KeyValueStore {
    /// Load a value by key, `None` if absent
    ///
    /// # Errors
    /// Returns `StoreError` if the underlying storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Save a value under the given key, replacing any previous value
    ///
    /// # Errors
    /// Returns `StoreError` if the value cannot be persisted.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value by key; removing a missing key is not an error
    ///
    /// # Errors
    /// Returns `StoreError` if the removal cannot be persisted.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Volatile store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self.values.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.values.write().map_err(|_| StoreError::Poisoned)?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut guard = self.values.write().map_err(|_| StoreError::Poisoned)?;
        guard.remove(key);
        Ok(())
    }
}

/// JSON-file store
///
/// All values live in one flat JSON object. The file is read once when the
/// store is opened and rewritten after every change. Storage location:
/// - Linux: ~/.config/goobie/store.json
/// - macOS: ~/Library/Application Support/io.goobie.goobie/store.json
/// - Windows: C:\Users\<User>\AppData\Roaming\goobie\goobie\config\store.json
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing file starts empty. An unreadable or corrupt file also starts
    /// empty (with a warning) so a damaged store re-prompts instead of
    /// blocking play; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let cache = if path.exists() {
            match Self::read_file(&path) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("Failed to load store {}: {}", path.display(), e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("File store opened at: {:?}", path);

        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    /// Platform config location for the store file
    ///
    /// Falls back to the current directory if no home directory is known.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("io", "goobie", "goobie").map_or_else(
            || PathBuf::from("goobie_store.json"),
            |dirs| dirs.config_dir().join("store.json"),
        )
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> Result<HashMap<String, String>, StoreError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write `map` to disk
    fn persist(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }

    /// Apply `change` to a copy of the cache, persist it, then swap it in
    ///
    /// The cache is left untouched when the write fails.
    fn update(
        &self,
        change: impl FnOnce(&mut HashMap<String, String>) -> bool,
    ) -> Result<(), StoreError> {
        let mut guard = self.cache.write().map_err(|_| StoreError::Poisoned)?;
        let mut next = guard.clone();
        if !change(&mut next) {
            return Ok(());
        }
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self.cache.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.update(|map| map.remove(key).is_some())
    }
}
