//! JSON file key-value store
//!
//! Persists the store as a single JSON object of string keys to string
//! values. Writers take an exclusive flock on a sidecar lock file and
//! replace the store atomically (temp file + rename), so a crashed
//! write can never leave a half-written blob behind.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use fs2::FileExt;

use crate::domain::result::{Error, Result};
use crate::ports::KeyValueStore;

/// Key-value store backed by a JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock_path = path.with_extension("lock");
        Self { path, lock_path }
    }

    fn with_lock<T>(&self, op: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock_file = File::create(&self.lock_path)?;
        lock_file
            .lock_exclusive()
            .map_err(|e| Error::store(format!("failed to lock store: {}", e)))?;
        let result = op();
        let _ = FileExt::unlock(&lock_file);
        result
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| Error::store(format!("corrupt store at {:?}: {}", self.path, e)))
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| Error::store("store path has no parent directory"))?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(serde_json::to_string_pretty(map)?.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| Error::store(format!("failed to replace store: {}", e)))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_lock(|| Ok(self.read_map()?.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.with_lock(|| {
            let mut map = self.read_map()?;
            map.insert(key.to_string(), value.to_string());
            self.write_map(&map)
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.with_lock(|| {
            let mut map = self.read_map()?;
            if map.remove(key).is_some() {
                self.write_map(&map)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("store.json"))
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("session", "{\"email\":\"a@x.com\"}").unwrap();
        assert_eq!(
            store.get("session").unwrap().as_deref(),
            Some("{\"email\":\"a@x.com\"}")
        );

        store.remove("session").unwrap();
        assert_eq!(store.get("session").unwrap(), None);
        // removing again is a no-op
        store.remove("session").unwrap();
    }

    #[test]
    fn test_values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set("accounts", "{}").unwrap();
        assert_eq!(store_in(&dir).get("accounts").unwrap().as_deref(), Some("{}"));
    }
}
