//! File-backed state store.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use super::store_traits::StateStoreTrait;
use crate::errors::{Result, StoreError};

/// State store persisting all items as one JSON object in a single file.
///
/// Writes go through a temporary sibling file followed by a rename, so
/// a crash mid-write leaves the previous state intact. A missing file
/// reads as an empty store. Mutations serialize on an internal lock so
/// two concurrent writers cannot lose each other's update.
pub struct FileStateStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents =
            fs::read_to_string(&self.path).map_err(|e| StoreError::Read(e.to_string()))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let map = serde_json::from_str(&contents).map_err(|e| {
            StoreError::Corrupt(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(map)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
            }
        }

        let contents =
            serde_json::to_string_pretty(map).map_err(|e| StoreError::Write(e.to_string()))?;

        let mut tmp_path = self.path.clone();
        tmp_path.set_extension("tmp");
        fs::write(&tmp_path, contents).map_err(|e| StoreError::Write(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Write(e.to_string()))?;

        debug!("Persisted {} state item(s) to {}", map.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl StateStoreTrait for FileStateStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("state.json"));

        assert_eq!(store.get_item("missing").await.unwrap(), None);

        store.set_item("a", "1").await.unwrap();
        store.set_item("b", "two").await.unwrap();
        assert_eq!(store.get_item("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(store.get_item("b").await.unwrap().as_deref(), Some("two"));

        store.set_item("a", "replaced").await.unwrap();
        assert_eq!(
            store.get_item("a").await.unwrap().as_deref(),
            Some("replaced")
        );

        store.remove_item("a").await.unwrap();
        assert_eq!(store.get_item("a").await.unwrap(), None);
        // Removing again is fine.
        store.remove_item("a").await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("nested").join("state.json"));
        assert_eq!(store.get_item("anything").await.unwrap(), None);

        // First write creates the parent directory.
        store.set_item("k", "v").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStateStore::new(&path);
        let err = store.get_item("k").await.unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_state_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        {
            let store = FileStateStore::new(&path);
            store.set_item("k", "v").await.unwrap();
        }

        let reopened = FileStateStore::new(&path);
        assert_eq!(reopened.get_item("k").await.unwrap().as_deref(), Some("v"));
    }
}
