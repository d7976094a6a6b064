//! File-backed key/value store and the local snapshot backend built on it.
//!
//! Each key is one JSON document at `<dir>/<key>.json`. Writes go to a
//! sibling temp file first and are renamed into place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use curio_core::entities::WorkspaceSnapshot;
use curio_core::enums::StorageProvider;
use tracing::{debug, warn};

use crate::backend::SnapshotBackend;
use crate::error::StoreError;

/// Key holding the snapshot list, newest first.
pub const SNAPSHOTS_KEY: &str = "curio.workspace.snapshots.v1";

/// Key/value directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Raw value under `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for any read failure other than a missing file.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the value under `key`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be written.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        debug!(path = %path.display(), "local store write");
        Ok(())
    }
}

/// Snapshot list kept in a [`LocalStore`], capped at `retention` entries.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    store: LocalStore,
    retention: usize,
}

impl LocalBackend {
    #[must_use]
    pub const fn new(store: LocalStore, retention: usize) -> Self {
        Self { store, retention }
    }

    #[must_use]
    pub const fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Every stored snapshot. A corrupt list reads as empty.
    async fn read_all(&self) -> Result<Vec<WorkspaceSnapshot>, StoreError> {
        let Some(raw) = self.store.get(SNAPSHOTS_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(snapshots) => Ok(snapshots),
            Err(error) => {
                warn!(%error, "local snapshot list is unreadable; treating it as empty");
                Ok(Vec::new())
            }
        }
    }
}

impl SnapshotBackend for LocalBackend {
    fn provider(&self) -> StorageProvider {
        StorageProvider::Local
    }

    async fn save(&self, snapshot: &WorkspaceSnapshot) -> Result<(), StoreError> {
        let mut snapshots = self.read_all().await?;
        snapshots.insert(0, snapshot.clone());
        snapshots.truncate(self.retention);
        let raw = serde_json::to_string(&snapshots)?;
        self.store.set(SNAPSHOTS_KEY, &raw).await
    }

    async fn list(&self, limit: usize) -> Result<Vec<WorkspaceSnapshot>, StoreError> {
        let mut snapshots = self.read_all().await?;
        snapshots.truncate(limit);
        Ok(snapshots)
    }
}

#[cfg(test)]
mod tests {
    use curio_core::workspace::WorkspaceState;
    use tempfile::TempDir;

    use super::*;

    fn snapshot(niche: &str) -> WorkspaceSnapshot {
        WorkspaceSnapshot::capture(WorkspaceState::new("UC-test", niche))
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path());
        assert!(store.get("nothing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_creates_directory() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path().join("nested/store"));
        store.set("k", "\"v\"").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("\"v\""));
        assert!(store.path_for("k").ends_with("nested/store/k.json"));
    }

    #[tokio::test]
    async fn newest_first_and_capped() {
        let temp = TempDir::new().unwrap();
        let backend = LocalBackend::new(LocalStore::new(temp.path()), 3);
        for niche in ["a", "b", "c", "d"] {
            backend.save(&snapshot(niche)).await.unwrap();
        }

        let listed = backend.list(10).await.unwrap();
        let niches: Vec<&str> = listed.iter().map(|s| s.niche.as_str()).collect();
        assert_eq!(niches, vec!["d", "c", "b"]);

        assert_eq!(backend.list(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_list_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let store = LocalStore::new(temp.path());
        store.set(SNAPSHOTS_KEY, "{not json").await.unwrap();

        let backend = LocalBackend::new(store, 20);
        assert!(backend.list(10).await.unwrap().is_empty());

        backend.save(&snapshot("fresh")).await.unwrap();
        assert_eq!(backend.list(10).await.unwrap()[0].niche, "fresh");
    }
}
