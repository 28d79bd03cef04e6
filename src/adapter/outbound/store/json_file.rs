//! JSON file status store.
//!
//! Writes the whole snapshot with the write-to-temp-then-rename pattern so
//! an interrupted run leaves either the previous or the new file in place.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::{ItemKey, StatusSnapshot, StoredRecord};
use crate::error::PersistenceError;
use crate::port::StatusStore;

/// Current status file format version.
const STATUS_VERSION: u32 = 1;

/// On-disk layout.
#[derive(Debug, Serialize, Deserialize)]
struct StatusFile {
    version: u32,
    #[serde(default)]
    records: BTreeMap<ItemKey, StoredRecord>,
}

/// Status store backed by a single JSON file.
pub struct JsonFileStatusStore {
    path: PathBuf,
}

impl JsonFileStatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(snapshot: &StatusSnapshot) -> Result<String, PersistenceError> {
        let file = StatusFile {
            version: STATUS_VERSION,
            records: snapshot.to_stored(),
        };
        let mut json =
            serde_json::to_string_pretty(&file).map_err(|e| PersistenceError::Parse(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    fn decode(content: &str) -> Result<StatusSnapshot, PersistenceError> {
        let file: StatusFile =
            serde_json::from_str(content).map_err(|e| PersistenceError::Parse(e.to_string()))?;
        if file.version != STATUS_VERSION {
            return Err(PersistenceError::Version {
                found: file.version,
            });
        }
        Ok(StatusSnapshot::from_stored(file.records))
    }
}

#[async_trait]
impl StatusStore for JsonFileStatusStore {
    async fn load(&self) -> Result<StatusSnapshot, PersistenceError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let snapshot = Self::decode(&content)?;
                debug!(path = %self.path.display(), records = snapshot.len(), "Loaded status");
                Ok(snapshot)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No status file yet");
                Ok(StatusSnapshot::new())
            }
            Err(e) => Err(PersistenceError::Read(e)),
        }
    }

    async fn save(&self, snapshot: &StatusSnapshot) -> Result<(), PersistenceError> {
        let json = Self::encode(snapshot)?;
        atomic_write(&self.path, json.as_bytes())
            .await
            .map_err(PersistenceError::Write)?;
        debug!(path = %self.path.display(), records = snapshot.len(), "Saved status");
        Ok(())
    }
}

/// Write `bytes` to `path` via a synced temp file and a rename.
///
/// Creates the parent directory if it doesn't exist.
pub(crate) async fn atomic_write(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = temp_path_for(path);
    let result = async {
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        fs::rename(&temp_path, path).await
    }
    .await;

    if result.is_err() {
        let _ = fs::remove_file(&temp_path).await;
    }
    result
}

/// Sibling of `path` with `.tmp` appended to the full file name.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AvailabilityRecord, BranchCode, CatalogId};
    use chrono::Utc;

    #[test]
    fn temp_names_differ_for_files_sharing_a_stem() {
        let json = temp_path_for(Path::new("data/books.json"));
        let toml = temp_path_for(Path::new("data/books.toml"));
        assert_eq!(json, Path::new("data/books.json.tmp"));
        assert_eq!(toml, Path::new("data/books.toml.tmp"));
    }

    fn snapshot() -> StatusSnapshot {
        [
            AvailabilityRecord::new(
                ItemKey::title("Cosmos", BranchCode::new("141001")),
                true,
                Utc::now(),
                CatalogId::new("9788983711892"),
            ),
            AvailabilityRecord::new(
                ItemKey::catalog(CatalogId::new("9788937460449"), BranchCode::new("141652")),
                false,
                Utc::now(),
                CatalogId::new("9788937460449"),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStatusStore::new(dir.path().join("status.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStatusStore::new(dir.path().join("nested/status.json"));

        let original = snapshot();
        store.save(&original).await.unwrap();
        assert_eq!(store.load().await.unwrap(), original);
        assert!(!dir.path().join("nested/status.json.tmp").exists());
    }

    #[tokio::test]
    async fn resaving_loaded_snapshot_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        let store = JsonFileStatusStore::new(&path);

        store.save(&snapshot()).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();
        let loaded = store.load().await.unwrap();
        store.save(&loaded).await.unwrap();
        let after = std::fs::read_to_string(&path).unwrap();

        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_parse_error_and_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStatusStore::new(&path);
        assert!(matches!(store.load().await, Err(PersistenceError::Parse(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[tokio::test]
    async fn unknown_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        std::fs::write(&path, r#"{"version": 7, "records": {}}"#).unwrap();

        let store = JsonFileStatusStore::new(&path);
        assert!(matches!(
            store.load().await,
            Err(PersistenceError::Version { found: 7 })
        ));
    }

    #[test]
    fn encoded_layout_is_keyed_by_item_key() {
        let json = JsonFileStatusStore::encode(&snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        let record = &value["records"]["title:Cosmos@141001"];
        assert_eq!(record["available"], true);
        assert_eq!(record["catalog_id"], "9788983711892");
        assert!(record["last_checked_at"].is_string());
    }
}
