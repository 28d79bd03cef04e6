//! TOML file watch list.
//!
//! ```toml
//! [[book]]
//! title = "Cosmos"
//! branch_code = "141652"
//! branch_name = "Byeolbit Maru Library"
//! catalog_id = "9788983711892"   # optional, filled in once resolved
//! ```
//!
//! Incomplete rows are skipped with a warning rather than failing the run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

use crate::adapter::outbound::store::atomic_write;
use crate::domain::{CatalogId, ItemKey, WatchItem};
use crate::error::WatchListError;
use crate::port::{WatchListEditor, WatchListSource};

#[derive(Debug, Default, Serialize, Deserialize)]
struct WatchListFile {
    #[serde(default, rename = "book")]
    books: Vec<WatchRow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WatchRow {
    #[serde(default)]
    title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    branch_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    catalog_id: Option<String>,
}

impl WatchRow {
    fn to_item(&self) -> Option<WatchItem> {
        let mut item = WatchItem::try_new(&self.title, &self.branch_code).ok()?;
        if let Some(name) = &self.branch_name {
            item = item.with_branch_name(name.clone());
        }
        if let Some(id) = self.catalog_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            item = item.with_catalog_id(CatalogId::new(id));
        }
        Some(item)
    }

    fn from_item(item: &WatchItem) -> Self {
        Self {
            title: item.title.clone(),
            branch_code: item.branch_code.to_string(),
            branch_name: item.branch_name.clone(),
            catalog_id: item.catalog_id.as_ref().map(ToString::to_string),
        }
    }
}

/// Branch codes are often written as bare numbers.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Watch list stored as a TOML file.
pub struct TomlWatchList {
    path: PathBuf,
    lock: Mutex<()>,
}

impl TomlWatchList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<WatchListFile, WatchListError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| WatchListError::Parse(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "Watch list file not found, treating as empty");
                Ok(WatchListFile::default())
            }
            Err(e) => Err(WatchListError::Read(e)),
        }
    }

    async fn write(&self, file: &WatchListFile) -> Result<(), WatchListError> {
        let content =
            toml::to_string_pretty(file).map_err(|e| WatchListError::Parse(e.to_string()))?;
        atomic_write(&self.path, content.as_bytes())
            .await
            .map_err(WatchListError::Write)
    }
}

#[async_trait]
impl WatchListSource for TomlWatchList {
    async fn list_items(&self) -> Result<Vec<WatchItem>, WatchListError> {
        let _guard = self.lock.lock().await;
        let file = self.read().await?;
        let mut items = Vec::with_capacity(file.books.len());
        for (index, row) in file.books.iter().enumerate() {
            match row.to_item() {
                Some(item) => items.push(item),
                None => warn!(row = index + 1, title = %row.title, "Skipping incomplete watch list row"),
            }
        }
        Ok(items)
    }

    async fn record_resolved_id(
        &self,
        key: &ItemKey,
        id: &CatalogId,
    ) -> Result<(), WatchListError> {
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;
        let mut changed = false;
        for row in &mut file.books {
            if row.to_item().is_some_and(|item| &item.key() == key) {
                row.catalog_id = Some(id.to_string());
                changed = true;
            }
        }
        if changed {
            self.write(&file).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl WatchListEditor for TomlWatchList {
    async fn add_item(&self, item: WatchItem) -> Result<(), WatchListError> {
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;
        file.books.push(WatchRow::from_item(&item));
        self.write(&file).await
    }

    async fn remove_by_title(&self, title: &str) -> Result<usize, WatchListError> {
        let wanted = title.trim().to_lowercase();
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;
        let before = file.books.len();
        file.books
            .retain(|row| row.title.trim().to_lowercase() != wanted);
        let removed = before - file.books.len();
        if removed > 0 {
            self.write(&file).await?;
        }
        Ok(removed)
    }
}
