//! In-memory watch list.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{CatalogId, ItemKey, WatchItem};
use crate::error::WatchListError;
use crate::port::{WatchListEditor, WatchListSource};

/// Watch list held in memory.
#[derive(Default)]
pub struct MemoryWatchList {
    items: Mutex<Vec<WatchItem>>,
}

impl MemoryWatchList {
    #[must_use]
    pub fn new(items: Vec<WatchItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    #[must_use]
    pub fn items(&self) -> Vec<WatchItem> {
        self.items.lock().clone()
    }
}

#[async_trait]
impl WatchListSource for MemoryWatchList {
    async fn list_items(&self) -> Result<Vec<WatchItem>, WatchListError> {
        Ok(self.items())
    }

    async fn record_resolved_id(
        &self,
        key: &ItemKey,
        id: &CatalogId,
    ) -> Result<(), WatchListError> {
        for item in self.items.lock().iter_mut() {
            if &item.key() == key {
                item.catalog_id = Some(id.clone());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl WatchListEditor for MemoryWatchList {
    async fn add_item(&self, item: WatchItem) -> Result<(), WatchListError> {
        self.items.lock().push(item);
        Ok(())
    }

    async fn remove_by_title(&self, title: &str) -> Result<usize, WatchListError> {
        let wanted = title.trim().to_lowercase();
        let mut items = self.items.lock();
        let before = items.len();
        items.retain(|item| item.title.to_lowercase() != wanted);
        Ok(before - items.len())
    }
}
