//! Watch list port.

use async_trait::async_trait;

use crate::domain::{CatalogId, ItemKey, WatchItem};
use crate::error::WatchListError;

/// Supplies the ordered items to monitor.
#[async_trait]
pub trait WatchListSource: Send + Sync {
    /// All monitored items, in list order.
    async fn list_items(&self) -> Result<Vec<WatchItem>, WatchListError>;

    /// Cache a resolved identifier on the entry whose key is `key`.
    ///
    /// Best-effort: callers log failures and carry on.
    async fn record_resolved_id(&self, key: &ItemKey, id: &CatalogId)
        -> Result<(), WatchListError>;
}

/// A watch list that can also be edited (bot and CLI commands).
#[async_trait]
pub trait WatchListEditor: WatchListSource {
    /// Append an item to the end of the list.
    async fn add_item(&self, item: WatchItem) -> Result<(), WatchListError>;

    /// Remove entries whose title matches case-insensitively. Returns how many were removed.
    async fn remove_by_title(&self, title: &str) -> Result<usize, WatchListError>;
}
