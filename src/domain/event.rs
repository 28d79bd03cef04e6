//! Notification events produced by a monitoring cycle.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::CatalogId;
use super::item::WatchItem;
use super::record::AvailabilityRecord;

/// A watched title just became loanable at its branch.
///
/// Built, dispatched and dropped within one run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationEvent {
    pub item: WatchItem,
    pub available: bool,
    pub occurred_at: DateTime<Utc>,
    /// The identifier the availability was checked with.
    pub catalog_id: CatalogId,
}

impl NotificationEvent {
    #[must_use]
    pub fn new(item: WatchItem, current: &AvailabilityRecord) -> Self {
        Self {
            item,
            available: current.available,
            occurred_at: current.last_checked_at,
            catalog_id: current.catalog_id.clone(),
        }
    }
}
