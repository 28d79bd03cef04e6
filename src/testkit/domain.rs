//! Builders for domain primitives used across tests.
//!
//! Concise factories for [`WatchItem`], [`AvailabilityRecord`] and
//! [`StatusSnapshot`] so tests focus on assertions rather than
//! construction boilerplate.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{AvailabilityRecord, CatalogId, ItemKey, StatusSnapshot, WatchItem};

/// Branch code used by most scenarios.
pub const BRANCH: &str = "141001";

/// A watch item for `title` at `branch`.
///
/// # Panics
///
/// Panics on an empty title or branch.
pub fn item(title: &str, branch: &str) -> WatchItem {
    WatchItem::try_new(title, branch).expect("valid watch item")
}

/// A watch item whose identifier is already cached.
pub fn item_with_id(title: &str, branch: &str, id: &str) -> WatchItem {
    item(title, branch).with_catalog_id(CatalogId::new(id))
}

/// A fixed, readable timestamp.
pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// A record for `item` as stored by a previous run.
pub fn record(item: &WatchItem, available: bool, id: &str) -> AvailabilityRecord {
    record_at(item.key(), available, id, at(9))
}

pub fn record_at(
    key: ItemKey,
    available: bool,
    id: &str,
    checked_at: DateTime<Utc>,
) -> AvailabilityRecord {
    AvailabilityRecord::new(key, available, checked_at, CatalogId::new(id))
}

/// A snapshot holding `records`.
pub fn snapshot(records: impl IntoIterator<Item = AvailabilityRecord>) -> StatusSnapshot {
    records.into_iter().collect()
}
