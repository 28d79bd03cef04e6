//! Availability records and the persisted status snapshot.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CatalogId, ItemKey};

/// What the catalog reports for one title at one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Availability {
    /// The branch holds at least one copy.
    pub held: bool,
    /// A copy can be borrowed right now.
    pub loan_available: bool,
}

impl Availability {
    #[must_use]
    pub const fn new(held: bool, loan_available: bool) -> Self {
        Self {
            held,
            loan_available,
        }
    }

    /// Loanable at check time.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.held && self.loan_available
    }
}

/// Last-known availability for one item key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRecord {
    pub key: ItemKey,
    pub available: bool,
    pub last_checked_at: DateTime<Utc>,
    pub catalog_id: CatalogId,
}

impl AvailabilityRecord {
    #[must_use]
    pub fn new(
        key: ItemKey,
        available: bool,
        last_checked_at: DateTime<Utc>,
        catalog_id: CatalogId,
    ) -> Self {
        Self {
            key,
            available,
            last_checked_at,
            catalog_id,
        }
    }
}

/// Persisted value for one key: the record minus its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub available: bool,
    pub last_checked_at: DateTime<Utc>,
    pub catalog_id: CatalogId,
}

/// Whole-store view: at most one record per key, latest write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    records: BTreeMap<ItemKey, AvailabilityRecord>,
}

impl StatusSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &ItemKey) -> Option<&AvailabilityRecord> {
        self.records.get(key)
    }

    /// Insert or overwrite the record under its own key.
    pub fn insert(&mut self, record: AvailabilityRecord) -> Option<AvailabilityRecord> {
        self.records.insert(record.key.clone(), record)
    }

    pub fn remove(&mut self, key: &ItemKey) -> Option<AvailabilityRecord> {
        self.records.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in key order.
    pub fn iter(&self) -> impl Iterator<Item = &AvailabilityRecord> {
        self.records.values()
    }

    /// Split into the persisted key → value layout.
    #[must_use]
    pub fn to_stored(&self) -> BTreeMap<ItemKey, StoredRecord> {
        self.records
            .iter()
            .map(|(key, record)| {
                (
                    key.clone(),
                    StoredRecord {
                        available: record.available,
                        last_checked_at: record.last_checked_at,
                        catalog_id: record.catalog_id.clone(),
                    },
                )
            })
            .collect()
    }

    /// Rebuild from the persisted layout.
    #[must_use]
    pub fn from_stored(stored: BTreeMap<ItemKey, StoredRecord>) -> Self {
        let records = stored
            .into_iter()
            .map(|(key, value)| {
                let record = AvailabilityRecord::new(
                    key.clone(),
                    value.available,
                    value.last_checked_at,
                    value.catalog_id,
                );
                (key, record)
            })
            .collect();
        Self { records }
    }
}

impl FromIterator<AvailabilityRecord> for StatusSnapshot {
    fn from_iter<I: IntoIterator<Item = AvailabilityRecord>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for record in iter {
            snapshot.insert(record);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::BranchCode;

    fn record(title: &str, available: bool) -> AvailabilityRecord {
        AvailabilityRecord::new(
            ItemKey::title(title, BranchCode::new("141001")),
            available,
            Utc::now(),
            CatalogId::new("9780000000001"),
        )
    }

    #[test]
    fn availability_requires_holding_and_loanable() {
        assert!(Availability::new(true, true).is_available());
        assert!(!Availability::new(true, false).is_available());
        assert!(!Availability::new(false, true).is_available());
    }

    #[test]
    fn insert_overwrites_same_key() {
        let mut snapshot = StatusSnapshot::new();
        snapshot.insert(record("Cosmos", false));
        let previous = snapshot.insert(record("Cosmos", true));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(previous.map(|r| r.available), Some(false));
        let key = ItemKey::title("Cosmos", BranchCode::new("141001"));
        assert!(snapshot.get(&key).unwrap().available);
    }

    #[test]
    fn stored_layout_round_trips() {
        let snapshot: StatusSnapshot = [record("Cosmos", true), record("Dune", false)]
            .into_iter()
            .collect();
        let rebuilt = StatusSnapshot::from_stored(snapshot.to_stored());
        assert_eq!(rebuilt, snapshot);
    }
}
