//! Availability monitoring engine.
//!
//! [`MonitorEngine::run_cycle`] turns the watch list plus the previous status
//! snapshot into a new snapshot, the notification events to dispatch, and the
//! items that failed. Each item is processed independently: a failure is
//! recorded and that item's previous record carried forward unchanged,
//! without affecting any other item.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use super::resolve::{ResolutionSource, ResolveFailure, Resolver};
use crate::domain::{
    notification_for, AvailabilityRecord, CatalogId, FailureKind, ItemFailure, ItemKey,
    NotificationEvent, StatusSnapshot, WatchItem,
};
use crate::port::CatalogClient;

/// Pacing knobs for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Pause after each item's catalog query.
    pub request_delay: Duration,
    /// Items checked concurrently. Output order is unaffected.
    pub max_concurrency: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            request_delay: Duration::ZERO,
            max_concurrency: 1,
        }
    }
}

/// One item that was checked successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedItem {
    pub item: WatchItem,
    pub record: AvailabilityRecord,
}

/// Everything a cycle produced.
#[derive(Debug, Clone, Default)]
pub struct CycleOutcome {
    /// Previous snapshot with every successful check written over it.
    pub status: StatusSnapshot,
    /// In watch list order.
    pub events: Vec<NotificationEvent>,
    /// In watch list order.
    pub failures: Vec<ItemFailure>,
    /// In watch list order.
    pub checked: Vec<CheckedItem>,
    /// Identifiers found by search this cycle, for caching back into the watch list.
    pub resolved: Vec<(ItemKey, CatalogId)>,
}

enum ItemOutcome {
    Checked {
        checked: CheckedItem,
        event: Option<NotificationEvent>,
        superseded: Option<ItemKey>,
        searched: bool,
    },
    Failed(ItemFailure),
}

/// The monitoring core. Holds only the catalog; state is passed in and out.
pub struct MonitorEngine {
    catalog: Arc<dyn CatalogClient>,
    settings: EngineSettings,
}

impl MonitorEngine {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogClient>, settings: EngineSettings) -> Self {
        Self { catalog, settings }
    }

    #[must_use]
    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// Check every item against the catalog and diff against `previous`.
    pub async fn run_cycle(&self, items: &[WatchItem], previous: &StatusSnapshot) -> CycleOutcome {
        let resolver = Resolver::new(self.catalog.as_ref());
        let concurrency = self.settings.max_concurrency.max(1);

        let checks: Vec<_> = items
            .iter()
            .map(|item| self.check_item(item, previous, &resolver))
            .collect();
        // `buffered` yields in input order, so events and failures keep item order.
        let outcomes: Vec<ItemOutcome> = stream::iter(checks).buffered(concurrency).collect().await;

        let mut outcome = CycleOutcome {
            status: previous.clone(),
            ..CycleOutcome::default()
        };

        for item_outcome in outcomes {
            match item_outcome {
                ItemOutcome::Checked {
                    checked,
                    event,
                    superseded,
                    searched,
                } => {
                    if let Some(old_key) = superseded {
                        outcome.status.remove(&old_key);
                    }
                    outcome.status.insert(checked.record.clone());
                    if searched {
                        outcome
                            .resolved
                            .push((checked.item.key(), checked.record.catalog_id.clone()));
                    }
                    outcome.events.extend(event);
                    outcome.checked.push(checked);
                }
                ItemOutcome::Failed(failure) => outcome.failures.push(failure),
            }
        }

        info!(
            items = items.len(),
            checked = outcome.checked.len(),
            events = outcome.events.len(),
            failures = outcome.failures.len(),
            "Cycle complete"
        );

        outcome
    }

    async fn check_item(
        &self,
        item: &WatchItem,
        previous: &StatusSnapshot,
        resolver: &Resolver<'_>,
    ) -> ItemOutcome {
        let outcome = self.check_item_inner(item, previous, resolver).await;
        if !self.settings.request_delay.is_zero() {
            tokio::time::sleep(self.settings.request_delay).await;
        }
        outcome
    }

    async fn check_item_inner(
        &self,
        item: &WatchItem,
        previous: &StatusSnapshot,
        resolver: &Resolver<'_>,
    ) -> ItemOutcome {
        let key = item.key();
        let (prior, superseded) = previous_record(item, &key, previous);

        let (catalog_id, source) = match resolver.resolve(item).await {
            Ok(resolved) => resolved,
            Err(failure) => {
                let kind = match failure {
                    ResolveFailure::Resolution(e) => FailureKind::Resolution(e),
                    ResolveFailure::Query(e) => FailureKind::Query(e),
                };
                warn!(title = %item.title, branch = %item.branch_code, reason = %kind, "Could not resolve catalog id");
                return ItemOutcome::Failed(ItemFailure::new(item.clone(), kind));
            }
        };

        let availability = match self
            .catalog
            .check_availability(&catalog_id, &item.branch_code)
            .await
        {
            Ok(availability) => availability,
            Err(e) => {
                warn!(title = %item.title, branch = %item.branch_code, error = %e, "Availability query failed");
                return ItemOutcome::Failed(ItemFailure::new(item.clone(), e));
            }
        };

        let record = AvailabilityRecord::new(
            key,
            availability.is_available(),
            Utc::now(),
            catalog_id,
        );
        let event = notification_for(item, prior, &record);

        debug!(
            title = %item.title,
            branch = %item.branch_code,
            available = record.available,
            previous = ?prior.map(|r| r.available),
            notify = event.is_some(),
            "Checked item"
        );

        ItemOutcome::Checked {
            checked: CheckedItem {
                item: item.clone(),
                record,
            },
            event,
            superseded,
            searched: source == ResolutionSource::Search,
        }
    }
}

/// Previous record for `item`, plus the legacy key it must replace.
///
/// An item that gained a catalog id since its last check is still stored
/// under its title key. That record counts as its history only when it was
/// taken for the same id; a record for another book is dropped without
/// being used.
fn previous_record<'s>(
    item: &WatchItem,
    key: &ItemKey,
    previous: &'s StatusSnapshot,
) -> (Option<&'s AvailabilityRecord>, Option<ItemKey>) {
    if let Some(record) = previous.get(key) {
        return (Some(record), None);
    }
    if key.is_catalog() {
        let title_key = item.title_key();
        if let Some(record) = previous.get(&title_key) {
            let same_book = item.catalog_id.as_ref() == Some(&record.catalog_id);
            return (same_book.then_some(record), Some(title_key));
        }
    }
    (None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Availability, BranchCode};
    use crate::error::{QueryError, ResolutionError};
    use crate::port::CatalogMatch;
    use async_trait::async_trait;

    struct FixedCatalog {
        available: bool,
    }

    #[async_trait]
    impl CatalogClient for FixedCatalog {
        async fn search(&self, title: &str) -> Result<Vec<CatalogMatch>, QueryError> {
            Ok(vec![CatalogMatch::new("9788983711892", title)])
        }

        async fn check_availability(
            &self,
            _id: &CatalogId,
            _branch: &BranchCode,
        ) -> Result<Availability, QueryError> {
            Ok(Availability::new(true, self.available))
        }
    }

    /// Two inexact hits for every title; every id is on the shelf.
    struct AmbiguousCatalog;

    #[async_trait]
    impl CatalogClient for AmbiguousCatalog {
        async fn search(&self, title: &str) -> Result<Vec<CatalogMatch>, QueryError> {
            Ok(vec![
                CatalogMatch::new("111", format!("{title} I")),
                CatalogMatch::new("222", format!("{title} II")),
            ])
        }

        async fn check_availability(
            &self,
            _id: &CatalogId,
            _branch: &BranchCode,
        ) -> Result<Availability, QueryError> {
            Ok(Availability::new(true, true))
        }
    }

    fn engine(available: bool) -> MonitorEngine {
        MonitorEngine::new(
            Arc::new(FixedCatalog { available }),
            EngineSettings::default(),
        )
    }

    #[tokio::test]
    async fn searched_ids_are_reported_for_caching() {
        let item = WatchItem::try_new("Cosmos", "141001").unwrap();
        let outcome = engine(true)
            .run_cycle(std::slice::from_ref(&item), &StatusSnapshot::new())
            .await;

        assert_eq!(outcome.resolved.len(), 1);
        assert_eq!(outcome.resolved[0].0, item.key());
        assert_eq!(outcome.resolved[0].1.as_str(), "9788983711892");
    }

    #[tokio::test]
    async fn title_keyed_record_is_migrated_once_id_is_cached() {
        let plain = WatchItem::try_new("Cosmos", "141001").unwrap();
        let first = engine(true)
            .run_cycle(std::slice::from_ref(&plain), &StatusSnapshot::new())
            .await;
        assert_eq!(first.events.len(), 1);

        let cached = plain.clone().with_catalog_id(CatalogId::new("9788983711892"));
        let second = engine(true)
            .run_cycle(std::slice::from_ref(&cached), &first.status)
            .await;

        assert!(second.events.is_empty(), "no duplicate first sighting");
        assert_eq!(second.status.len(), 1);
        assert!(second.status.get(&cached.key()).is_some());
        assert!(second.status.get(&plain.key()).is_none());
    }

    #[tokio::test]
    async fn title_keyed_record_for_another_id_is_not_inherited() {
        let plain = WatchItem::try_new("Cosmos", "141001").unwrap();
        let stale = AvailabilityRecord::new(plain.key(), true, Utc::now(), CatalogId::new("111"));
        let previous: StatusSnapshot = [stale].into_iter().collect();

        let corrected = plain.clone().with_catalog_id(CatalogId::new("999"));
        let outcome = engine(true)
            .run_cycle(std::slice::from_ref(&corrected), &previous)
            .await;

        assert_eq!(outcome.events.len(), 1, "new book is a first sighting");
        assert_eq!(outcome.status.len(), 1);
        assert!(outcome.status.get(&plain.key()).is_none());
        assert_eq!(
            outcome.status.get(&corrected.key()).map(|r| r.catalog_id.as_str()),
            Some("999")
        );
    }

    #[tokio::test]
    async fn ambiguous_title_never_reuses_the_stored_id() {
        let item = WatchItem::try_new("Cosmos", "141001").unwrap();
        let stored = AvailabilityRecord::new(item.key(), false, Utc::now(), CatalogId::new("111"));
        let previous: StatusSnapshot = [stored.clone()].into_iter().collect();

        let engine = MonitorEngine::new(Arc::new(AmbiguousCatalog), EngineSettings::default());
        for _ in 0..2 {
            let outcome = engine
                .run_cycle(std::slice::from_ref(&item), &previous)
                .await;
            assert!(outcome.events.is_empty());
            assert!(outcome.resolved.is_empty());
            assert_eq!(outcome.failures.len(), 1);
            assert!(matches!(
                outcome.failures[0].kind,
                FailureKind::Resolution(ResolutionError::Ambiguous { .. })
            ));
            assert_eq!(outcome.status.get(&item.key()), Some(&stored));
        }
    }

    #[tokio::test]
    async fn concurrent_checks_keep_watch_list_order() {
        let items: Vec<WatchItem> = ["Cosmos", "Demian", "Walden"]
            .into_iter()
            .map(|title| WatchItem::try_new(title, "141001").unwrap())
            .collect();
        let engine = MonitorEngine::new(
            Arc::new(FixedCatalog { available: true }),
            EngineSettings {
                request_delay: Duration::ZERO,
                max_concurrency: 3,
            },
        );

        let outcome = engine.run_cycle(&items, &StatusSnapshot::new()).await;

        let titles: Vec<&str> = outcome.events.iter().map(|e| e.item.title.as_str()).collect();
        assert_eq!(titles, ["Cosmos", "Demian", "Walden"]);
    }

    #[tokio::test]
    async fn empty_watch_list_keeps_previous_snapshot() {
        let item = WatchItem::try_new("Cosmos", "141001").unwrap();
        let previous = engine(true)
            .run_cycle(std::slice::from_ref(&item), &StatusSnapshot::new())
            .await
            .status;

        let outcome = engine(false).run_cycle(&[], &previous).await;
        assert_eq!(outcome.status, previous);
        assert!(outcome.events.is_empty());
    }
}
