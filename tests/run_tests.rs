//! End-to-end monitoring runs over in-memory and file-backed adapters.

mod support;

use std::sync::Arc;

use bookwatch::adapter::outbound::store::{JsonFileStatusStore, MemoryStatusStore};
use bookwatch::domain::{CatalogId, FailureKind};
use bookwatch::error::{Error, PersistenceError, QueryError};
use bookwatch::port::{CatalogMatch, StatusStore};
use bookwatch::testkit::catalog::ScriptedCatalog;
use bookwatch::testkit::domain::{item, item_with_id, record, snapshot, BRANCH};
use bookwatch::testkit::notifier::RecordingNotifier;

use support::fixture::{Harness, COSMOS_ISBN, DEMIAN_ISBN};

#[tokio::test]
async fn first_sighting_notifies_and_caches_resolved_id() {
    let catalog = ScriptedCatalog::new()
        .with_title("Cosmos", COSMOS_ISBN)
        .with_available(COSMOS_ISBN, BRANCH, true);
    let harness = Harness::new(catalog, vec![item("Cosmos", BRANCH)]);

    let summary = harness.run().execute().await.unwrap();

    assert_eq!(summary.checked, 1);
    assert_eq!(summary.available, 1);
    assert_eq!(summary.delivered(), 1);
    assert_eq!(summary.resolved_ids, 1);
    assert!(summary.saved);
    assert_eq!(harness.notifier.titles(), vec!["Cosmos".to_string()]);

    let cached = harness.watch_list.items();
    assert_eq!(cached[0].catalog_id, Some(CatalogId::new(COSMOS_ISBN)));
    assert_eq!(harness.store.snapshot().len(), 1);
}

#[tokio::test]
async fn unchanged_availability_is_not_renotified() {
    let catalog = ScriptedCatalog::new().with_available(COSMOS_ISBN, BRANCH, true);
    let harness = Harness::new(catalog, vec![item_with_id("Cosmos", BRANCH, COSMOS_ISBN)]);

    harness.run().execute().await.unwrap();
    let second = harness.run().execute().await.unwrap();

    assert!(second.events.is_empty());
    assert_eq!(harness.notifier.attempts(), 1);
    assert_eq!(harness.store.save_count(), 2);
}

#[tokio::test]
async fn copy_returning_after_loan_notifies_again() {
    let catalog = ScriptedCatalog::new().with_available(COSMOS_ISBN, BRANCH, true);
    let harness = Harness::new(catalog, vec![item_with_id("Cosmos", BRANCH, COSMOS_ISBN)]);

    harness.run().execute().await.unwrap();
    harness.catalog.set_available(COSMOS_ISBN, BRANCH, false);
    let loaned = harness.run().execute().await.unwrap();
    harness.catalog.set_available(COSMOS_ISBN, BRANCH, true);
    let returned = harness.run().execute().await.unwrap();

    assert!(loaned.events.is_empty());
    assert_eq!(loaned.available, 0);
    assert_eq!(returned.events.len(), 1);
    assert_eq!(harness.notifier.titles().len(), 2);
}

#[tokio::test]
async fn title_keyed_record_migrates_after_id_is_cached() {
    let catalog = ScriptedCatalog::new()
        .with_title("Cosmos", COSMOS_ISBN)
        .with_available(COSMOS_ISBN, BRANCH, true);
    let watched = item("Cosmos", BRANCH);
    let harness = Harness::new(catalog, vec![watched.clone()]);

    harness.run().execute().await.unwrap();
    assert!(harness.store.snapshot().get(&watched.title_key()).is_some());

    let second = harness.run().execute().await.unwrap();
    let migrated = item_with_id("Cosmos", BRANCH, COSMOS_ISBN);
    let status = harness.store.snapshot();

    assert!(second.events.is_empty(), "migration must not look like a new sighting");
    assert!(status.get(&watched.title_key()).is_none());
    assert!(status.get(&migrated.key()).is_some());
    assert_eq!(status.len(), 1);
    assert_eq!(harness.catalog.search_calls(), 1);
}

#[tokio::test]
async fn dry_run_neither_notifies_nor_writes() {
    let catalog = ScriptedCatalog::new()
        .with_title("Cosmos", COSMOS_ISBN)
        .with_available(COSMOS_ISBN, BRANCH, true);
    let harness = Harness::new(catalog, vec![item("Cosmos", BRANCH)]);

    let summary = harness.run().dry_run(true).execute().await.unwrap();

    assert_eq!(summary.events.len(), 1);
    assert_eq!(summary.delivered(), 0);
    assert!(!summary.saved);
    assert_eq!(summary.resolved_ids, 0);
    assert_eq!(harness.notifier.attempts(), 0);
    assert_eq!(harness.store.save_count(), 0);
    assert_eq!(harness.watch_list.items()[0].catalog_id, None);
}

#[tokio::test]
async fn failed_delivery_still_saves_snapshot() {
    let catalog = ScriptedCatalog::new().with_available(COSMOS_ISBN, BRANCH, true);
    let harness = Harness::new(catalog, vec![item_with_id("Cosmos", BRANCH, COSMOS_ISBN)])
        .with_notifier(RecordingNotifier::failing());

    let summary = harness.run().execute().await.unwrap();

    assert_eq!(summary.notify_failures.len(), 1);
    assert_eq!(summary.delivered(), 0);
    assert!(summary.saved);
    assert_eq!(harness.store.save_count(), 1);
    assert!(summary.render_text().contains("not delivered: Cosmos"));
}

#[tokio::test]
async fn one_failing_item_does_not_affect_the_others() {
    let cosmos = item_with_id("Cosmos", BRANCH, COSMOS_ISBN);
    let demian = item_with_id("Demian", BRANCH, DEMIAN_ISBN);
    let catalog = ScriptedCatalog::new()
        .with_check_error(COSMOS_ISBN, BRANCH, QueryError::Timeout)
        .with_available(DEMIAN_ISBN, BRANCH, true);
    let harness = Harness::new(catalog, vec![cosmos.clone(), demian.clone()]);
    let previous = record(&cosmos, true, COSMOS_ISBN);
    let store = Arc::new(MemoryStatusStore::with_snapshot(snapshot([previous.clone()])));

    let summary = harness.run_with_store(store.clone()).execute().await.unwrap();

    assert_eq!(summary.checked, 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].item.title, "Cosmos");
    assert_eq!(summary.failures[0].kind, FailureKind::Query(QueryError::Timeout));
    assert_eq!(harness.notifier.titles(), vec!["Demian".to_string()]);

    let status = store.snapshot();
    assert_eq!(status.get(&cosmos.key()), Some(&previous));
    assert!(status.get(&demian.key()).is_some_and(|r| r.available));
}

#[tokio::test]
async fn unresolvable_title_is_skipped() {
    let catalog = ScriptedCatalog::new();
    let harness = Harness::new(catalog, vec![item("No Such Book", BRANCH)]);

    let summary = harness.run().execute().await.unwrap();

    assert_eq!(summary.checked, 0);
    assert_eq!(summary.failures.len(), 1);
    assert!(matches!(summary.failures[0].kind, FailureKind::Resolution(_)));
    assert!(summary.saved);
}

#[tokio::test]
async fn ambiguous_title_leaves_stored_record_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    let watched = item("Cosmos", BRANCH);
    JsonFileStatusStore::new(&path)
        .save(&snapshot([record(&watched, false, "111")]))
        .await
        .unwrap();
    let before = std::fs::read(&path).unwrap();

    let catalog = ScriptedCatalog::new()
        .with_search(
            "Cosmos",
            vec![
                CatalogMatch::new("111", "Cosmos I"),
                CatalogMatch::new("222", "Cosmos II"),
            ],
        )
        .with_available("111", BRANCH, true)
        .with_available("222", BRANCH, true);
    let harness = Harness::new(catalog, vec![watched]);

    for _ in 0..2 {
        let summary = harness
            .run_with_store(Arc::new(JsonFileStatusStore::new(&path)))
            .execute()
            .await
            .unwrap();

        assert!(summary.events.is_empty());
        assert_eq!(summary.failures.len(), 1);
        assert!(matches!(summary.failures[0].kind, FailureKind::Resolution(_)));
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }
    assert_eq!(harness.notifier.attempts(), 0);
    assert_eq!(harness.catalog.check_calls(), 0);
    assert_eq!(harness.watch_list.items()[0].catalog_id, None);
}

#[tokio::test]
async fn corrected_isbn_does_not_inherit_another_books_record() {
    let stale = record(&item("Cosmos", BRANCH), true, "111");
    let store = Arc::new(MemoryStatusStore::with_snapshot(snapshot([stale])));
    let corrected = item_with_id("Cosmos", BRANCH, COSMOS_ISBN);
    let catalog = ScriptedCatalog::new().with_available(COSMOS_ISBN, BRANCH, true);
    let harness = Harness::new(catalog, vec![corrected.clone()]);

    let summary = harness.run_with_store(store.clone()).execute().await.unwrap();

    assert_eq!(summary.events.len(), 1);
    assert_eq!(harness.notifier.titles(), vec!["Cosmos".to_string()]);
    let status = store.snapshot();
    assert_eq!(status.len(), 1);
    assert!(status.get(&corrected.key()).is_some_and(|r| r.available));
}

#[tokio::test]
async fn corrupt_status_file_aborts_before_notifying() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status.json");
    std::fs::write(&path, "{ not json").unwrap();

    let catalog = ScriptedCatalog::new().with_available(COSMOS_ISBN, BRANCH, true);
    let harness = Harness::new(catalog, vec![item_with_id("Cosmos", BRANCH, COSMOS_ISBN)]);

    let result = harness
        .run_with_store(Arc::new(JsonFileStatusStore::new(&path)))
        .execute()
        .await;

    assert!(matches!(
        result,
        Err(Error::Persistence(PersistenceError::Parse(_)))
    ));
    assert_eq!(harness.notifier.attempts(), 0);
    assert_eq!(harness.catalog.check_calls(), 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[tokio::test]
async fn unusable_status_path_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let store = JsonFileStatusStore::new(blocker.join("status.json"));

    let catalog = ScriptedCatalog::new().with_available(COSMOS_ISBN, BRANCH, false);
    let harness = Harness::new(catalog, vec![item_with_id("Cosmos", BRANCH, COSMOS_ISBN)]);

    let result = harness.run_with_store(Arc::new(store)).execute().await;

    assert!(matches!(result, Err(Error::Persistence(_))));
    assert!(harness.notifier.events().is_empty());
}

#[tokio::test]
async fn status_file_round_trips_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("status.json");
    let catalog = ScriptedCatalog::new().with_available(COSMOS_ISBN, BRANCH, true);
    let harness = Harness::new(catalog, vec![item_with_id("Cosmos", BRANCH, COSMOS_ISBN)]);

    let first = harness
        .run_with_store(Arc::new(JsonFileStatusStore::new(&path)))
        .execute()
        .await
        .unwrap();
    let second = harness
        .run_with_store(Arc::new(JsonFileStatusStore::new(&path)))
        .execute()
        .await
        .unwrap();

    assert_eq!(first.events.len(), 1);
    assert!(second.events.is_empty());
    let reloaded = JsonFileStatusStore::new(&path).load().await.unwrap();
    assert_eq!(reloaded.len(), 1);
    assert!(!dir.path().join("state").join("status.json.tmp").exists());
}
