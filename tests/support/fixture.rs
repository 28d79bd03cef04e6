//! Wiring helpers for run-level tests.

use std::sync::Arc;

use bookwatch::adapter::outbound::store::MemoryStatusStore;
use bookwatch::adapter::outbound::watchlist::MemoryWatchList;
use bookwatch::application::{EngineSettings, MonitorEngine, MonitorRun};
use bookwatch::domain::WatchItem;
use bookwatch::port::StatusStore;
use bookwatch::testkit::catalog::ScriptedCatalog;
use bookwatch::testkit::notifier::RecordingNotifier;

pub const COSMOS_ISBN: &str = "9788983711892";
pub const DEMIAN_ISBN: &str = "9788937460449";

/// In-memory collaborators for one monitored setup, kept across runs.
pub struct Harness {
    pub catalog: Arc<ScriptedCatalog>,
    pub watch_list: Arc<MemoryWatchList>,
    pub store: Arc<MemoryStatusStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(catalog: ScriptedCatalog, items: Vec<WatchItem>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            watch_list: Arc::new(MemoryWatchList::new(items)),
            store: Arc::new(MemoryStatusStore::new()),
            notifier: Arc::new(RecordingNotifier::new()),
        }
    }

    pub fn with_notifier(mut self, notifier: RecordingNotifier) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn run(&self) -> MonitorRun {
        self.run_with_store(self.store.clone())
    }

    pub fn run_with_store(&self, store: Arc<dyn StatusStore>) -> MonitorRun {
        let engine = MonitorEngine::new(self.catalog.clone(), EngineSettings::default());
        MonitorRun::new(
            engine,
            self.watch_list.clone(),
            store,
            self.notifier.clone(),
        )
    }
}
