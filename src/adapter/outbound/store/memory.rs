//! In-memory status store.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::StatusSnapshot;
use crate::error::PersistenceError;
use crate::port::StatusStore;

/// Keeps the snapshot in memory. Counts saves so tests can assert on writes.
#[derive(Default)]
pub struct MemoryStatusStore {
    snapshot: Mutex<StatusSnapshot>,
    saves: Mutex<usize>,
}

impl MemoryStatusStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_snapshot(snapshot: StatusSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            saves: Mutex::new(0),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        self.snapshot.lock().clone()
    }

    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

#[async_trait]
impl StatusStore for MemoryStatusStore {
    async fn load(&self) -> Result<StatusSnapshot, PersistenceError> {
        Ok(self.snapshot.lock().clone())
    }

    async fn save(&self, snapshot: &StatusSnapshot) -> Result<(), PersistenceError> {
        *self.snapshot.lock() = snapshot.clone();
        *self.saves.lock() += 1;
        Ok(())
    }
}
