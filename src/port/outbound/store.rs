//! Store port for the last-known availability snapshot.

use async_trait::async_trait;

use crate::domain::StatusSnapshot;
use crate::error::PersistenceError;

/// Persists the status snapshot across runs.
///
/// # Implementation Notes
///
/// - `save` replaces the whole snapshot atomically: a reader sees either the
///   previous or the new snapshot, never a mix
/// - `load` on a store that was never written returns an empty snapshot
#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn load(&self) -> Result<StatusSnapshot, PersistenceError>;

    async fn save(&self, snapshot: &StatusSnapshot) -> Result<(), PersistenceError>;
}
