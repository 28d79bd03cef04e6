//! Watch list and stored status projections for operator-facing adapters.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;

/// One watch list entry as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchEntry {
    pub title: String,
    pub branch_code: String,
    /// Branch name from the entry or the directory, else the code.
    pub branch: String,
    pub catalog_id: Option<String>,
}

/// Add a book to the watch list.
#[derive(Debug, Clone)]
pub struct AddRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,
    pub title: String,
    /// Branch code; the configured default when absent.
    pub branch: Option<String>,
    /// ISBN-13 to pin.
    pub isbn: Option<String>,
}

/// Result of an add.
#[derive(Debug, Clone)]
pub struct AddReceipt {
    pub entry: WatchEntry,
    /// The branch code is not in the configured directory.
    pub unknown_branch: bool,
}

/// Last stored availability of a watched book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoredState {
    Available,
    OnLoan,
    NeverChecked,
}

impl StoredState {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnLoan => "on loan",
            Self::NeverChecked => "never checked",
        }
    }
}

/// Stored status of one watch list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub title: String,
    pub branch: String,
    pub state: StoredState,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub catalog_id: Option<String>,
}

/// Output of `status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub status_file: String,
    /// Records in the status file, including ones no entry refers to.
    pub records: usize,
    pub entries: Vec<StatusEntry>,
}

/// Watch list use cases. None of these query the catalog.
#[async_trait]
pub trait WatchListOperator: Send + Sync {
    /// Entries in list order.
    async fn list_watch_items(&self, config_toml: &str) -> Result<Vec<WatchEntry>>;

    /// Append an entry.
    async fn add_watch_item(&self, request: AddRequest) -> Result<AddReceipt>;

    /// Remove entries by title. Returns how many were removed.
    async fn remove_watch_item(&self, config_toml: &str, title: &str) -> Result<usize>;

    /// Stored availability of each entry.
    async fn load_status(&self, config_toml: &str) -> Result<StatusReport>;
}
