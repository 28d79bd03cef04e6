//! Monitoring run projections for operator-facing adapters.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;

/// One monitoring run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,
    /// Check availability but send nothing and write nothing.
    pub dry_run: bool,
}

/// What `run` prints before the first check.
#[derive(Debug, Clone)]
pub struct RunStartupSnapshot {
    pub watch_list: String,
    pub status_file: String,
    pub telegram_enabled: bool,
    pub dry_run: bool,
}

/// A title reported by a run, with the branch it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunItem {
    pub title: String,
    pub branch: String,
    /// Failure or delivery error, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Outcome of one monitoring run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub dry_run: bool,
    pub checked: usize,
    pub available: usize,
    /// Titles that just became loanable.
    pub newly_available: Vec<RunItem>,
    /// Items skipped this run; their previous status was kept.
    pub skipped: Vec<RunItem>,
    /// Notifications that did not reach every channel.
    pub undelivered: Vec<RunItem>,
    pub resolved_ids: usize,
    pub saved: bool,
    /// Human-readable summary.
    #[serde(skip)]
    pub text: String,
}

/// Monitoring use cases.
#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Describe the run without checking anything.
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot>;

    /// Check every watched item once.
    async fn run_once(&self, request: &RunRequest) -> Result<RunReport>;
}
