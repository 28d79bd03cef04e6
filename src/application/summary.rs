//! Run summary: what was checked, what failed, what was sent.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{ItemFailure, NotificationEvent};
use crate::error::NotifyError;

/// One event whose delivery failed.
#[derive(Debug, Clone, Serialize)]
pub struct NotifyFailure {
    pub title: String,
    pub branch: String,
    pub reason: String,
}

impl NotifyFailure {
    #[must_use]
    pub fn new(event: &NotificationEvent, error: &NotifyError) -> Self {
        Self {
            title: event.item.title.clone(),
            branch: event.item.display_branch().to_string(),
            reason: error.to_string(),
        }
    }
}

/// Result of one monitoring run, reported to the operator.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub dry_run: bool,
    /// Items checked successfully.
    pub checked: usize,
    /// Of those, how many are loanable now.
    pub available: usize,
    pub events: Vec<NotificationEvent>,
    pub failures: Vec<ItemFailure>,
    pub notify_failures: Vec<NotifyFailure>,
    /// Identifiers newly cached into the watch list.
    pub resolved_ids: usize,
    /// Whether the status snapshot was written.
    pub saved: bool,
}

impl RunSummary {
    /// Events that reached every notifier.
    #[must_use]
    pub fn delivered(&self) -> usize {
        if self.dry_run {
            return 0;
        }
        self.events.len().saturating_sub(self.notify_failures.len())
    }

    /// Plain-text report, one line per notable item.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let seconds = (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0;
        let _ = writeln!(
            out,
            "Run {} finished in {seconds:.1}s{}",
            self.run_id,
            if self.dry_run { " (dry run)" } else { "" }
        );
        let _ = writeln!(
            out,
            "Checked {} item(s), {} available, {} failed",
            self.checked,
            self.available,
            self.failures.len()
        );

        for event in &self.events {
            let _ = writeln!(
                out,
                "  + available: {} @ {}",
                event.item.title,
                event.item.display_branch()
            );
        }
        for failure in &self.failures {
            let _ = writeln!(
                out,
                "  ! skipped: {} @ {} ({})",
                failure.item.title,
                failure.item.display_branch(),
                failure.kind
            );
        }
        for failure in &self.notify_failures {
            let _ = writeln!(
                out,
                "  ! not delivered: {} @ {} ({})",
                failure.title, failure.branch, failure.reason
            );
        }

        let _ = write!(
            out,
            "Notifications: {} event(s), {} delivered",
            self.events.len(),
            self.delivered()
        );
        out
    }
}
