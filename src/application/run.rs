//! One monitoring run, start to finish.
//!
//! Reads the watch list and the stored snapshot, runs a cycle, dispatches
//! events, writes the new snapshot as a whole and caches resolved ids back
//! into the watch list. Failing to read either input aborts the run before
//! anything is written.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::monitor::MonitorEngine;
use super::summary::{NotifyFailure, RunSummary};
use crate::error::Result;
use crate::port::{Notifier, StatusStore, WatchListSource};

/// Wires the engine to its collaborators for a single run.
pub struct MonitorRun {
    engine: MonitorEngine,
    watch_list: Arc<dyn WatchListSource>,
    store: Arc<dyn StatusStore>,
    notifier: Arc<dyn Notifier>,
    dry_run: bool,
}

impl MonitorRun {
    #[must_use]
    pub fn new(
        engine: MonitorEngine,
        watch_list: Arc<dyn WatchListSource>,
        store: Arc<dyn StatusStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            engine,
            watch_list,
            store,
            notifier,
            dry_run: false,
        }
    }

    /// Check and report without notifying or writing anything.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Execute one run.
    pub async fn execute(&self) -> Result<RunSummary> {
        let run_id = Uuid::new_v4();
        self.execute_inner(run_id)
            .instrument(info_span!("run", %run_id))
            .await
    }

    async fn execute_inner(&self, run_id: Uuid) -> Result<RunSummary> {
        let started_at = Utc::now();

        let items = self.watch_list.list_items().await?;
        let previous = self.store.load().await?;
        info!(
            items = items.len(),
            known = previous.len(),
            dry_run = self.dry_run,
            "Run started"
        );

        let outcome = self.engine.run_cycle(&items, &previous).await;

        let mut notify_failures = Vec::new();
        if !self.dry_run {
            for event in &outcome.events {
                match self.notifier.send(event).await {
                    Ok(()) => info!(
                        title = %event.item.title,
                        branch = %event.item.display_branch(),
                        "Notification sent"
                    ),
                    Err(e) => {
                        warn!(title = %event.item.title, error = %e, "Notification failed");
                        notify_failures.push(NotifyFailure::new(event, &e));
                    }
                }
            }
        }

        let mut saved = false;
        let mut resolved_ids = 0;
        if !self.dry_run {
            self.store.save(&outcome.status).await?;
            saved = true;

            for (key, id) in &outcome.resolved {
                match self.watch_list.record_resolved_id(key, id).await {
                    Ok(()) => resolved_ids += 1,
                    Err(e) => warn!(key = %key, error = %e, "Could not cache resolved id"),
                }
            }
        }

        let available = outcome
            .checked
            .iter()
            .filter(|checked| checked.record.available)
            .count();

        let summary = RunSummary {
            run_id,
            started_at,
            finished_at: Utc::now(),
            dry_run: self.dry_run,
            checked: outcome.checked.len(),
            available,
            events: outcome.events,
            failures: outcome.failures,
            notify_failures,
            resolved_ids,
            saved,
        };

        info!(
            checked = summary.checked,
            events = summary.events.len(),
            failures = summary.failures.len(),
            delivered = summary.delivered(),
            "Run finished"
        );

        Ok(summary)
    }
}
