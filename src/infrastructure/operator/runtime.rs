//! Runtime operator implementation.

use async_trait::async_trait;

use crate::application::RunSummary;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory;
use crate::port::inbound::operator::runtime::{
    RunItem, RunReport, RunRequest, RunStartupSnapshot, RuntimeOperator,
};

use super::entry::Operator;

#[async_trait]
impl RuntimeOperator for Operator {
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot> {
        let config = Config::parse_toml(&request.config_toml)?;
        Ok(RunStartupSnapshot {
            watch_list: config.storage.watch_list.display().to_string(),
            status_file: config.storage.status_file.display().to_string(),
            telegram_enabled: config.telegram.enabled,
            dry_run: request.dry_run,
        })
    }

    async fn run_once(&self, request: &RunRequest) -> Result<RunReport> {
        let config = Config::parse_toml(&request.config_toml)?;
        let run = factory::build_monitor_run(&config, request.dry_run)?;
        let summary = run.execute().await?;
        Ok(report(&summary))
    }
}

fn report(summary: &RunSummary) -> RunReport {
    RunReport {
        run_id: summary.run_id.to_string(),
        started_at: summary.started_at,
        finished_at: summary.finished_at,
        dry_run: summary.dry_run,
        checked: summary.checked,
        available: summary.available,
        newly_available: summary
            .events
            .iter()
            .map(|event| RunItem {
                title: event.item.title.clone(),
                branch: event.item.display_branch().to_string(),
                reason: None,
            })
            .collect(),
        skipped: summary
            .failures
            .iter()
            .map(|failure| RunItem {
                title: failure.item.title.clone(),
                branch: failure.item.display_branch().to_string(),
                reason: Some(failure.kind.to_string()),
            })
            .collect(),
        undelivered: summary
            .notify_failures
            .iter()
            .map(|failure| RunItem {
                title: failure.title.clone(),
                branch: failure.branch.clone(),
                reason: Some(failure.reason.clone()),
            })
            .collect(),
        resolved_ids: summary.resolved_ids,
        saved: summary.saved,
        text: summary.render_text(),
    }
}
