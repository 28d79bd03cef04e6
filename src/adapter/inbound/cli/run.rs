//! Handler for the `run` command.

use std::path::Path;
use std::time::Duration;

use serde_json::json;
use tokio::signal;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{logging, operator, output};
use crate::error::Result;
use crate::port::inbound::operator::runtime::{RunReport, RunRequest, RunStartupSnapshot};

/// Execute the run command.
///
/// A single run returns its error to the caller. With `--interval-minutes`
/// a failed run is reported and the loop carries on until Ctrl-C.
pub async fn execute(config_path: &Path, args: &RunArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    logging::init_service(&config_toml, args.log_level.as_deref(), args.json_logs)?;

    let service = operator::operator();
    let request = RunRequest {
        config_toml,
        dry_run: args.dry_run,
    };
    print_startup(&service.prepare_run(&request)?);

    match args.interval_minutes {
        None => {
            let report = service.run_once(&request).await?;
            print_report(&report);
        }
        Some(minutes) => run_every(&request, interval_period(minutes)).await,
    }
    Ok(())
}

fn interval_period(minutes: u64) -> Duration {
    Duration::from_secs(minutes.saturating_mul(60))
}

async fn run_every(request: &RunRequest, period: Duration) {
    let service = operator::operator();
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(period_secs = period.as_secs(), "Scheduled monitoring started");
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {}
        }
        tokio::select! {
            _ = &mut shutdown => break,
            result = service.run_once(request) => match result {
                Ok(report) => print_report(&report),
                Err(e) => {
                    error!(error = %e, "Run failed");
                    output::error(&format!("run failed: {e}"));
                }
            },
        }
    }
    info!("Shutdown signal received");
}

fn print_startup(snapshot: &RunStartupSnapshot) {
    if output::is_json() {
        return;
    }
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Watch list", &snapshot.watch_list);
    output::field("Status file", &snapshot.status_file);
    output::field(
        "Telegram",
        if snapshot.telegram_enabled {
            "enabled"
        } else {
            "disabled"
        },
    );
    if snapshot.dry_run {
        output::field("Mode", "dry run");
    }
}

fn print_report(report: &RunReport) {
    if output::is_json() {
        output::json_output(json!({
            "command": "run",
            "report": report,
        }));
        return;
    }

    output::section("Run");
    for item in &report.newly_available {
        output::available(&item.title, &item.branch);
    }
    output::lines(&report.text);

    if report.skipped.is_empty() && report.undelivered.is_empty() {
        output::success(&format!(
            "{} checked, {} available",
            report.checked, report.available
        ));
    } else {
        output::warning(&format!(
            "{} item(s) skipped, {} notification(s) not delivered",
            report.skipped.len(),
            report.undelivered.len()
        ));
    }
}
