//! Handler for the `status` command.
//!
//! Shows what the last run stored for each watched book. Reads the status
//! file and watch list only; the catalog is not queried.

use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::{logging, operator, output};
use crate::error::Result;
use crate::port::inbound::operator::watchlist::{StatusEntry, StoredState};

#[derive(Tabled, Serialize)]
struct StatusRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Branch")]
    branch: String,
    #[tabled(rename = "State")]
    state: &'static str,
    #[tabled(rename = "Last checked")]
    last_checked: String,
    #[tabled(rename = "ISBN")]
    isbn: String,
}

impl From<&StatusEntry> for StatusRow {
    fn from(entry: &StatusEntry) -> Self {
        Self {
            title: entry.title.clone(),
            branch: entry.branch.clone(),
            state: entry.state.label(),
            last_checked: entry.last_checked_at.map_or_else(
                || "-".to_string(),
                |at| at.format("%Y-%m-%d %H:%M UTC").to_string(),
            ),
            isbn: entry.catalog_id.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute the status command.
pub async fn execute(config_path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    logging::init_command(&config_toml)?;
    let report = operator::operator().load_status(&config_toml).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "status",
            "report": report,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Status file", &report.status_file);
    output::field("Records", report.records);
    if report.entries.is_empty() {
        output::hint("the watch list is empty");
        return Ok(());
    }

    let rows: Vec<StatusRow> = report.entries.iter().map(StatusRow::from).collect();
    output::table(&rows);

    let count = |state| report.entries.iter().filter(|e| e.state == state).count();
    output::field("Available", output::positive(count(StoredState::Available)));
    output::field("On loan", output::negative(count(StoredState::OnLoan)));
    output::field("Never checked", output::muted(count(StoredState::NeverChecked)));
    Ok(())
}
