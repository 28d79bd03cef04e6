//! Handlers for `list`, `add` and `remove`.
//!
//! These commands edit the watch list file directly and never call the
//! catalog, so they work without `LIBRARY_API_KEY`.

use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::command::{AddArgs, RemoveArgs};
use crate::adapter::inbound::cli::{logging, operator, output};
use crate::error::Result;
use crate::port::inbound::operator::watchlist::{AddRequest, WatchEntry};

#[derive(Tabled, Serialize)]
struct WatchRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Branch")]
    branch: String,
    #[tabled(rename = "Code")]
    branch_code: String,
    #[tabled(rename = "ISBN")]
    isbn: String,
}

impl WatchRow {
    fn new(position: usize, entry: &WatchEntry) -> Self {
        Self {
            position,
            title: entry.title.clone(),
            branch: entry.branch.clone(),
            branch_code: entry.branch_code.clone(),
            isbn: entry.catalog_id.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Print the watch list in file order.
pub async fn list(config_path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    logging::init_command(&config_toml)?;
    let entries = operator::operator().list_watch_items(&config_toml).await?;

    if !output::is_json() {
        output::section(&format!("Watch list ({})", entries.len()));
    }
    if entries.is_empty() {
        output::hint("add a book with `bookwatch add <title>`");
        return Ok(());
    }

    let rows: Vec<WatchRow> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| WatchRow::new(index + 1, entry))
        .collect();
    output::table(&rows);
    Ok(())
}

/// Append a book to the watch list.
pub async fn add(config_path: &Path, args: &AddArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    logging::init_command(&config_toml)?;
    let receipt = operator::operator()
        .add_watch_item(AddRequest {
            config_toml,
            title: args.title.clone(),
            branch: args.branch.clone(),
            isbn: args.isbn.clone(),
        })
        .await?;
    let entry = &receipt.entry;

    if output::is_json() {
        output::json_output(json!({
            "command": "add",
            "entry": entry,
            "unknown_branch": receipt.unknown_branch,
        }));
        return Ok(());
    }
    if receipt.unknown_branch {
        output::warning(&format!(
            "branch {} is not in the configured directory",
            entry.branch_code
        ));
    }
    output::success(&format!("Watching '{}' @ {}", entry.title, entry.branch));
    if entry.catalog_id.is_none() {
        output::hint("the ISBN is looked up on the next run");
    }
    Ok(())
}

/// Remove every entry with a matching title.
pub async fn remove(config_path: &Path, args: &RemoveArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    logging::init_command(&config_toml)?;
    let title = args.title.trim();
    let removed = operator::operator()
        .remove_watch_item(&config_toml, title)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "remove",
            "title": title,
            "removed": removed,
        }));
        return Ok(());
    }
    if removed == 0 {
        output::warning(&format!("'{title}' is not on the watch list"));
    } else {
        output::success(&format!("Stopped watching '{title}' ({removed} removed)"));
    }
    Ok(())
}
