//! Watch list operator implementation.

use async_trait::async_trait;

use crate::domain::{AvailabilityRecord, BranchCode, CatalogId, StatusSnapshot, WatchItem};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::persistence;
use crate::port::inbound::operator::watchlist::{
    AddReceipt, AddRequest, StatusEntry, StatusReport, StoredState, WatchEntry, WatchListOperator,
};
use crate::port::{StatusStore, WatchListEditor, WatchListSource};

use super::entry::Operator;
use super::shared;

#[async_trait]
impl WatchListOperator for Operator {
    async fn list_watch_items(&self, config_toml: &str) -> Result<Vec<WatchEntry>> {
        let config = Config::parse_toml(config_toml)?;
        let directory = config.catalog.directory();
        let items = persistence::build_watch_list(&config).list_items().await?;
        Ok(items
            .iter()
            .map(|item| shared::watch_entry(item, &directory))
            .collect())
    }

    async fn add_watch_item(&self, request: AddRequest) -> Result<AddReceipt> {
        let config = Config::parse_toml(&request.config_toml)?;
        let directory = config.catalog.directory();
        let branch = request
            .branch
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map_or_else(|| directory.default_code().clone(), BranchCode::new);

        let mut item = WatchItem::try_new(request.title.as_str(), branch.as_str()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "title",
                reason: e.to_string(),
            }
        })?;
        let branch_name = directory.name_of(&branch);
        if let Some(name) = branch_name {
            item = item.with_branch_name(name);
        }
        if let Some(raw) = &request.isbn {
            let id = CatalogId::parse_isbn13(raw).ok_or_else(|| ConfigError::InvalidValue {
                field: "isbn",
                reason: format!("'{raw}' is not a 13-digit ISBN"),
            })?;
            item = item.with_catalog_id(id);
        }

        let entry = shared::watch_entry(&item, &directory);
        persistence::build_watch_list(&config).add_item(item).await?;
        Ok(AddReceipt {
            entry,
            unknown_branch: branch_name.is_none(),
        })
    }

    async fn remove_watch_item(&self, config_toml: &str, title: &str) -> Result<usize> {
        let config = Config::parse_toml(config_toml)?;
        Ok(persistence::build_watch_list(&config)
            .remove_by_title(title)
            .await?)
    }

    async fn load_status(&self, config_toml: &str) -> Result<StatusReport> {
        let config = Config::parse_toml(config_toml)?;
        let items = persistence::build_watch_list(&config).list_items().await?;
        let snapshot = persistence::build_status_store(&config).load().await?;

        Ok(StatusReport {
            status_file: config.storage.status_file.display().to_string(),
            records: snapshot.len(),
            entries: items
                .iter()
                .map(|item| status_entry(item, record_for(item, &snapshot)))
                .collect(),
        })
    }
}

/// Stored record for `item`, including one still filed under its title key.
fn record_for<'s>(item: &WatchItem, snapshot: &'s StatusSnapshot) -> Option<&'s AvailabilityRecord> {
    snapshot
        .get(&item.key())
        .or_else(|| snapshot.get(&item.title_key()))
}

fn status_entry(item: &WatchItem, record: Option<&AvailabilityRecord>) -> StatusEntry {
    let (state, last_checked_at, catalog_id) = match record {
        Some(record) => (
            if record.available {
                StoredState::Available
            } else {
                StoredState::OnLoan
            },
            Some(record.last_checked_at),
            Some(record.catalog_id.to_string()),
        ),
        None => (
            StoredState::NeverChecked,
            None,
            item.catalog_id.as_ref().map(ToString::to_string),
        ),
    };
    StatusEntry {
        title: item.title.clone(),
        branch: item.display_branch().to_string(),
        state,
        last_checked_at,
        catalog_id,
    }
}
