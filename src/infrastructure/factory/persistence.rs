//! Persistence factory for the status store and watch list.

use std::sync::Arc;

use crate::adapter::outbound::store::JsonFileStatusStore;
use crate::adapter::outbound::watchlist::TomlWatchList;
use crate::infrastructure::config::settings::Config;

/// The JSON status file named in `[storage]`.
#[must_use]
pub fn build_status_store(config: &Config) -> Arc<JsonFileStatusStore> {
    Arc::new(JsonFileStatusStore::new(config.storage.status_file.clone()))
}

/// The TOML watch list named in `[storage]`.
#[must_use]
pub fn build_watch_list(config: &Config) -> Arc<TomlWatchList> {
    Arc::new(TomlWatchList::new(config.storage.watch_list.clone()))
}
