//! Storage locations.

use std::path::PathBuf;

use serde::Deserialize;

/// `[storage]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON status snapshot written after every run.
    pub status_file: PathBuf,
    /// TOML watch list.
    pub watch_list: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            status_file: PathBuf::from("status.json"),
            watch_list: PathBuf::from("watchlist.toml"),
        }
    }
}
