//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests. Storage
//! points into a caller-owned directory and pacing is zeroed so runs
//! never sleep.

use std::path::Path;

use crate::infrastructure::config::catalog::{BranchEntry, CatalogConfig};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::storage::StorageConfig;

/// A small branch directory: Central (141001, default) and Sangdong (141321).
pub fn catalog() -> CatalogConfig {
    CatalogConfig {
        request_delay_ms: 0,
        default_branch: "141001".into(),
        branches: vec![
            BranchEntry {
                code: "141001".into(),
                name: "Central Library".into(),
            },
            BranchEntry {
                code: "141321".into(),
                name: "Sangdong Library".into(),
            },
        ],
        ..CatalogConfig::default()
    }
}

/// Config with storage files under `dir` and a dummy API key.
pub fn config(dir: &Path) -> Config {
    Config {
        catalog: catalog(),
        storage: StorageConfig {
            status_file: dir.join("status.json"),
            watch_list: dir.join("watchlist.toml"),
        },
        api_key: Some("test-key".into()),
        ..Config::default()
    }
}
