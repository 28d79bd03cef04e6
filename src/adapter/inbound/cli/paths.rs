//! Default file locations.
//!
//! Bookwatch keeps its files next to where it runs: `bookwatch.toml` names
//! the watch list and status file, which default to the same directory.

use std::path::PathBuf;

/// Config file name used when `--config` is not given.
pub const CONFIG_FILE: &str = "bookwatch.toml";

/// Returns the default config file path (`./bookwatch.toml`).
#[must_use]
pub fn default_config() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}
