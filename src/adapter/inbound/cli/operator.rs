//! Inbound operator accessor for CLI handlers.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::port::inbound::operator::port::OperatorPort;

use super::paths;

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
#[must_use]
pub fn operator() -> &'static dyn OperatorPort {
    OPERATOR
        .get()
        .expect("CLI operator not installed; call cli::operator::install from main")
        .as_ref()
}

/// Load config TOML from disk.
///
/// A missing file at the default location yields empty TOML, which parses
/// to the built-in defaults. A file named with `--config` must exist.
pub fn read_config_toml(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound && path == paths::default_config() => {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(String::new())
        }
        Err(e) => Err(ConfigError::ReadFile(e).into()),
    }
}
