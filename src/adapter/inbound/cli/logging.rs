//! Logging setup for CLI commands.

use crate::error::Result;
use crate::port::inbound::operator::configuration::LoggingRequest;

use super::{operator, output};

/// Log at the configured level, with optional overrides (`run`, `bot`).
pub fn init_service(config_toml: &str, level: Option<&str>, json: bool) -> Result<()> {
    operator::operator().init_logging(&LoggingRequest {
        config_toml: config_toml.to_string(),
        level: level.map(str::to_string),
        json,
    })
}

/// Log only what `-v` asks for, so command output stays readable.
pub fn init_command(config_toml: &str) -> Result<()> {
    let level = output::current().log_level();
    init_service(config_toml, Some(level), false)
}
