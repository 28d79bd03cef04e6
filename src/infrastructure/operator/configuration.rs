//! Configuration operator implementation.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::configuration::{ConfigurationOperator, LoggingRequest};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn validate_config(&self, config_toml: &str) -> Result<()> {
        Config::parse_toml(config_toml).map(|_| ())
    }

    fn init_logging(&self, request: &LoggingRequest) -> Result<()> {
        let config = Config::parse_toml(&request.config_toml)?;
        config
            .logging
            .with_overrides(request.level.as_deref(), request.json)
            .init();
        Ok(())
    }
}
