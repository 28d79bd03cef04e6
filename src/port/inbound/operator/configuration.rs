//! Configuration use cases for operator-facing adapters.

use crate::error::Result;

/// Logging overrides from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct LoggingRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,
    /// Replaces `[logging] level` when set.
    pub level: Option<String>,
    /// Forces JSON log lines.
    pub json: bool,
}

/// Configuration use cases.
pub trait ConfigurationOperator: Send + Sync {
    /// Parse and validate configuration without acting on it.
    fn validate_config(&self, config_toml: &str) -> Result<()>;

    /// Install the global tracing subscriber.
    fn init_logging(&self, request: &LoggingRequest) -> Result<()>;
}
