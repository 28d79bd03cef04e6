//! Diagnostic projections for operator-facing adapters.

use async_trait::async_trait;

use crate::error::Result;

/// Summary output for `check config`.
#[derive(Debug, Clone)]
pub struct ConfigCheckReport {
    pub api_url: String,
    pub branches: usize,
    pub default_branch: String,
    pub watch_list: String,
    pub status_file: String,
    pub request_delay_ms: u64,
    pub max_concurrency: usize,
    pub api_key_present: bool,
    pub telegram_enabled: bool,
    pub telegram_token_present: bool,
    pub telegram_chat_present: bool,
}

impl ConfigCheckReport {
    /// Both Telegram variables are set.
    #[must_use]
    pub const fn telegram_ready(&self) -> bool {
        self.telegram_token_present && self.telegram_chat_present
    }
}

/// Output from sending a Telegram test message.
#[derive(Debug, Clone)]
pub struct TelegramTestReceipt {
    pub masked_token: String,
    pub chat_id: String,
}

/// Diagnostics use cases for operator-facing adapters.
#[async_trait]
pub trait DiagnosticOperator: Send + Sync {
    /// Build `check config` summary.
    fn check_config(&self, config_toml: &str) -> Result<ConfigCheckReport>;

    /// Send a test message to the configured chat.
    async fn send_telegram_test(&self, config_toml: &str) -> Result<TelegramTestReceipt>;
}
