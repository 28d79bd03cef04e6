//! Diagnostic operator implementation.

use async_trait::async_trait;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::diagnostic::{
    ConfigCheckReport, DiagnosticOperator, TelegramTestReceipt,
};

use super::entry::Operator;
use super::shared;

/// Text of the `check telegram` message.
#[cfg(feature = "telegram")]
const TEST_MESSAGE: &str = "📚 bookwatch test message: availability notifications will arrive here.";

#[async_trait]
impl DiagnosticOperator for Operator {
    fn check_config(&self, config_toml: &str) -> Result<ConfigCheckReport> {
        let config = Config::parse_toml(config_toml)?;

        Ok(ConfigCheckReport {
            api_url: config.catalog.api_url.clone(),
            branches: config.catalog.branches.len(),
            default_branch: config.catalog.default_branch.clone(),
            watch_list: config.storage.watch_list.display().to_string(),
            status_file: config.storage.status_file.display().to_string(),
            request_delay_ms: config.catalog.request_delay_ms,
            max_concurrency: config.catalog.max_concurrency,
            api_key_present: config.api_key.is_some(),
            telegram_enabled: config.telegram.enabled,
            telegram_token_present: shared::env_present("TELEGRAM_BOT_TOKEN"),
            telegram_chat_present: shared::env_present("TELEGRAM_CHAT_ID"),
        })
    }

    #[cfg(feature = "telegram")]
    async fn send_telegram_test(&self, config_toml: &str) -> Result<TelegramTestReceipt> {
        use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
        use crate::error::ConfigError;

        let config = Config::parse_toml(config_toml)?;
        let telegram = TelegramConfig::from_env().ok_or(ConfigError::MissingField {
            field: "TELEGRAM_BOT_TOKEN/TELEGRAM_CHAT_ID",
        })?;
        let notifier =
            TelegramNotifier::new(&telegram, config.catalog.reserve_url_template.clone());
        notifier.send_text(TEST_MESSAGE).await?;

        Ok(TelegramTestReceipt {
            masked_token: shared::mask_token(&telegram.bot_token),
            chat_id: telegram.chat_id.to_string(),
        })
    }

    #[cfg(not(feature = "telegram"))]
    async fn send_telegram_test(&self, config_toml: &str) -> Result<TelegramTestReceipt> {
        Config::parse_toml(config_toml)?;
        Err(crate::error::ConfigError::InvalidValue {
            field: "telegram",
            reason: "bookwatch was built without the `telegram` feature".to_string(),
        }
        .into())
    }
}
