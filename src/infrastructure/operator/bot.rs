//! Chat bot operator implementation.

use async_trait::async_trait;

use crate::error::Result;
use crate::port::inbound::operator::bot::{BotOperator, BotRequest, BotStartupSnapshot};

use super::entry::Operator;

#[cfg(feature = "telegram")]
#[async_trait]
impl BotOperator for Operator {
    fn prepare_bot(&self, request: &BotRequest) -> Result<BotStartupSnapshot> {
        use crate::adapter::inbound::health;
        use crate::infrastructure::config::settings::Config;

        let config = Config::parse_toml(&request.config_toml)?;
        config.library_settings()?;
        let telegram = telegram::credentials()?;
        Ok(BotStartupSnapshot {
            chat_id: telegram.chat_id,
            watch_list: config.storage.watch_list.display().to_string(),
            health_port: request.health_port.or_else(health::port_from_env),
        })
    }

    async fn run_bot(&self, request: BotRequest) -> Result<()> {
        use tracing::info;

        use crate::adapter::inbound::health;
        use crate::adapter::outbound::notifier::telegram::{run_command_bot, TelegramControl};
        use crate::infrastructure::config::settings::Config;
        use crate::infrastructure::factory::{catalog, persistence};

        let config = Config::parse_toml(&request.config_toml)?;
        let telegram = telegram::credentials()?;
        let lookup = catalog::build_lookup_service(&config)?;
        let control = TelegramControl::new(lookup, persistence::build_watch_list(&config))
            .with_search_limit(config.telegram.search_limit);

        if let Some(port) = request.health_port.or_else(health::port_from_env) {
            let listener = health::bind(port).await?;
            tokio::spawn(health::serve(listener));
        }

        info!(chat_id = telegram.chat_id, "Starting Telegram command bot");
        run_command_bot(telegram, control).await;
        Ok(())
    }
}

#[cfg(feature = "telegram")]
mod telegram {
    use crate::adapter::outbound::notifier::telegram::TelegramConfig;
    use crate::error::{ConfigError, Result};

    use super::super::shared::env_present;

    /// Bot credentials, naming the first missing variable on failure.
    pub(super) fn credentials() -> Result<TelegramConfig> {
        TelegramConfig::from_env().ok_or_else(|| {
            let field = if env_present("TELEGRAM_BOT_TOKEN") {
                "TELEGRAM_CHAT_ID"
            } else {
                "TELEGRAM_BOT_TOKEN"
            };
            ConfigError::MissingField { field }.into()
        })
    }
}

#[cfg(not(feature = "telegram"))]
#[async_trait]
impl BotOperator for Operator {
    fn prepare_bot(&self, _request: &BotRequest) -> Result<BotStartupSnapshot> {
        Err(feature_missing())
    }

    async fn run_bot(&self, _request: BotRequest) -> Result<()> {
        Err(feature_missing())
    }
}

#[cfg(not(feature = "telegram"))]
fn feature_missing() -> crate::error::Error {
    crate::error::ConfigError::InvalidValue {
        field: "telegram",
        reason: "bookwatch was built without the `telegram` feature".to_string(),
    }
    .into()
}
