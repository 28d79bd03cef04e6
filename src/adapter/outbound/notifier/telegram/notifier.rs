//! Telegram notification and command handling.
//!
//! Provides the [`TelegramNotifier`] for availability notifications and
//! [`run_command_bot`], the long-polling loop that answers bot commands.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};
use teloxide::RequestError;
use tracing::{error, info, warn};

use crate::domain::NotificationEvent;
use crate::error::NotifyError;
use crate::port::Notifier;

use super::auth::command_response_for_message;
use super::command::bot_commands;
use super::control::TelegramControl;
use super::format::format_event_message;

const CHANNEL: &str = "telegram";

/// Credentials for the Telegram bot.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// The only chat that receives notifications and may send commands.
    pub chat_id: i64,
}

impl TelegramConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None` if
    /// either is missing or the chat id is not an integer.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .and_then(|s| s.trim().parse().ok())?;

        Some(Self { bot_token, chat_id })
    }
}

/// Telegram notifier that sends availability messages to one chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
    reserve_url_template: String,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: &TelegramConfig, reserve_url_template: impl Into<String>) -> Self {
        Self {
            bot: Bot::new(&config.bot_token),
            chat_id: ChatId(config.chat_id),
            reserve_url_template: reserve_url_template.into(),
        }
    }

    /// Send a plain-text message, used by `check telegram`.
    pub async fn send_text(&self, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map(|_| ())
            .map_err(notify_error)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        let text = format_event_message(event, &self.reserve_url_template);
        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map(|_| ())
            .map_err(notify_error)
    }

    fn name(&self) -> &'static str {
        CHANNEL
    }
}

fn notify_error(err: RequestError) -> NotifyError {
    match err {
        RequestError::Network(_) | RequestError::Io(_) => {
            warn!(error = %err, "Telegram unreachable");
            NotifyError::Unavailable { channel: CHANNEL }
        }
        other => NotifyError::Rejected {
            channel: CHANNEL,
            reason: other.to_string(),
        },
    }
}

/// Answer bot commands from the configured chat until the process is stopped.
pub async fn run_command_bot(config: TelegramConfig, control: TelegramControl) {
    let bot = Bot::new(&config.bot_token);
    let allowed_chat = ChatId(config.chat_id);

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!(
        chat_id = config.chat_id,
        "Telegram command listener started"
    );

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if let Some(response) =
                command_response_for_message(text, msg.chat.id, allowed_chat, &control).await
            {
                if let Err(e) = bot.send_message(msg.chat.id, response).await {
                    error!(error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;

    warn!("Telegram command listener stopped");
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_env_missing_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");

        assert!(TelegramConfig::from_env().is_none());
    }

    #[test]
    fn test_from_env_missing_chat_id() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");
        std::env::remove_var("TELEGRAM_CHAT_ID");

        assert!(TelegramConfig::from_env().is_none());

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
    }

    #[test]
    fn test_from_env_invalid_chat_id() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");
        std::env::set_var("TELEGRAM_CHAT_ID", "not-a-number");

        assert!(TelegramConfig::from_env().is_none());

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");
    }

    #[test]
    fn test_from_env_valid() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");
        std::env::set_var("TELEGRAM_CHAT_ID", "-100123");

        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "test-token");
        assert_eq!(config.chat_id, -100_123);

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");
    }

    #[test]
    fn notifier_reports_channel_name() {
        let config = TelegramConfig {
            bot_token: "123:abc".into(),
            chat_id: 1,
        };
        let notifier = TelegramNotifier::new(&config, "https://example.org/?q={title}");
        assert_eq!(notifier.name(), "telegram");
    }
}
