//! Telegram notification configuration.

use serde::Deserialize;

/// Telegram notification configuration.
///
/// Credentials come from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`, never
/// from the file.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default)]
    pub enabled: bool,
    /// Maximum candidates listed in a search reply (default: 5).
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

const fn default_search_limit() -> usize {
    5
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            search_limit: default_search_limit(),
        }
    }
}
