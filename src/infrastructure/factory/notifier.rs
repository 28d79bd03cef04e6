//! Notifier registry factory.
//!
//! Provides factory functions for constructing the notification registry
//! with configured notifiers (logging, Telegram).

use tracing::{info, warn};

use crate::infrastructure::config::settings::Config;
use crate::port::{LogNotifier, NotifierRegistry};

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};

/// Build the notifier registry from configuration.
///
/// Always includes the log notifier. When the `telegram` feature is enabled
/// and `[telegram] enabled = true`, also registers a Telegram notifier if the
/// credentials are present in the environment.
#[cfg(feature = "telegram")]
#[must_use]
pub fn build_notifier_registry(config: &Config) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));

    if config.telegram.enabled {
        if let Some(tg_config) = TelegramConfig::from_env() {
            registry.register(Box::new(TelegramNotifier::new(
                &tg_config,
                config.catalog.reserve_url_template.clone(),
            )));
            info!("Telegram notifier enabled");
        } else {
            warn!("Telegram enabled but TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set");
        }
    }

    registry
}

/// Build the notifier registry from configuration (non-Telegram variant).
#[cfg(not(feature = "telegram"))]
#[must_use]
pub fn build_notifier_registry(config: &Config) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));

    if config.telegram.enabled {
        warn!("Telegram enabled in config but the `telegram` feature is not compiled in");
    }
    info!(notifiers = registry.len(), "Notifier registry built");

    registry
}
