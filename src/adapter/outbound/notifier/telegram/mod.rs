//! Telegram notification and command handling.
//!
//! Sends availability notifications to one chat and answers bot commands
//! for searching the catalog and editing the watch list.

mod auth;
mod command;
pub mod format;

pub mod control;
pub mod notifier;

pub use command::{bot_commands, command_help, parse_command, CommandParseError, TelegramCommand};
pub use control::TelegramControl;
pub use notifier::{run_command_bot, TelegramConfig, TelegramNotifier};
