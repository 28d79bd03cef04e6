//! Handler for the `bot` command.

use std::path::Path;

use crate::adapter::inbound::cli::command::BotArgs;
use crate::adapter::inbound::cli::{logging, operator, output};
use crate::error::Result;
use crate::port::inbound::operator::bot::BotRequest;

/// Answer Telegram commands until the process is stopped.
pub async fn execute(config_path: &Path, args: &BotArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    logging::init_service(&config_toml, None, false)?;

    let service = operator::operator();
    let request = BotRequest {
        config_toml,
        health_port: args.health_port,
    };
    let snapshot = service.prepare_bot(&request)?;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Chat ID", snapshot.chat_id);
    output::field("Watch list", &snapshot.watch_list);
    match snapshot.health_port {
        Some(port) => output::field("Health", format!("0.0.0.0:{port}")),
        None => output::field("Health", "disabled"),
    }
    output::hint("send /help to the bot for the command list");

    service.run_bot(request).await
}
