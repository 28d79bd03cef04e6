use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{logging, operator, output};
use crate::error::Result;

/// Test Telegram notification by sending a test message.
pub async fn execute(config_path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    logging::init_command(&config_toml)?;

    if !output::is_json() {
        output::section("Telegram Check");
        output::action("Sending", "Telegram test message");
    }
    let receipt = operator::operator()
        .send_telegram_test(&config_toml)
        .await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check.telegram",
            "masked_token": receipt.masked_token,
            "chat_id": receipt.chat_id,
            "status": "sent",
        }));
        return Ok(());
    }

    output::field("Bot token", receipt.masked_token);
    output::field("Chat ID", &receipt.chat_id);
    output::action_done("Sent", "Telegram test message");
    output::hint("check Telegram for the message");
    Ok(())
}
