use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::{logging, operator, output};
use crate::error::Result;

/// Validate configuration and report which secrets are present.
pub fn execute(config_path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(config_path)?;
    logging::init_command(&config_toml)?;
    let report = operator::operator().check_config(&config_toml)?;
    let found = config_path.exists();

    if output::is_json() {
        output::json_output(json!({
            "command": "check.config",
            "config": config_path.display().to_string(),
            "config_found": found,
            "api_key_present": report.api_key_present,
            "branches": report.branches,
            "default_branch": report.default_branch,
            "telegram_enabled": report.telegram_enabled,
            "telegram_token_present": report.telegram_token_present,
            "telegram_chat_present": report.telegram_chat_present,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    if found {
        output::field("Config", config_path.display());
        output::success("Configuration file is valid");
    } else {
        output::field("Config", "built-in defaults");
        output::warning(&format!("{} not found", config_path.display()));
    }

    output::section("Summary");
    output::field("API URL", &report.api_url);
    output::field("Branches", report.branches);
    output::field("Default branch", &report.default_branch);
    output::field("Watch list", &report.watch_list);
    output::field("Status file", &report.status_file);
    output::field(
        "Pacing",
        format!(
            "{} ms delay, {} concurrent",
            report.request_delay_ms, report.max_concurrency
        ),
    );

    if report.api_key_present {
        output::success("Catalog API key detected");
    } else {
        output::warning("LIBRARY_API_KEY is not set (required by run, bot and search)");
    }

    if report.telegram_enabled {
        if report.telegram_ready() {
            output::success("Telegram integration configured");
        } else {
            output::warning("Telegram enabled but environment variables are missing");
            if !report.telegram_token_present {
                output::field("Missing", "TELEGRAM_BOT_TOKEN");
            }
            if !report.telegram_chat_present {
                output::field("Missing", "TELEGRAM_CHAT_ID");
            }
        }
    } else {
        output::field("Telegram", "disabled");
    }

    output::success("Configuration check complete");
    Ok(())
}
