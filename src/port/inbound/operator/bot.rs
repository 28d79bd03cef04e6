//! Chat bot use cases for operator-facing adapters.

use async_trait::async_trait;

use crate::error::Result;

/// Start the command bot.
#[derive(Debug, Clone)]
pub struct BotRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,
    /// Serve a liveness endpoint on this port.
    pub health_port: Option<u16>,
}

/// What `bot` prints before it starts polling.
#[derive(Debug, Clone)]
pub struct BotStartupSnapshot {
    pub chat_id: i64,
    pub watch_list: String,
    pub health_port: Option<u16>,
}

/// Chat bot use cases.
#[async_trait]
pub trait BotOperator: Send + Sync {
    /// Check credentials and describe the bot without starting it.
    fn prepare_bot(&self, request: &BotRequest) -> Result<BotStartupSnapshot>;

    /// Answer commands until the process is stopped.
    async fn run_bot(&self, request: BotRequest) -> Result<()>;
}
