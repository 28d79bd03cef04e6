//! Command-line interface definitions.
//!
//! Defines the CLI structure for bookwatch using `clap`. The CLI runs the
//! availability monitor, hosts the Telegram bot, edits the watch list and
//! performs diagnostic checks.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::paths;

/// Longest `--interval-minutes` accepted: one week.
pub const MAX_INTERVAL_MINUTES: u64 = 7 * 24 * 60;

/// Library book availability monitor
#[derive(Parser, Debug)]
#[command(name = "bookwatch")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the bookwatch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every watched book once, or repeatedly with --interval-minutes
    Run(RunArgs),

    /// Answer Telegram bot commands until stopped
    Bot(BotArgs),

    /// Show the watch list
    List,

    /// Add a book to the watch list
    Add(AddArgs),

    /// Remove a book from the watch list
    Remove(RemoveArgs),

    /// Search the catalog and show branch availability
    Search(SearchArgs),

    /// Show the last stored availability of each watched book
    Status,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `bookwatch check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and environment.
    Config,
    /// Send a test message to the configured Telegram chat.
    Telegram,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Check availability but send no notifications and write nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Repeat the run every N minutes until interrupted.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_INTERVAL_MINUTES))]
    pub interval_minutes: Option<u64>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `bot` subcommand.
#[derive(Args, Debug, Default)]
pub struct BotArgs {
    /// Serve a liveness endpoint on this port (defaults to HEALTH_PORT or PORT).
    #[arg(long)]
    pub health_port: Option<u16>,
}

/// Arguments for the `add` subcommand.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Book title as it appears in the catalog.
    pub title: String,

    /// Branch code (defaults to the configured default branch).
    #[arg(long)]
    pub branch: Option<String>,

    /// ISBN-13 to pin instead of resolving the title.
    #[arg(long)]
    pub isbn: Option<String>,
}

/// Arguments for the `remove` subcommand.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Title to stop watching (case-insensitive).
    pub title: String,
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Title, author or ISBN-13.
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_defaults_to_bookwatch_toml() {
        let cli = Cli::parse_from(["bookwatch", "list"]);
        assert_eq!(cli.config, PathBuf::from("bookwatch.toml"));
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::parse_from(["bookwatch", "status", "--json", "-vv", "-c", "alt.toml"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn run_flags_parse() {
        let cli = Cli::parse_from([
            "bookwatch",
            "run",
            "--dry-run",
            "--interval-minutes",
            "30",
            "--log-level",
            "debug",
            "--json-logs",
        ]);
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.dry_run);
        assert_eq!(args.interval_minutes, Some(30));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json_logs);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let result = Cli::try_parse_from(["bookwatch", "run", "--interval-minutes", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn interval_longer_than_a_week_is_rejected() {
        let week = MAX_INTERVAL_MINUTES.to_string();
        assert!(Cli::try_parse_from(["bookwatch", "run", "--interval-minutes", &week]).is_ok());

        let overflow = (u64::MAX / 60 + 1).to_string();
        let result = Cli::try_parse_from(["bookwatch", "run", "--interval-minutes", &overflow]);
        assert!(result.is_err());
    }

    #[test]
    fn add_takes_branch_and_isbn() {
        let cli = Cli::parse_from([
            "bookwatch",
            "add",
            "Cosmos",
            "--branch",
            "141321",
            "--isbn",
            "9788983711892",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.title, "Cosmos");
        assert_eq!(args.branch.as_deref(), Some("141321"));
        assert_eq!(args.isbn.as_deref(), Some("9788983711892"));
    }

    #[test]
    fn check_subcommands_parse() {
        let cli = Cli::parse_from(["bookwatch", "check", "telegram"]);
        assert!(matches!(cli.command, Commands::Check(CheckCommand::Telegram)));
    }

    #[test]
    fn bot_health_port_is_optional() {
        let cli = Cli::parse_from(["bookwatch", "bot", "--health-port", "8080"]);
        let Commands::Bot(args) = cli.command else {
            panic!("expected bot");
        };
        assert_eq!(args.health_port, Some(8080));
    }
}
