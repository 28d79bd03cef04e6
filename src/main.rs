use clap::Parser;

use bookwatch::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use bookwatch::adapter::inbound::cli::output::{self, OutputConfig};
use bookwatch::adapter::inbound::cli::{
    bot, check, operator, run, search, status, watchlist,
};
use bookwatch::error::Result;
use bookwatch::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    let _ = operator::install(Box::new(Operator::new()));

    if let Err(e) = dispatch(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = cli.config.as_path();
    match cli.command {
        Commands::Run(args) => run::execute(config, &args).await,
        Commands::Bot(args) => bot::execute(config, &args).await,
        Commands::List => watchlist::list(config).await,
        Commands::Add(args) => watchlist::add(config, &args).await,
        Commands::Remove(args) => watchlist::remove(config, &args).await,
        Commands::Search(args) => search::execute(config, &args).await,
        Commands::Status => status::execute(config).await,
        Commands::Check(CheckCommand::Config) => check::config::execute(config),
        Commands::Check(CheckCommand::Telegram) => check::telegram::execute(config).await,
    }
}
