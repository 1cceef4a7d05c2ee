use clap::Parser;
use tracing::debug;

use qfpl::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use qfpl::adapter::inbound::cli::output::{self, OutputConfig};
use qfpl::adapter::inbound::cli::{config, gameweek, league, picks};
use qfpl::adapter::outbound::fpl::LeagueDataClient;
use qfpl::error::{Error, Result};
use qfpl::infrastructure::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = run(cli).await {
        // Unavailable data was already reported by the handler.
        if !matches!(e, Error::Unavailable(_)) {
            output::error(&e.to_string());
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Config(command) = &cli.command {
        return match command {
            ConfigCommand::Show => config::execute_show(&cli.config),
            ConfigCommand::Validate => config::execute_validate(&cli.config),
        };
    }

    let settings = Config::load_or_default(&cli.config)?;
    settings
        .logging
        .with_verbosity(cli.quiet, cli.verbose)
        .init();
    debug!(config = %cli.config.display(), "Configuration loaded");

    let client = LeagueDataClient::from_config(&settings.api, settings.cache)?;

    match &cli.command {
        Commands::Gameweek => gameweek::execute(&client).await,
        Commands::League(args) => league::execute(&client, &settings, args).await,
        Commands::Representatives(args) => {
            league::execute_representatives(&client, &settings, args).await
        }
        Commands::Picks(args) => picks::execute(&client, args).await,
        Commands::Config(_) => Ok(()),
    }
}
