use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "twentyq")]
#[command(about = "twentyq - play 20 Questions in the terminal", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game and enter the interactive prompt
    Play {
        /// Secret word; picked at random from the configured pool if omitted
        #[arg(long)]
        word: Option<String>,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path in use
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_service = commands::config::service(cli.config)?;

    match cli.command {
        Commands::Play { word } => {
            let config = config_service.load()?;
            logging::init(&config.logging.filter)?;
            tracing::debug!(path = %config_service.path().display(), "Configuration loaded");
            commands::play::run(&config, word).await?;
        }
        Commands::Config { action } => {
            logging::init(twentyq_core::config::DEFAULT_LOG_FILTER)?;
            match action {
                ConfigAction::Path => commands::config::print_path(&config_service),
            }
        }
    }

    Ok(())
}
