//! Main entry point for Tally Bot.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use tally_bot::TallyBot;
use tally_config::{Config, ConfigLoader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "tally-bot.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_bot=debug,serenity=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("Starting Tally Bot");

    let config = load_config(&args.config).await?;

    let bot = TallyBot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot failed to start: {e}");
        return Err(e.into());
    }

    Ok(())
}

/// Loads the configuration file (falling back to defaults when it does
/// not exist), applies environment overrides, and validates the result.
async fn load_config(path: &Path) -> anyhow::Result<Config> {
    let mut config = if path.exists() {
        info!("Running with config: {}", path.display());
        ConfigLoader::new(path)
            .load()
            .await
            .with_context(|| format!("Failed to load config file {}", path.display()))?
    } else {
        info!(
            "Config file {} not found, using defaults and environment",
            path.display()
        );
        Config::default()
    };

    if let Ok(token) = env::var("DISCORD_TOKEN") {
        config.discord.token = token;
    }

    if let Ok(db_path) = env::var("TALLY_DATABASE_PATH") {
        config.database.path = db_path;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
