mod cli;
mod commands;
mod files;
mod observability;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use herald_client::HeraldClient;
use herald_config::HeraldConfig;

use cli::{Cli, Commands};
use output::print_error;

#[tokio::main]
async fn main() {
    // Load .env file if present (before anything else)
    if let Err(e) = dotenvy::dotenv()
        && !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
    {
        eprintln!("Warning: Failed to load .env file: {e}");
    }

    observability::init_tracing();

    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = HeraldConfig::load(cli.config.as_deref()).context("Configuration error")?;

    observability::apply_logging_level(cli.log_level.as_deref().unwrap_or(&cfg.logging.level));
    tracing::debug!(api.url = %cfg.api.url, "configuration loaded");

    let format = cli.format.unwrap_or_default();
    let matcher = cfg.matching.matcher();

    match &cli.command {
        Commands::Reconcile(args) => commands::offline::reconcile(args, matcher, format)?,
        Commands::Pair(args) => commands::offline::pair(args, matcher, format)?,
        Commands::Check(args) => commands::offline::check(args, format)?,
        Commands::Recipients => {
            let client = make_client(&cfg)?;
            commands::remote::recipients(&client, format).await?;
        }
        Commands::Refresh(args) => {
            let client = make_client(&cfg)?;
            commands::remote::refresh(&client, args, matcher, format).await?;
        }
    }

    Ok(())
}

fn make_client(cfg: &HeraldConfig) -> Result<HeraldClient> {
    if cfg.api.api_key.is_none() {
        tracing::warn!("no api.api_key configured; requests will be unauthenticated");
    }
    HeraldClient::new(&cfg.api.url, cfg.api.api_key.clone(), cfg.api.timeout())
        .context("Failed to build HTTP client")
}
