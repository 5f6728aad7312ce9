//! Heart Risk Server - Main Entry Point

use clap::Parser;
use heart_risk::cli::{cmd_predict, cmd_serve, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heart_risk=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, host, models_dir }) => {
            cmd_serve(host, port, models_dir).await?;
        }
        Some(Commands::Predict { input, models_dir, explain }) => {
            cmd_predict(&input, models_dir, explain)?;
        }
        None => {
            cmd_serve(None, None, None).await?;
        }
    }

    Ok(())
}
