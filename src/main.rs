use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use client_manager::cli::{self, Cli};
use client_manager::{config, db};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::init().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut conn = db::connect(&config)
        .await
        .context("failed to connect to database")?;

    let result = cli::run(cli.command, &mut conn).await;

    // Close on every path, but report the command's error first
    let closed = db::close(conn).await;
    result?;
    closed.context("failed to close database connection")?;

    Ok(())
}
