//! Connect Four terminal front end.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use connect_four_ui::{AppConfig, Cli, tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    tui::run(config).await
}
