//! Command-line interface for connect_four_ui.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, EngineConfig};

/// Connect Four terminal front end for an external game engine
#[derive(Parser, Debug)]
#[command(name = "connect_four_ui")]
#[command(about = "Terminal front end for a Connect Four engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Launch the engine with this command line (program first)
    #[arg(long, num_args = 1.., allow_hyphen_values = true, conflicts_with = "engine_address")]
    pub engine_command: Option<Vec<String>>,

    /// Connect to an engine listening on host:port
    #[arg(long)]
    pub engine_address: Option<String>,

    /// Starting difficulty
    #[arg(short, long)]
    pub difficulty: Option<i32>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line values over `config`.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(command) = &self.engine_command {
            config.set_engine(EngineConfig::process(command.clone()));
        }
        if let Some(address) = &self.engine_address {
            config.set_engine(EngineConfig::tcp(address.clone()));
        }
        if let Some(difficulty) = self.difficulty {
            config.set_default_difficulty(difficulty);
        }
        if let Some(path) = &self.log_file {
            config.set_log_file(path.clone());
        }
    }
}
