//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use connect_four_protocol::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::app::GameSettings;
use crate::bridge::{EngineConnector, ProcessConnector, TcpConnector};

/// How to reach the engine. Exactly one of the two fields must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Command line that launches the engine (program first).
    #[serde(default)]
    command: Option<Vec<String>>,

    /// `host:port` of an engine listening on TCP.
    #[serde(default)]
    address: Option<String>,
}

impl EngineConfig {
    /// Engine launched as a child process.
    pub fn process(command: Vec<String>) -> Self {
        Self {
            command: Some(command),
            address: None,
        }
    }

    /// Engine reached over TCP.
    pub fn tcp(address: impl Into<String>) -> Self {
        Self {
            command: None,
            address: Some(address.into()),
        }
    }
}

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Engine connection.
    #[serde(default)]
    engine: EngineConfig,

    /// Difficulty selected at startup.
    #[serde(default = "default_difficulty")]
    default_difficulty: i32,

    /// Lowest selectable difficulty.
    #[serde(default = "default_min_difficulty")]
    min_difficulty: i32,

    /// Highest selectable difficulty.
    #[serde(default = "default_max_difficulty")]
    max_difficulty: i32,

    /// Who moves first by default.
    #[serde(default)]
    starting_player: Player,

    /// Where tracing output goes while the terminal is in use.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_difficulty() -> i32 {
    crate::store::DEFAULT_DIFFICULTY
}

fn default_min_difficulty() -> i32 {
    2
}

fn default_max_difficulty() -> i32 {
    10
}

fn default_log_file() -> PathBuf {
    PathBuf::from("connect_four_ui.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            default_difficulty: default_difficulty(),
            min_difficulty: default_min_difficulty(),
            max_difficulty: default_max_difficulty(),
            starting_player: Player::default(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file. Missing fields take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            default_difficulty = config.default_difficulty,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces the engine connection.
    pub fn set_engine(&mut self, engine: EngineConfig) {
        self.engine = engine;
    }

    /// Replaces the startup difficulty.
    pub fn set_default_difficulty(&mut self, difficulty: i32) {
        self.default_difficulty = difficulty;
    }

    /// Replaces the log file path.
    pub fn set_log_file(&mut self, path: impl Into<PathBuf>) {
        self.log_file = path.into();
    }

    /// Checks that the settings are usable together.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_difficulty > self.max_difficulty {
            return Err(ConfigError::new(format!(
                "min_difficulty {} exceeds max_difficulty {}",
                self.min_difficulty, self.max_difficulty
            )));
        }
        if !(self.min_difficulty..=self.max_difficulty).contains(&self.default_difficulty) {
            return Err(ConfigError::new(format!(
                "default_difficulty {} outside {}..={}",
                self.default_difficulty, self.min_difficulty, self.max_difficulty
            )));
        }
        match (&self.engine.command, &self.engine.address) {
            (Some(command), None) if command.is_empty() => {
                Err(ConfigError::new("engine.command is empty".to_string()))
            }
            (Some(_), None) | (None, Some(_)) => Ok(()),
            (None, None) => Err(ConfigError::new(
                "engine needs either a command or an address".to_string(),
            )),
            (Some(_), Some(_)) => Err(ConfigError::new(
                "engine.command and engine.address are mutually exclusive".to_string(),
            )),
        }
    }

    /// Game preferences for the controller.
    pub fn game_settings(&self) -> GameSettings {
        GameSettings::new(
            self.default_difficulty,
            self.min_difficulty,
            self.max_difficulty,
            self.starting_player,
        )
    }

    /// Builds the connector described by the engine section.
    #[instrument(skip(self))]
    pub fn connector(&self) -> Result<Box<dyn EngineConnector>, ConfigError> {
        self.validate()?;
        match (&self.engine.command, &self.engine.address) {
            (Some(command), _) => {
                let connector = ProcessConnector::from_command_line(command)
                    .map_err(|e| ConfigError::new(e.kind.to_string()))?;
                Ok(Box::new(connector))
            }
            (None, Some(address)) => Ok(Box::new(TcpConnector::new(address.clone()))),
            (None, None) => Err(ConfigError::new("no engine configured".to_string())),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
