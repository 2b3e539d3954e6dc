//! Connect Four front end - UI coordination for an external game engine
//!
//! The engine owns the board and the rules. This crate owns what the player
//! sees: a single-writer UI state store, a topic-addressed notification hub
//! that feeds per-cell views, and a non-blocking bridge that sends commands
//! to the engine and hands back deferred results.
//!
//! # Architecture
//!
//! - **Store**: [`UiStore`] holds [`UiState`] and notifies field observers
//! - **Hub**: [`NotificationHub`] routes engine pushes to subscribed views
//! - **Bridge**: [`EngineBridge`] speaks line-delimited JSON to the engine
//! - **Views**: board, balance, status, menu and the new-game dialog
//! - **App**: [`App`] turns view intents into commands and results into state
//!
//! # Example
//!
//! ```no_run
//! use connect_four_ui::{AppConfig, EngineConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut config = AppConfig::default();
//! config.set_engine(EngineConfig::tcp("127.0.0.1:4000"));
//! config.validate()?;
//! let link = config.connector()?.connect().await?;
//! let _pending = link.bridge.play_column(3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod bridge;
mod cli;
mod config;
mod notify;
mod store;
mod subscription;
mod views;

/// Terminal front end.
pub mod tui;

// Crate-level exports - Controller
pub use app::{App, DISCONNECTED_MESSAGE, GameSettings};

// Crate-level exports - Engine bridge
pub use bridge::{
    BridgeError, BridgeErrorKind, CommandResolver, CommandResult, CommandSink, Completion,
    EngineBridge, EngineConnector, EngineLink, PendingCommand, ProcessConnector,
    REJECTED_WITHOUT_REASON, TcpConnector,
};

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, EngineConfig};

// Crate-level exports - State and notifications
pub use notify::NotificationHub;
pub use store::{DEFAULT_DIFFICULTY, Overlay, StoreField, UiState, UiStore, WELCOME_MESSAGE};
pub use subscription::{Registry, Subscription, SubscriptionId};

// Crate-level exports - Views
pub use views::{
    BalanceView, BoardView, CellView, CellViewState, DifficultyInput, GameStatus, Intent, Menu,
    NewGameModal, StatusView,
};

// Crate-level exports - Protocol types
pub use connect_four_protocol::{
    AdvantageUpdate, AppPhase, BOARD_COLUMNS, BOARD_ROWS, CellCoord, CellUpdate, Command,
    GameStateUpdate, Notification, Occupant, Player, Topic, Winner,
};
