//! Commands sent to the engine and the messages it sends back.

use serde::{Deserialize, Serialize};

use crate::notification::Notification;
use crate::types::Player;

/// A request the UI makes of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Drop a disc into `column` for the human player.
    PlayColumn {
        /// Target column.
        column: u8,
    },
    /// Start a fresh game.
    NewGame {
        /// Engine search level. Bounds are a UI concern.
        difficulty: i32,
        /// Who moves first.
        starting_player: Player,
    },
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlayColumn { .. } => "play_column",
            Self::NewGame { .. } => "new_game",
        }
    }
}

/// A command tagged with the id its reply will carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineRequest {
    /// Request id, unique per connection.
    pub id: u64,
    /// The command itself.
    #[serde(flatten)]
    pub command: Command,
}

/// Whether the engine accepted a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    /// Command accepted.
    Ok,
    /// Command refused; see the reply message.
    Rejected,
}

/// Any line the engine writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineMessage {
    /// Resolution of an earlier request.
    Reply {
        /// Id of the request being answered.
        id: u64,
        /// Accepted or rejected.
        status: ReplyStatus,
        /// Human-readable reason, present on rejection.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Unsolicited push notification.
    Event(Notification),
}

impl EngineMessage {
    /// Builds an accepting reply.
    pub fn ok(id: u64) -> Self {
        Self::Reply {
            id,
            status: ReplyStatus::Ok,
            message: None,
        }
    }

    /// Builds a rejecting reply.
    pub fn rejected(id: u64, message: impl Into<String>) -> Self {
        Self::Reply {
            id,
            status: ReplyStatus::Rejected,
            message: Some(message.into()),
        }
    }
}
