//! Notifications pushed by the engine.

use serde::{Deserialize, Serialize};

use crate::types::{AppPhase, CellCoord, Occupant, Winner};

/// Payload of the per-cell topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    /// Row of the cell.
    pub row: u8,
    /// Column of the cell.
    pub column: u8,
    /// New occupant.
    pub occupant: Occupant,
    /// Whether the cell is part of a highlighted (winning) line.
    #[serde(default)]
    pub highlighted: bool,
}

impl CellUpdate {
    /// The coordinate this update is addressed to.
    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.row, self.column)
    }
}

/// Payload of the global game-state topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateUpdate {
    /// Engine-side phase.
    pub phase: AppPhase,
    /// Winner, if any.
    #[serde(default)]
    pub winner: Winner,
}

/// Payload of the global advantage topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvantageUpdate {
    /// Positive favors player one, negative favors player two.
    pub advantage: i32,
}

/// A single push message from the engine, addressed by topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "topic", rename_all = "snake_case")]
pub enum Notification {
    /// Per-cell update.
    Cell(CellUpdate),
    /// Global game state.
    GameState(GameStateUpdate),
    /// Global advantage metric.
    Advantage(AdvantageUpdate),
}

impl Notification {
    /// The topic this notification is delivered on.
    pub fn topic(&self) -> Topic {
        match self {
            Self::Cell(update) => Topic::Cell(update.coord()),
            Self::GameState(_) => Topic::GameState,
            Self::Advantage(_) => Topic::Advantage,
        }
    }
}

/// Subscription key for notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Updates for exactly one cell.
    Cell(CellCoord),
    /// Game phase and winner.
    GameState,
    /// Advantage metric.
    Advantage,
}
