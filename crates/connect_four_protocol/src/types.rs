//! Core domain types for the Connect Four front end.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Number of rows on the board. Row 0 is the bottom row.
pub const BOARD_ROWS: u8 = 6;

/// Number of columns on the board.
pub const BOARD_COLUMNS: u8 = 7;

/// One of the two players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    /// Player one (the human by default).
    #[default]
    #[display("Player One")]
    PlayerOne,
    /// Player two (the computer by default).
    #[display("Player Two")]
    PlayerTwo,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Self::PlayerOne => Self::PlayerTwo,
            Self::PlayerTwo => Self::PlayerOne,
        }
    }
}

/// What currently sits in a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupant {
    /// No disc.
    #[default]
    Empty,
    /// A disc of player one.
    PlayerOne,
    /// A disc of player two.
    PlayerTwo,
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        match player {
            Player::PlayerOne => Self::PlayerOne,
            Player::PlayerTwo => Self::PlayerTwo,
        }
    }
}

/// Outcome of a game as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// Game still open.
    #[default]
    None,
    /// Board full without four in a row.
    Draw,
    /// Player one connected four.
    PlayerOne,
    /// Player two connected four.
    PlayerTwo,
}

/// Top-level application lifecycle stage.
///
/// The engine reports its own game state with the same three values; the
/// `blank`/`running` aliases accept the engine's older names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppPhase {
    /// No game started yet.
    #[default]
    #[serde(alias = "blank")]
    Start,
    /// A game is in progress.
    #[serde(alias = "running")]
    Playing,
    /// The last game has ended.
    Finished,
}

/// A `(row, column)` board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    /// Row index, 0 at the bottom.
    pub row: u8,
    /// Column index, 0 at the left.
    pub column: u8,
}

impl CellCoord {
    /// Creates a coordinate. Coordinates off the board are allowed; nothing
    /// will ever be subscribed to them.
    pub fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Whether the coordinate lies on the 6x7 board.
    pub fn is_on_board(self) -> bool {
        self.row < BOARD_ROWS && self.column < BOARD_COLUMNS
    }

    /// Iterates every board coordinate in row-major order, bottom row first.
    pub fn all() -> impl Iterator<Item = CellCoord> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLUMNS).map(move |column| Self { row, column }))
    }
}
