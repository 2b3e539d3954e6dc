//! Reactive views. Each view subscribes on mount and unsubscribes on drop.

mod balance;
mod board;
mod cell;
mod intent;
mod menu;
mod new_game;
mod status;

pub use balance::BalanceView;
pub use board::BoardView;
pub use cell::{CellView, CellViewState};
pub use intent::Intent;
pub use menu::Menu;
pub use new_game::{DifficultyInput, NewGameModal};
pub use status::{GameStatus, StatusView};
