//! What a view asks the controller to do.

use connect_four_protocol::Player;

use crate::store::Overlay;

/// A user intent produced by a view and carried out by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Drop a disc into this column.
    PlayColumn(u8),
    /// Open the given overlay.
    OpenOverlay(Overlay),
    /// Close whatever overlay is open.
    CloseOverlay,
    /// Start a game with these settings.
    StartNewGame {
        /// Selected difficulty.
        difficulty: i32,
        /// Who moves first.
        starting_player: Player,
    },
    /// Leave the application.
    Quit,
}
