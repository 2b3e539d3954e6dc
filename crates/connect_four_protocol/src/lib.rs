//! Connect Four engine protocol.
//!
//! Pure data types shared by the UI and the external game engine, plus the
//! line-delimited JSON codec used on the wire. Nothing in this crate performs
//! I/O or knows anything about game rules.
//!
//! # Wire format
//!
//! ```text
//! UI -> engine  {"id":1,"command":"play_column","column":3}
//! engine -> UI  {"type":"reply","id":1,"status":"ok"}
//! engine -> UI  {"type":"event","topic":"cell","row":0,"column":3,"occupant":"player_one","highlighted":false}
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod codec;
mod command;
mod notification;
mod types;

pub use codec::{ProtocolError, decode_message, decode_request, encode_line};
pub use command::{Command, EngineMessage, EngineRequest, ReplyStatus};
pub use notification::{AdvantageUpdate, CellUpdate, GameStateUpdate, Notification, Topic};
pub use types::{AppPhase, BOARD_COLUMNS, BOARD_ROWS, CellCoord, Occupant, Player, Winner};
