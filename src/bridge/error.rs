//! Bridge error types.

use connect_four_protocol::ProtocolError;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong between the UI and the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BridgeErrorKind {
    /// The engine refused the command. Carries the engine's text verbatim.
    #[display("{_0}")]
    Rejected(String),
    /// The engine went away before answering.
    #[display("Engine disconnected")]
    Disconnected,
    /// Reading from or writing to the engine failed.
    #[display("Engine I/O error: {_0}")]
    Io(String),
    /// A message could not be encoded.
    #[display("Engine protocol error: {_0}")]
    Protocol(String),
    /// The engine process or socket could not be opened.
    #[display("Failed to start engine: {_0}")]
    Launch(String),
}

/// Bridge error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Bridge error: {} at {}:{}", kind, file, line)]
pub struct BridgeError {
    /// Error kind.
    pub kind: BridgeErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BridgeError {
    /// Creates a new bridge error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BridgeErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The engine rejected a command with `message`.
    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(BridgeErrorKind::Rejected(message.into()))
    }

    /// The engine connection is gone.
    #[track_caller]
    pub fn disconnected() -> Self {
        Self::new(BridgeErrorKind::Disconnected)
    }

    /// Text suitable for the status line.
    ///
    /// Rejections come back exactly as the engine worded them.
    pub fn user_message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<std::io::Error> for BridgeError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(BridgeErrorKind::Io(err.to_string()))
    }
}

impl From<ProtocolError> for BridgeError {
    #[track_caller]
    fn from(err: ProtocolError) -> Self {
        Self::new(BridgeErrorKind::Protocol(err.message))
    }
}
