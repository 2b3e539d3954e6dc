//! Line-delimited JSON codec.

use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::command::{EngineMessage, EngineRequest};

/// Protocol error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Protocol error: {} at {}:{}", message, file, line)]
pub struct ProtocolError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ProtocolError {
    /// Creates a new protocol error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for ProtocolError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Serializes a message as one JSON line, including the trailing newline.
#[instrument(skip(message))]
pub fn encode_line<T: Serialize>(message: &T) -> Result<String, ProtocolError> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}

/// Parses one line written by the engine.
#[instrument]
pub fn decode_message(line: &str) -> Result<EngineMessage, ProtocolError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ProtocolError::new("Empty line"));
    }
    let message = serde_json::from_str(trimmed)?;
    debug!(?message, "Decoded engine message");
    Ok(message)
}

/// Parses one line written by the UI. Used by engines and test doubles.
#[instrument]
pub fn decode_request(line: &str) -> Result<EngineRequest, ProtocolError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ProtocolError::new("Empty line"));
    }
    Ok(serde_json::from_str(trimmed)?)
}
