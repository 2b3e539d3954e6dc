//! Engine bridge: the only integration point with the external game engine.

mod client;
mod connector;
mod error;
mod pending;

pub use client::{EngineBridge, EngineLink, REJECTED_WITHOUT_REASON};
pub use connector::{EngineConnector, ProcessConnector, TcpConnector};
pub use error::{BridgeError, BridgeErrorKind};
pub use pending::{CommandResolver, CommandResult, CommandSink, Completion, PendingCommand};
