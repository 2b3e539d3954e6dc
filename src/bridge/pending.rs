//! Deferred command results.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use connect_four_protocol::Command;
use tokio::sync::oneshot;
use tracing::{debug, instrument};

use crate::bridge::BridgeError;

/// Outcome of a command once the engine has answered.
pub type CommandResult = Result<(), BridgeError>;

/// Anything that accepts engine commands without blocking.
///
/// [`EngineBridge`](crate::EngineBridge) is the real implementation; tests
/// substitute their own.
pub trait CommandSink {
    /// Sends `command` and returns its deferred result immediately.
    fn submit(&self, command: Command) -> PendingCommand;
}

/// Future resolving to the outcome of one command.
///
/// Resolves to [`BridgeErrorKind::Disconnected`](crate::BridgeErrorKind::Disconnected)
/// if the answering side goes away without resolving it.
#[derive(Debug)]
#[must_use = "a PendingCommand does nothing unless awaited"]
pub struct PendingCommand {
    rx: oneshot::Receiver<CommandResult>,
}

impl PendingCommand {
    /// Creates a linked resolver and pending result.
    pub fn channel() -> (CommandResolver, PendingCommand) {
        let (tx, rx) = oneshot::channel();
        (CommandResolver { tx }, PendingCommand { rx })
    }

    /// A result that is already known.
    #[instrument]
    pub fn ready(result: CommandResult) -> Self {
        let (resolver, pending) = Self::channel();
        resolver.resolve(result);
        pending
    }
}

impl Future for PendingCommand {
    type Output = CommandResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(BridgeError::disconnected())),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Sending half of a [`PendingCommand`].
#[derive(Debug)]
pub struct CommandResolver {
    tx: oneshot::Sender<CommandResult>,
}

impl CommandResolver {
    /// Resolves the linked [`PendingCommand`]. A no-op if nobody waits.
    pub fn resolve(self, result: CommandResult) {
        if self.tx.send(result).is_err() {
            debug!("Pending command dropped before resolution");
        }
    }
}

/// A command paired with its outcome, as handed back to the UI loop.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The command that was sent.
    pub command: Command,
    /// What came of it.
    pub result: CommandResult,
}
