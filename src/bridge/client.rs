//! Engine bridge: commands out, notifications in.
//!
//! A router task owns the engine stream and the table of unanswered requests.
//! The UI side only holds channel handles, so it never waits on the engine.

use std::collections::HashMap;

use connect_four_protocol::{
    Command, EngineMessage, EngineRequest, Notification, Player, ReplyStatus, decode_message,
    encode_line,
};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::bridge::{BridgeError, BridgeErrorKind, CommandResolver, CommandSink, PendingCommand};

/// Shown for a rejection that carries no reason.
pub const REJECTED_WITHOUT_REASON: &str = "Command rejected";

/// Request queued for the router task.
#[derive(Debug)]
struct Outbound {
    command: Command,
    resolver: CommandResolver,
}

/// Handle for issuing commands to a connected engine.
///
/// Cloning shares the same connection. The router task stops once every
/// handle is dropped or the engine closes its stream; unanswered commands
/// then resolve as disconnected.
#[derive(Debug, Clone)]
pub struct EngineBridge {
    requests: mpsc::UnboundedSender<Outbound>,
}

/// A connected bridge plus the notification stream it feeds.
#[derive(Debug)]
pub struct EngineLink {
    /// Command handle.
    pub bridge: EngineBridge,
    /// Notifications pushed by the engine, in arrival order.
    pub notifications: mpsc::UnboundedReceiver<Notification>,
}

impl EngineBridge {
    /// Starts a router task over an engine byte stream.
    ///
    /// Must be called inside a tokio runtime.
    #[instrument(skip(reader, writer))]
    pub fn spawn<R, W>(reader: R, writer: W) -> EngineLink
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (notification_tx, notification_rx) = mpsc::unbounded_channel();

        tokio::spawn(route(reader, writer, request_rx, notification_tx));
        info!("Engine bridge started");

        EngineLink {
            bridge: Self {
                requests: request_tx,
            },
            notifications: notification_rx,
        }
    }

    /// Asks the engine to drop a disc into `column`.
    #[instrument(skip(self))]
    pub fn play_column(&self, column: u8) -> PendingCommand {
        self.submit(Command::PlayColumn { column })
    }

    /// Asks the engine to start a new game.
    #[instrument(skip(self))]
    pub fn new_game(&self, difficulty: i32, starting_player: Player) -> PendingCommand {
        self.submit(Command::NewGame {
            difficulty,
            starting_player,
        })
    }

    /// Whether the router task is still accepting commands.
    pub fn is_connected(&self) -> bool {
        !self.requests.is_closed()
    }
}

impl CommandSink for EngineBridge {
    #[instrument(skip(self, command), fields(command = command.name()))]
    fn submit(&self, command: Command) -> PendingCommand {
        let (resolver, pending) = PendingCommand::channel();
        if let Err(mpsc::error::SendError(outbound)) =
            self.requests.send(Outbound { command, resolver })
        {
            warn!("Engine bridge closed, command not sent");
            outbound.resolver.resolve(Err(BridgeError::disconnected()));
        }
        pending
    }
}

/// Router loop: writes requests, reads replies and events.
async fn route<R, W>(
    reader: R,
    mut writer: W,
    mut requests: mpsc::UnboundedReceiver<Outbound>,
    notifications: mpsc::UnboundedSender<Notification>,
) where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut pending: HashMap<u64, (Command, CommandResolver)> = HashMap::new();
    let mut next_id: u64 = 1;

    loop {
        tokio::select! {
            outbound = requests.recv() => {
                let Some(Outbound { command, resolver }) = outbound else {
                    info!("All bridge handles dropped, stopping router");
                    break;
                };
                let id = next_id;
                next_id += 1;
                match write_request(&mut writer, EngineRequest { id, command }).await {
                    Ok(()) => {
                        debug!(id, command = command.name(), "Request sent");
                        pending.insert(id, (command, resolver));
                    }
                    Err(e) => {
                        warn!(error = %e, id, "Failed to send request, stopping router");
                        resolver.resolve(Err(e));
                        break;
                    }
                }
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => handle_line(&line, &mut pending, &notifications),
                    Ok(None) => {
                        info!("Engine closed its output");
                        break;
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to read from engine");
                        break;
                    }
                }
            }
        }
    }

    if !pending.is_empty() {
        info!(count = pending.len(), "Resolving unanswered commands as disconnected");
    }
    for (_, (_, resolver)) in pending.drain() {
        resolver.resolve(Err(BridgeError::disconnected()));
    }
    requests.close();
    while let Ok(outbound) = requests.try_recv() {
        outbound.resolver.resolve(Err(BridgeError::disconnected()));
    }
}

async fn write_request<W>(writer: &mut W, request: EngineRequest) -> Result<(), BridgeError>
where
    W: AsyncWrite + Unpin,
{
    let line = encode_line(&request)?;
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Dispatches one engine line. Bad lines are logged and skipped.
fn handle_line(
    line: &str,
    pending: &mut HashMap<u64, (Command, CommandResolver)>,
    notifications: &mpsc::UnboundedSender<Notification>,
) {
    if line.trim().is_empty() {
        return;
    }
    let message = match decode_message(line) {
        Ok(message) => message,
        Err(e) => {
            warn!(error = %e, line = %line, "Skipping undecodable engine line");
            return;
        }
    };

    match message {
        EngineMessage::Reply {
            id,
            status,
            message,
        } => {
            let Some((command, resolver)) = pending.remove(&id) else {
                warn!(id, "Reply for unknown request");
                return;
            };
            let result = match status {
                ReplyStatus::Ok => Ok(()),
                ReplyStatus::Rejected => Err(BridgeError::new(BridgeErrorKind::Rejected(
                    message
                        .filter(|text| !text.trim().is_empty())
                        .unwrap_or_else(|| REJECTED_WITHOUT_REASON.to_string()),
                ))),
            };
            debug!(id, command = command.name(), ok = result.is_ok(), "Reply received");
            resolver.resolve(result);
        }
        EngineMessage::Event(notification) => {
            if notifications.send(notification).is_err() {
                debug!("Notification receiver dropped, discarding event");
            }
        }
    }
}
