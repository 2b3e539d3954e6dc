//! Ways of reaching the engine: a child process over stdio, or a TCP socket.

use std::process::Stdio;

use tokio::net::TcpStream;
use tokio::process::Command as ProcessCommand;
use tracing::{error, info, instrument, warn};

use crate::bridge::{BridgeError, BridgeErrorKind, EngineBridge, EngineLink};

/// Opens a connection to an engine.
#[async_trait::async_trait]
pub trait EngineConnector: Send + Sync {
    /// Connects and starts the bridge router.
    async fn connect(&self) -> Result<EngineLink, BridgeError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Launches the engine as a child process and talks over its stdin/stdout.
///
/// The child's stderr is discarded because the terminal belongs to the UI.
/// The child is killed when the runtime shuts down.
#[derive(Debug, Clone)]
pub struct ProcessConnector {
    program: String,
    args: Vec<String>,
}

impl ProcessConnector {
    /// Builds a connector from a command line, program first.
    #[instrument]
    pub fn from_command_line(command: &[String]) -> Result<Self, BridgeError> {
        let (program, args) = command.split_first().ok_or_else(|| {
            BridgeError::new(BridgeErrorKind::Launch("empty engine command".to_string()))
        })?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

#[async_trait::async_trait]
impl EngineConnector for ProcessConnector {
    #[instrument(skip(self), fields(program = %self.program))]
    async fn connect(&self) -> Result<EngineLink, BridgeError> {
        info!(args = ?self.args, "Launching engine process");
        let mut child = ProcessCommand::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                error!(error = %e, "Failed to spawn engine");
                BridgeError::new(BridgeErrorKind::Launch(format!("{}: {}", self.program, e)))
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            BridgeError::new(BridgeErrorKind::Launch("engine stdin unavailable".to_string()))
        })?;
        let stdout = child.stdout.take().ok_or_else(|| {
            BridgeError::new(BridgeErrorKind::Launch("engine stdout unavailable".to_string()))
        })?;

        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => info!(program = %program, "Engine exited"),
                Ok(status) => warn!(program = %program, %status, "Engine exited with failure"),
                Err(e) => warn!(program = %program, error = %e, "Failed to wait for engine"),
            }
        });

        Ok(EngineBridge::spawn(stdout, stdin))
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Connects to an engine already listening on a TCP address.
#[derive(Debug, Clone)]
pub struct TcpConnector {
    address: String,
}

impl TcpConnector {
    /// Builds a connector for `host:port`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[async_trait::async_trait]
impl EngineConnector for TcpConnector {
    #[instrument(skip(self), fields(address = %self.address))]
    async fn connect(&self) -> Result<EngineLink, BridgeError> {
        info!("Connecting to engine");
        let stream = TcpStream::connect(&self.address).await.map_err(|e| {
            error!(error = %e, "Failed to connect to engine");
            BridgeError::new(BridgeErrorKind::Launch(format!("{}: {}", self.address, e)))
        })?;
        let (reader, writer) = stream.into_split();
        Ok(EngineBridge::spawn(reader, writer))
    }

    fn describe(&self) -> String {
        format!("tcp://{}", self.address)
    }
}
