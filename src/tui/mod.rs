//! Terminal front end: terminal setup, file logging and the UI loop.

mod ui;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::Duration;
use tracing::{error, info, instrument};

use crate::app::App;
use crate::bridge::{Completion, EngineLink};
use crate::config::AppConfig;

pub use ui::draw;

/// Routes tracing output to `path` so it does not interfere with the UI.
pub fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Connects to the engine and runs the UI until the user quits.
#[instrument(skip(config))]
pub async fn run(config: AppConfig) -> Result<()> {
    init_logging(config.log_file())?;
    info!("Starting Connect Four UI");

    let connector = config.connector()?;
    info!(engine = %connector.describe(), "Connecting to engine");
    let link = connector.connect().await?;

    enable_raw_mode()?;
    let mut terminal = match open_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            error!(error = %err, "Failed to set up terminal");
            restore_terminal(&mut io::stdout())?;
            return Err(err);
        }
    };

    let res = run_loop(&mut terminal, &config, link);

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("Connect Four UI stopped");
    res
}

fn open_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode and the alternate screen.
///
/// Safe to call when setup got only part of the way.
pub fn restore_terminal<W: Write>(writer: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(writer, LeaveAlternateScreen)
}

/// Drains engine traffic, draws, then waits briefly for a key.
#[instrument(skip_all)]
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
    link: EngineLink,
) -> Result<()> {
    let EngineLink {
        bridge,
        mut notifications,
    } = link;
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<Completion>();
    let mut app = App::new(config.game_settings(), Box::new(bridge), completion_tx);

    loop {
        loop {
            match notifications.try_recv() {
                Ok(notification) => app.handle_notification(notification),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    app.engine_disconnected();
                    break;
                }
            }
        }
        while let Ok(completion) = completion_rx.try_recv() {
            app.handle_completion(completion);
        }

        terminal.draw(|frame| draw(frame, &app))?;

        if app.should_quit() {
            info!("Leaving UI loop");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }
    }
}
