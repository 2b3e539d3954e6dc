//! New-game dialog: difficulty and starting-player selection.

use connect_four_protocol::Player;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::views::Intent;

/// Difficulty value bounded by a configured range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyInput {
    value: i32,
    min: i32,
    max: i32,
}

impl DifficultyInput {
    /// Creates an input starting at `value`, clamped into `min..=max`.
    ///
    /// A reversed range is treated as the single value `min`.
    #[instrument]
    pub fn new(value: i32, min: i32, max: i32) -> Self {
        let max = max.max(min);
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    /// Current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Raises the value by one, stopping at the upper bound.
    pub fn increase(&mut self) -> i32 {
        self.value = self.value.saturating_add(1).min(self.max);
        self.value
    }

    /// Lowers the value by one, stopping at the lower bound.
    pub fn decrease(&mut self) -> i32 {
        self.value = self.value.saturating_sub(1).max(self.min);
        self.value
    }
}

/// State of the open new-game dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewGameModal {
    difficulty: DifficultyInput,
    starting_player: Player,
}

impl NewGameModal {
    /// Opens the dialog pre-filled with the current selections.
    #[instrument]
    pub fn open(difficulty: DifficultyInput, starting_player: Player) -> Self {
        debug!("Opening new-game dialog");
        Self {
            difficulty,
            starting_player,
        }
    }

    /// Difficulty input.
    pub fn difficulty(&self) -> DifficultyInput {
        self.difficulty
    }

    /// Selected starting player.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Switches the starting player.
    #[instrument(skip(self))]
    pub fn toggle_starting_player(&mut self) {
        self.starting_player = self.starting_player.opponent();
        info!(starting_player = %self.starting_player, "Toggled starting player");
    }

    /// Intent that starts a game with the current selections.
    pub fn confirm(&self) -> Intent {
        Intent::StartNewGame {
            difficulty: self.difficulty.value(),
            starting_player: self.starting_player,
        }
    }

    /// Intent that dismisses the dialog.
    pub fn cancel(&self) -> Intent {
        Intent::CloseOverlay
    }

    /// Handles dialog keys.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Intent> {
        match key.code {
            KeyCode::Left | KeyCode::Char('-') => {
                let level = self.difficulty.decrease();
                debug!(level, "Difficulty lowered");
                None
            }
            KeyCode::Right | KeyCode::Char('+') => {
                let level = self.difficulty.increase();
                debug!(level, "Difficulty raised");
                None
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.toggle_starting_player();
                None
            }
            KeyCode::Enter => {
                info!(difficulty = self.difficulty.value(), "New game confirmed");
                Some(self.confirm())
            }
            KeyCode::Esc => Some(self.cancel()),
            _ => None,
        }
    }

    /// Renders the dialog over `area`.
    #[instrument(skip(self, frame))]
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title("New Game")
            .style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        let difficulty = Paragraph::new(format!(
            "Difficulty  ◀ {} ▶  ({}-{})",
            self.difficulty.value(),
            self.difficulty.min(),
            self.difficulty.max()
        ))
        .alignment(Alignment::Center);
        frame.render_widget(difficulty, chunks[0]);

        let options: Vec<Span> = Player::iter()
            .map(|player| {
                let style = if player == self.starting_player {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Span::styled(format!(" [{}] ", player), style)
            })
            .collect();
        let mut first_line = vec![Span::raw("First move: ")];
        first_line.extend(options);
        frame.render_widget(
            Paragraph::new(Line::from(first_line)).alignment(Alignment::Center),
            chunks[1],
        );

        let help = Paragraph::new("←→: Difficulty | Tab: First move | Enter: Start | Esc: Cancel")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[3]);
    }
}
