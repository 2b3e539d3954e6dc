//! Sidebar menu: new game and quit.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};
use tracing::{info, instrument};

use crate::store::{Overlay, UiState};
use crate::views::Intent;

/// Stateless menu mapping keys to intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Menu;

impl Menu {
    /// Handles menu keys.
    #[instrument(skip(self, key))]
    pub fn handle_key(&self, key: KeyEvent) -> Option<Intent> {
        match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') => {
                info!("New game requested from menu");
                Some(Intent::OpenOverlay(Overlay::NewGame))
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
            _ => None,
        }
    }

    /// Renders the menu with the current difficulty and phase.
    #[instrument(skip(self, frame, state))]
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &UiState) {
        let items = vec![
            ListItem::new("n  New game"),
            ListItem::new("q  Quit"),
            ListItem::new(""),
            ListItem::new("1-7 / ←→ Enter  Play"),
            ListItem::new(""),
            ListItem::new(format!("Difficulty: {}", state.difficulty())),
            ListItem::new(format!("Phase: {}", state.phase())),
        ];
        let list = List::new(items)
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Menu")
                    .title_style(Style::default().add_modifier(Modifier::BOLD)),
            );
        frame.render_widget(list, area);
    }
}
