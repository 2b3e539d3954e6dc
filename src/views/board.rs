//! Column/board view: the 6x7 grid of cell views.

use connect_four_protocol::{BOARD_COLUMNS, BOARD_ROWS, CellCoord};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::notify::NotificationHub;
use crate::store::UiState;
use crate::views::{CellView, Intent};

/// Grid of [`CellView`]s plus a column cursor.
///
/// Holds no board state of its own; every cell is driven by notifications.
#[derive(Debug)]
pub struct BoardView {
    cells: Vec<CellView>,
    cursor: u8,
}

impl BoardView {
    /// Mounts one cell view per board coordinate.
    #[instrument(skip(hub))]
    pub fn mount(hub: &NotificationHub) -> Self {
        let cells: Vec<CellView> = CellCoord::all()
            .map(|coord| CellView::mount(hub, coord))
            .collect();
        debug!(cells = cells.len(), "Board view mounted");
        Self {
            cells,
            cursor: BOARD_COLUMNS / 2,
        }
    }

    /// The view bound to `coord`, if it is on the board.
    pub fn cell(&self, coord: CellCoord) -> Option<&CellView> {
        if !coord.is_on_board() {
            return None;
        }
        self.cells
            .get(usize::from(coord.row) * usize::from(BOARD_COLUMNS) + usize::from(coord.column))
    }

    /// All cell views, bottom row first.
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    /// Column under the cursor.
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Moves the cursor one column left, stopping at the edge.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one column right, stopping at the edge.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(BOARD_COLUMNS - 1);
    }

    /// Turns a click on `column` into a play intent.
    ///
    /// Ignored while controls are disabled or when the column is off the board.
    #[instrument(skip(self, state))]
    pub fn click_column(&mut self, column: u8, state: &UiState) -> Option<Intent> {
        if !*state.controls_enabled() {
            debug!("Controls disabled, ignoring column click");
            return None;
        }
        if column >= BOARD_COLUMNS {
            debug!("Column off the board, ignoring click");
            return None;
        }
        self.cursor = column;
        info!(column, "Column clicked");
        Some(Intent::PlayColumn(column))
    }

    /// Handles board keys: digits pick a column, arrows move the cursor,
    /// Enter/Space play the cursor column.
    #[instrument(skip(self, key, state))]
    pub fn handle_key(&mut self, key: KeyEvent, state: &UiState) -> Option<Intent> {
        match key.code {
            KeyCode::Left => {
                self.cursor_left();
                None
            }
            KeyCode::Right => {
                self.cursor_right();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click_column(self.cursor, state),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit @ 1..=7) => self.click_column(digit as u8 - 1, state),
                _ => None,
            },
            _ => None,
        }
    }

    /// Renders the grid, top row first.
    #[instrument(skip(self, frame, state))]
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &UiState) {
        let header: Vec<Span> = (0..BOARD_COLUMNS)
            .map(|column| {
                let label = if column == self.cursor {
                    format!("[{}]", column + 1)
                } else {
                    format!(" {} ", column + 1)
                };
                Span::styled(label, Style::default().fg(Color::Cyan))
            })
            .collect();

        let mut lines = vec![Line::from(header)];
        for row in (0..BOARD_ROWS).rev() {
            let spans: Vec<Span> = (0..BOARD_COLUMNS)
                .filter_map(|column| self.cell(CellCoord::new(row, column)))
                .map(|cell| cell.span(cell.coord().column == self.cursor))
                .collect();
            lines.push(Line::from(spans));
        }

        let title = if *state.controls_enabled() {
            "Board"
        } else {
            "Board (locked)"
        };
        let board = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(board, area);
    }
}
