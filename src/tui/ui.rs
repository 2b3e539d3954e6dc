//! Frame layout: board, sidebar, status line and the dialog overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Renders the whole application.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let state = app.store().state();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Board + sidebar
            Constraint::Length(4), // Status
        ])
        .split(area);

    let title = Paragraph::new("Connect Four")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(27), Constraint::Length(28)])
        .split(rows[1]);

    app.board().render(frame, columns[0], state);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(4)])
        .split(columns[1]);
    app.menu().render(frame, sidebar[0], state);
    app.balance().render(frame, sidebar[1]);

    app.status().render(frame, rows[2]);

    if let Some(modal) = app.modal() {
        modal.render(frame, center_rect(area, 60, 7));
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
