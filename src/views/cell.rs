//! Board cell view: one subscription per `(row, column)`.

use std::cell::Cell;
use std::rc::Rc;

use connect_four_protocol::{CellCoord, Notification, Occupant, Topic};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use tracing::{debug, instrument};

use crate::notify::NotificationHub;
use crate::subscription::Subscription;

/// Latest state reported for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellViewState {
    /// Disc in the cell.
    pub occupant: Occupant,
    /// Part of a highlighted line.
    pub highlighted: bool,
}

/// Reactive view of a single board cell.
///
/// Holds the subscription for its coordinate; dropping the view cancels it.
#[derive(Debug)]
pub struct CellView {
    coord: CellCoord,
    state: Rc<Cell<CellViewState>>,
    updates: Rc<Cell<u64>>,
    subscription: Subscription,
}

impl CellView {
    /// Mounts a view for `coord` and subscribes to its topic.
    #[instrument(skip(hub))]
    pub fn mount(hub: &NotificationHub, coord: CellCoord) -> Self {
        let state = Rc::new(Cell::new(CellViewState::default()));
        let updates = Rc::new(Cell::new(0));

        let subscription = {
            let state = Rc::clone(&state);
            let updates = Rc::clone(&updates);
            hub.subscribe(Topic::Cell(coord), move |notification| {
                if let Notification::Cell(update) = notification {
                    state.set(CellViewState {
                        occupant: update.occupant,
                        highlighted: update.highlighted,
                    });
                    updates.set(updates.get() + 1);
                }
            })
        };

        Self {
            coord,
            state,
            updates,
            subscription,
        }
    }

    /// Coordinate this view is bound to.
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Latest reported state.
    pub fn state(&self) -> CellViewState {
        self.state.get()
    }

    /// How many notifications this view has applied.
    pub fn update_count(&self) -> u64 {
        self.updates.get()
    }

    /// Whether the view still receives notifications.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_active()
    }

    /// Tears the view down. Equivalent to dropping it.
    #[instrument(skip(self), fields(coord = ?self.coord))]
    pub fn unmount(self) {
        debug!("Unmounting cell view");
    }

    /// Styled glyph for the terminal board.
    pub fn span(&self, in_cursor_column: bool) -> Span<'static> {
        let state = self.state();
        let (glyph, mut style) = match state.occupant {
            Occupant::Empty => (" · ", Style::default().fg(Color::DarkGray)),
            Occupant::PlayerOne => (
                " ● ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Occupant::PlayerTwo => (
                " ● ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        if state.highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if in_cursor_column {
            style = style.bg(Color::Rgb(30, 30, 60));
        }
        Span::styled(glyph, style)
    }
}
