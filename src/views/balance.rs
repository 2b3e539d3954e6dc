//! Balance view: shows which player the engine thinks is ahead.

use std::cell::Cell;
use std::rc::Rc;

use connect_four_protocol::{Notification, Player, Topic};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::notify::NotificationHub;
use crate::subscription::Subscription;

/// Half-width of the balance bar in characters.
const BAR_HALF_WIDTH: i32 = 10;

/// Reactive view of the advantage topic.
#[derive(Debug)]
pub struct BalanceView {
    advantage: Rc<Cell<i32>>,
    _subscription: Subscription,
}

impl BalanceView {
    /// Mounts the view and subscribes to advantage notifications.
    #[instrument(skip(hub))]
    pub fn mount(hub: &NotificationHub) -> Self {
        let advantage = Rc::new(Cell::new(0));
        let subscription = {
            let advantage = Rc::clone(&advantage);
            hub.subscribe(Topic::Advantage, move |notification| {
                if let Notification::Advantage(update) = notification {
                    advantage.set(update.advantage);
                }
            })
        };
        Self {
            advantage,
            _subscription: subscription,
        }
    }

    /// Latest advantage metric. Positive favors player one.
    pub fn advantage(&self) -> i32 {
        self.advantage.get()
    }

    /// The player currently ahead, if any.
    pub fn leader(&self) -> Option<Player> {
        match self.advantage() {
            0 => None,
            a if a > 0 => Some(Player::PlayerOne),
            _ => Some(Player::PlayerTwo),
        }
    }

    /// Renders a centered bar leaning toward the leading player.
    #[instrument(skip(self, frame))]
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lean = self.advantage().clamp(-BAR_HALF_WIDTH, BAR_HALF_WIDTH);
        let red = (BAR_HALF_WIDTH + lean) as usize;
        let yellow = (BAR_HALF_WIDTH - lean) as usize;
        let bar = Line::from(vec![
            Span::styled("█".repeat(red), Style::default().fg(Color::Red)),
            Span::styled("█".repeat(yellow), Style::default().fg(Color::Yellow)),
        ]);
        let caption = match self.leader() {
            Some(player) => format!("{} ahead ({:+})", player, self.advantage()),
            None => "Even".to_string(),
        };
        let widget = Paragraph::new(vec![bar, Line::from(caption)])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Balance"));
        frame.render_widget(widget, area);
    }
}
