//! Status view: status line plus the engine's game-state snapshot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use connect_four_protocol::{AppPhase, Notification, Topic, Winner};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::notify::NotificationHub;
use crate::store::{StoreField, UiStore};
use crate::subscription::Subscription;

/// Game status as last reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStatus {
    /// Engine-side phase.
    pub phase: AppPhase,
    /// Winner, if decided.
    pub winner: Winner,
    /// Advantage metric, positive favors player one.
    pub advantage: i32,
}

/// Reactive status view.
#[derive(Debug)]
pub struct StatusView {
    status: Rc<Cell<GameStatus>>,
    message: Rc<RefCell<String>>,
    _subscriptions: Vec<Subscription>,
}

impl StatusView {
    /// Mounts the view on the game-state and advantage topics and on the
    /// store's message field.
    #[instrument(skip(hub, store))]
    pub fn mount(hub: &NotificationHub, store: &UiStore) -> Self {
        let status = Rc::new(Cell::new(GameStatus::default()));
        let message = Rc::new(RefCell::new(store.state().message().clone()));

        let on_engine = {
            let status = Rc::clone(&status);
            move |notification: &Notification| {
                let mut current = status.get();
                match notification {
                    Notification::GameState(update) => {
                        current.phase = update.phase;
                        current.winner = update.winner;
                    }
                    Notification::Advantage(update) => current.advantage = update.advantage,
                    Notification::Cell(_) => return,
                }
                status.set(current);
            }
        };
        let on_message = {
            let message = Rc::clone(&message);
            move |state: &crate::store::UiState| {
                message.replace(state.message().clone());
            }
        };

        let subscriptions = vec![
            hub.subscribe(Topic::GameState, on_engine.clone()),
            hub.subscribe(Topic::Advantage, on_engine),
            store.subscribe(StoreField::Message, on_message),
        ];

        Self {
            status,
            message,
            _subscriptions: subscriptions,
        }
    }

    /// Latest engine snapshot.
    pub fn status(&self) -> GameStatus {
        self.status.get()
    }

    /// Status line as last published by the store.
    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    /// Renders the status line and the phase/winner summary.
    #[instrument(skip(self, frame))]
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let status = self.status();
        let outcome = match status.winner {
            Winner::None => format!("Phase: {}", status.phase),
            Winner::Draw => "Result: draw".to_string(),
            Winner::PlayerOne => "Result: Player One won".to_string(),
            Winner::PlayerTwo => "Result: Player Two won".to_string(),
        };
        let widget = Paragraph::new(vec![Line::from(self.message()), Line::from(outcome)])
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(widget, area);
    }
}
