//! Application controller: owns the store and the views, turns intents into
//! engine commands, and folds engine traffic back into UI state.

use connect_four_protocol::{AppPhase, Command, Notification, Player, Winner};
use crossterm::event::KeyEvent;
use derive_getters::Getters;
use derive_new::new;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::bridge::{CommandResult, CommandSink, Completion};
use crate::notify::NotificationHub;
use crate::store::{Overlay, UiStore};
use crate::views::{BalanceView, BoardView, DifficultyInput, Intent, Menu, NewGameModal, StatusView};

/// Message shown after the engine goes away.
pub const DISCONNECTED_MESSAGE: &str = "Engine disconnected";

/// Game preferences the controller starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct GameSettings {
    /// Difficulty selected at startup.
    default_difficulty: i32,
    /// Lowest difficulty the dialog offers.
    min_difficulty: i32,
    /// Highest difficulty the dialog offers.
    max_difficulty: i32,
    /// Who moves first unless changed in the dialog.
    starting_player: Player,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(
            crate::store::DEFAULT_DIFFICULTY,
            2,
            10,
            Player::PlayerOne,
        )
    }
}

/// The controller. Single writer of [`UiStore`].
///
/// Everything here runs on the UI loop. Engine commands are handed to a
/// [`CommandSink`]; their outcomes come back later as [`Completion`]s through
/// the channel given to [`App::new`] and are applied with
/// [`App::handle_completion`].
pub struct App {
    store: UiStore,
    hub: NotificationHub,
    board: BoardView,
    balance: BalanceView,
    status: StatusView,
    menu: Menu,
    modal: Option<NewGameModal>,
    settings: GameSettings,
    engine: Box<dyn CommandSink>,
    completions: mpsc::UnboundedSender<Completion>,
    connected: bool,
    quit: bool,
}

impl App {
    /// Creates the controller and mounts every view.
    #[instrument(skip(engine, completions))]
    pub fn new(
        settings: GameSettings,
        engine: Box<dyn CommandSink>,
        completions: mpsc::UnboundedSender<Completion>,
    ) -> Self {
        let store = UiStore::new(settings.default_difficulty);
        let hub = NotificationHub::new();
        let board = BoardView::mount(&hub);
        let balance = BalanceView::mount(&hub);
        let status = StatusView::mount(&hub, &store);
        info!(subscriptions = hub.len(), "Application mounted");
        Self {
            store,
            hub,
            board,
            balance,
            status,
            menu: Menu,
            modal: None,
            settings,
            engine,
            completions,
            connected: true,
            quit: false,
        }
    }

    /// UI state store.
    pub fn store(&self) -> &UiStore {
        &self.store
    }

    /// Notification hub the views are mounted on.
    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }

    /// Board view.
    pub fn board(&self) -> &BoardView {
        &self.board
    }

    /// Balance view.
    pub fn balance(&self) -> &BalanceView {
        &self.balance
    }

    /// Status view.
    pub fn status(&self) -> &StatusView {
        &self.status
    }

    /// Sidebar menu.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The new-game dialog, while open.
    pub fn modal(&self) -> Option<&NewGameModal> {
        self.modal.as_ref()
    }

    /// Current game preferences.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Whether the engine connection is believed to be alive.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Routes a key to the dialog if it is open, else to the menu and board.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let intent = match self.modal.as_mut() {
            Some(modal) => modal.handle_key(key),
            None => self
                .menu
                .handle_key(key)
                .or_else(|| self.board.handle_key(key, self.store.state())),
        };
        if let Some(intent) = intent {
            self.dispatch(intent);
        }
    }

    /// Carries out a view intent.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::PlayColumn(column) => {
                if !*self.store.state().controls_enabled() {
                    debug!(column, "Controls disabled, dropping play intent");
                    return;
                }
                self.submit(Command::PlayColumn { column });
            }
            Intent::OpenOverlay(Overlay::NewGame) => {
                let difficulty = DifficultyInput::new(
                    *self.store.state().difficulty(),
                    self.settings.min_difficulty,
                    self.settings.max_difficulty,
                );
                self.modal = Some(NewGameModal::open(difficulty, self.settings.starting_player));
                self.store.set_open_overlay(Overlay::NewGame);
            }
            Intent::OpenOverlay(Overlay::None) | Intent::CloseOverlay => {
                self.modal = None;
                self.store.set_open_overlay(Overlay::None);
            }
            Intent::StartNewGame {
                difficulty,
                starting_player,
            } => {
                self.settings.starting_player = starting_player;
                self.store.set_difficulty(difficulty);
                self.modal = None;
                self.store.set_open_overlay(Overlay::None);
                // Engine pushes for the new game may beat its reply, so the
                // board is reset before the command goes out.
                self.board = BoardView::mount(&self.hub);
                self.balance = BalanceView::mount(&self.hub);
                self.submit(Command::NewGame {
                    difficulty,
                    starting_player,
                });
            }
            Intent::Quit => {
                info!("Quit requested");
                self.quit = true;
            }
        }
    }

    /// Sends a command and arranges for its outcome to come back as a
    /// [`Completion`].
    #[instrument(skip(self, command), fields(command = command.name()))]
    fn submit(&mut self, command: Command) {
        let pending = self.engine.submit(command);
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let result = pending.await;
            if completions.send(Completion { command, result }).is_err() {
                debug!("UI loop gone, completion discarded");
            }
        });
    }

    /// Delivers an engine notification to the views and applies game-state
    /// changes to the store.
    #[instrument(skip(self))]
    pub fn handle_notification(&mut self, notification: Notification) {
        self.hub.publish(&notification);
        if let Notification::GameState(update) = notification {
            self.store.set_app_phase(update.phase);
            if update.phase == AppPhase::Finished {
                match update.winner {
                    Winner::PlayerOne => self.store.set_message("Player One wins!"),
                    Winner::PlayerTwo => self.store.set_message("Player Two wins!"),
                    Winner::Draw => self.store.set_message("Draw!"),
                    Winner::None => {}
                }
            }
        }
    }

    /// Applies the outcome of a finished command.
    #[instrument(skip(self, completion), fields(command = completion.command.name()))]
    pub fn handle_completion(&mut self, completion: Completion) {
        let Completion { command, result } = completion;
        self.apply_result(command, result);
    }

    fn apply_result(&mut self, command: Command, result: CommandResult) {
        match (command, result) {
            (
                Command::NewGame {
                    difficulty,
                    starting_player,
                },
                Ok(()),
            ) => {
                info!(difficulty, %starting_player, "New game started");
                self.store.set_app_phase(AppPhase::Playing);
                self.store
                    .set_message(format!("New game: {starting_player} moves first"));
            }
            (Command::PlayColumn { column }, Ok(())) => {
                debug!(column, "Move accepted");
            }
            (_, Err(err)) => {
                warn!(error = %err, "Command failed");
                self.store.set_message(err.user_message());
            }
        }
    }

    /// Records that the engine connection closed. Repeated calls are no-ops.
    #[instrument(skip(self))]
    pub fn engine_disconnected(&mut self) {
        if !self.connected {
            return;
        }
        warn!("Engine connection lost");
        self.connected = false;
        self.store.set_message(DISCONNECTED_MESSAGE);
    }
}
