//! UI state store: transient presentation state and its setters.
//!
//! The store is owned by the controller and mutated only through the setters
//! below. Observers register per [`StoreField`] and are called after a setter
//! has finished, so they always see a consistent [`UiState`].

use connect_four_protocol::AppPhase;
use derive_getters::Getters;
use derive_more::Display;
use tracing::{debug, info, instrument};

use crate::subscription::{Registry, Subscription};

/// Status message shown before anything else happens.
pub const WELCOME_MESSAGE: &str = "Welcome to Connect Four!";

/// Difficulty selected when nothing else is configured.
pub const DEFAULT_DIFFICULTY: i32 = 5;

/// Which modal overlay is open. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Overlay {
    /// Main view, no overlay.
    #[default]
    None,
    /// The new-game dialog.
    NewGame,
}

/// Individually observable parts of [`UiState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreField {
    /// [`UiState::message`].
    Message,
    /// [`UiState::controls_enabled`].
    ControlsEnabled,
    /// [`UiState::phase`].
    Phase,
    /// [`UiState::overlay`].
    Overlay,
    /// [`UiState::difficulty`].
    Difficulty,
}

/// Snapshot of the presentation state.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct UiState {
    /// Status line text.
    message: String,
    /// Whether board input is accepted.
    controls_enabled: bool,
    /// Application lifecycle stage.
    phase: AppPhase,
    /// Open overlay.
    overlay: Overlay,
    /// Selected difficulty. Not clamped here.
    difficulty: i32,
}

impl UiState {
    /// Initial state with the given difficulty.
    #[instrument]
    pub fn new(difficulty: i32) -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
            controls_enabled: true,
            phase: AppPhase::Start,
            overlay: Overlay::None,
            difficulty,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}

/// Single-writer owner of [`UiState`].
#[derive(Debug)]
pub struct UiStore {
    state: UiState,
    observers: Registry<StoreField, UiState>,
}

impl UiStore {
    /// Creates the store with its fixed defaults and the given difficulty.
    #[instrument]
    pub fn new(difficulty: i32) -> Self {
        info!(difficulty, "Creating UI store");
        Self {
            state: UiState::new(difficulty),
            observers: Registry::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Registers an observer for one field.
    #[instrument(skip(self, handler))]
    pub fn subscribe(
        &self,
        field: StoreField,
        handler: impl FnMut(&UiState) + 'static,
    ) -> Subscription {
        self.observers.subscribe(field, handler)
    }

    /// Replaces the status message.
    #[instrument(skip(self, text))]
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.state.message = text.into();
        debug!(message = %self.state.message, "Status message set");
        self.notify(&[StoreField::Message]);
    }

    /// Enables or disables board controls.
    #[instrument(skip(self))]
    pub fn set_controls_enabled(&mut self, enabled: bool) {
        self.state.controls_enabled = enabled;
        self.notify(&[StoreField::ControlsEnabled]);
    }

    /// Sets the application phase. Every transition is accepted.
    #[instrument(skip(self))]
    pub fn set_app_phase(&mut self, phase: AppPhase) {
        if self.state.phase != phase {
            info!(from = %self.state.phase, to = %phase, "Application phase changed");
        }
        self.state.phase = phase;
        self.notify(&[StoreField::Phase]);
    }

    /// Opens or closes an overlay.
    ///
    /// Controls are disabled while any overlay is open and enabled otherwise.
    /// Both fields change before any observer runs.
    #[instrument(skip(self))]
    pub fn set_open_overlay(&mut self, overlay: Overlay) {
        self.state.overlay = overlay;
        self.state.controls_enabled = overlay == Overlay::None;
        debug!(
            controls_enabled = self.state.controls_enabled,
            "Overlay changed"
        );
        self.notify(&[StoreField::Overlay, StoreField::ControlsEnabled]);
    }

    /// Stores the selected difficulty as given.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, level: i32) {
        self.state.difficulty = level;
        self.notify(&[StoreField::Difficulty]);
    }

    fn notify(&self, fields: &[StoreField]) {
        for field in fields {
            self.observers.publish(field, &self.state);
        }
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}
