//! Tests for the UI state store and its field observers.

use std::cell::RefCell;
use std::rc::Rc;

use connect_four_ui::{AppPhase, Overlay, StoreField, UiState, UiStore, WELCOME_MESSAGE};

#[test]
fn test_initial_state() {
    let store = UiStore::new(5);
    let state = store.state();
    assert_eq!(*state.phase(), AppPhase::Start);
    assert_eq!(*state.overlay(), Overlay::None);
    assert!(*state.controls_enabled());
    assert_eq!(state.message(), WELCOME_MESSAGE);
    assert_eq!(*state.difficulty(), 5);
}

#[test]
fn test_overlay_toggles_controls() {
    let mut store = UiStore::new(5);

    store.set_open_overlay(Overlay::NewGame);
    assert_eq!(*store.state().overlay(), Overlay::NewGame);
    assert!(!*store.state().controls_enabled());

    store.set_open_overlay(Overlay::None);
    assert_eq!(*store.state().overlay(), Overlay::None);
    assert!(*store.state().controls_enabled());
}

/// Observer that records the overlay and controls flag it was shown.
fn record(seen: Rc<RefCell<Vec<(Overlay, bool)>>>) -> impl FnMut(&UiState) + 'static {
    move |state| {
        seen.borrow_mut()
            .push((*state.overlay(), *state.controls_enabled()))
    }
}

#[test]
fn test_observers_never_see_inconsistent_overlay_state() {
    let mut store = UiStore::new(5);
    let seen: Rc<RefCell<Vec<(Overlay, bool)>>> = Rc::new(RefCell::new(Vec::new()));

    let _overlay = store.subscribe(StoreField::Overlay, record(Rc::clone(&seen)));
    let _controls = store.subscribe(StoreField::ControlsEnabled, record(Rc::clone(&seen)));

    store.set_open_overlay(Overlay::NewGame);
    store.set_open_overlay(Overlay::None);
    store.set_open_overlay(Overlay::NewGame);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 6);
    for (overlay, controls_enabled) in seen.iter() {
        assert_eq!(*controls_enabled, *overlay == Overlay::None);
    }
}

#[test]
fn test_setting_same_message_twice_is_idempotent() {
    let mut once = UiStore::new(5);
    once.set_message("Your move");

    let mut twice = UiStore::new(5);
    twice.set_message("Your move");
    twice.set_message("Your move");

    assert_eq!(once.state(), twice.state());
}

#[test]
fn test_phase_accepts_any_transition() {
    let mut store = UiStore::new(5);
    store.set_app_phase(AppPhase::Finished);
    assert_eq!(*store.state().phase(), AppPhase::Finished);
    store.set_app_phase(AppPhase::Start);
    assert_eq!(*store.state().phase(), AppPhase::Start);
    store.set_app_phase(AppPhase::Playing);
    assert_eq!(*store.state().phase(), AppPhase::Playing);
}

#[test]
fn test_difficulty_is_stored_unclamped() {
    let mut store = UiStore::new(5);
    store.set_difficulty(42);
    assert_eq!(*store.state().difficulty(), 42);
    store.set_difficulty(-3);
    assert_eq!(*store.state().difficulty(), -3);
}

#[test]
fn test_observer_only_called_for_its_field() {
    let mut store = UiStore::new(5);
    let calls = Rc::new(RefCell::new(0));
    let _sub = {
        let calls = Rc::clone(&calls);
        store.subscribe(StoreField::Message, move |_| *calls.borrow_mut() += 1)
    };

    store.set_difficulty(7);
    store.set_app_phase(AppPhase::Playing);
    assert_eq!(*calls.borrow(), 0);

    store.set_message("hello");
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_dropped_observer_stops_receiving() {
    let mut store = UiStore::new(5);
    let calls = Rc::new(RefCell::new(0));
    let sub = {
        let calls = Rc::clone(&calls);
        store.subscribe(StoreField::Phase, move |_| *calls.borrow_mut() += 1)
    };

    store.set_app_phase(AppPhase::Playing);
    drop(sub);
    store.set_app_phase(AppPhase::Finished);

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_set_controls_enabled_leaves_overlay_alone() {
    let mut store = UiStore::new(5);
    store.set_controls_enabled(false);
    assert!(!*store.state().controls_enabled());
    assert_eq!(*store.state().overlay(), Overlay::None);

    store.set_controls_enabled(true);
    assert!(*store.state().controls_enabled());
}
