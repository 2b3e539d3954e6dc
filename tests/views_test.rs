//! Tests for the reactive views.

use connect_four_ui::{
    AdvantageUpdate, AppPhase, BOARD_COLUMNS, BOARD_ROWS, BalanceView, BoardView, CellCoord,
    CellUpdate, CellView, DifficultyInput, GameStateUpdate, Intent, Menu, NewGameModal,
    Notification, NotificationHub, Occupant, Overlay, Player, StatusView, UiStore, Winner,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn cell(row: u8, column: u8, occupant: Occupant, highlighted: bool) -> Notification {
    Notification::Cell(CellUpdate {
        row,
        column,
        occupant,
        highlighted,
    })
}

#[test]
fn test_board_mounts_every_cell() {
    let hub = NotificationHub::new();
    let board = BoardView::mount(&hub);
    assert_eq!(
        board.cells().len(),
        usize::from(BOARD_ROWS) * usize::from(BOARD_COLUMNS)
    );
    assert_eq!(hub.len(), board.cells().len());
}

#[test]
fn test_cell_update_reaches_only_that_cell() {
    let hub = NotificationHub::new();
    let board = BoardView::mount(&hub);

    hub.publish(&cell(3, 2, Occupant::PlayerTwo, false));

    for view in board.cells() {
        if view.coord() == CellCoord::new(3, 2) {
            assert_eq!(view.update_count(), 1);
            assert_eq!(view.state().occupant, Occupant::PlayerTwo);
        } else {
            assert_eq!(view.update_count(), 0, "cell {:?} updated", view.coord());
            assert_eq!(view.state().occupant, Occupant::Empty);
        }
    }
}

#[test]
fn test_highlight_is_applied() {
    let hub = NotificationHub::new();
    let view = CellView::mount(&hub, CellCoord::new(0, 6));

    hub.publish(&cell(0, 6, Occupant::PlayerOne, true));

    assert!(view.state().highlighted);
    assert_eq!(view.state().occupant, Occupant::PlayerOne);
}

#[test]
fn test_unmounted_cell_gets_no_updates() {
    let hub = NotificationHub::new();
    let coord = CellCoord::new(1, 1);
    let view = CellView::mount(&hub, coord);
    assert!(view.is_mounted());

    view.unmount();
    let delivered = hub.publish(&cell(1, 1, Occupant::PlayerOne, false));

    assert_eq!(delivered, 0);
    assert!(hub.is_empty());
}

#[test]
fn test_mount_unmount_churn_leaves_no_subscriptions() {
    let hub = NotificationHub::new();
    let keeper = CellView::mount(&hub, CellCoord::new(5, 6));

    for round in 0..500u32 {
        let board = BoardView::mount(&hub);
        if round % 2 == 0 {
            hub.publish(&cell(5, 6, Occupant::PlayerTwo, false));
        }
        drop(board);
    }

    assert_eq!(hub.len(), 1);
    assert_eq!(keeper.update_count(), 250);
}

#[test]
fn test_click_is_ignored_while_controls_disabled() {
    let hub = NotificationHub::new();
    let mut board = BoardView::mount(&hub);
    let mut store = UiStore::new(5);

    assert_eq!(
        board.click_column(4, store.state()),
        Some(Intent::PlayColumn(4))
    );

    store.set_open_overlay(Overlay::NewGame);
    assert_eq!(board.click_column(4, store.state()), None);
    assert_eq!(board.handle_key(key(KeyCode::Char('2')), store.state()), None);
}

#[test]
fn test_click_off_the_board_is_ignored() {
    let hub = NotificationHub::new();
    let mut board = BoardView::mount(&hub);
    let store = UiStore::new(5);
    assert_eq!(board.click_column(BOARD_COLUMNS, store.state()), None);
}

#[test]
fn test_board_keys() {
    let hub = NotificationHub::new();
    let mut board = BoardView::mount(&hub);
    let store = UiStore::new(5);

    assert_eq!(
        board.handle_key(key(KeyCode::Char('1')), store.state()),
        Some(Intent::PlayColumn(0))
    );
    assert_eq!(
        board.handle_key(key(KeyCode::Char('7')), store.state()),
        Some(Intent::PlayColumn(6))
    );
    assert_eq!(board.handle_key(key(KeyCode::Char('8')), store.state()), None);

    board.handle_key(key(KeyCode::Left), store.state());
    board.handle_key(key(KeyCode::Left), store.state());
    assert_eq!(
        board.handle_key(key(KeyCode::Enter), store.state()),
        Some(Intent::PlayColumn(4))
    );

    for _ in 0..10 {
        board.cursor_right();
    }
    assert_eq!(board.cursor(), BOARD_COLUMNS - 1);
    for _ in 0..10 {
        board.cursor_left();
    }
    assert_eq!(board.cursor(), 0);
}

#[test]
fn test_balance_tracks_advantage() {
    let hub = NotificationHub::new();
    let balance = BalanceView::mount(&hub);
    assert_eq!(balance.leader(), None);

    hub.publish(&Notification::Advantage(AdvantageUpdate { advantage: -3 }));
    assert_eq!(balance.advantage(), -3);
    assert_eq!(balance.leader(), Some(Player::PlayerTwo));

    hub.publish(&Notification::Advantage(AdvantageUpdate { advantage: 12 }));
    assert_eq!(balance.leader(), Some(Player::PlayerOne));
}

#[test]
fn test_status_follows_engine_and_store() {
    let hub = NotificationHub::new();
    let mut store = UiStore::new(5);
    let status = StatusView::mount(&hub, &store);

    hub.publish(&Notification::GameState(GameStateUpdate {
        phase: AppPhase::Finished,
        winner: Winner::Draw,
    }));
    hub.publish(&Notification::Advantage(AdvantageUpdate { advantage: 1 }));
    store.set_message("Draw!");

    let snapshot = status.status();
    assert_eq!(snapshot.phase, AppPhase::Finished);
    assert_eq!(snapshot.winner, Winner::Draw);
    assert_eq!(snapshot.advantage, 1);
    assert_eq!(status.message(), "Draw!");
}

#[test]
fn test_menu_keys() {
    let menu = Menu;
    assert_eq!(
        menu.handle_key(key(KeyCode::Char('n'))),
        Some(Intent::OpenOverlay(Overlay::NewGame))
    );
    assert_eq!(menu.handle_key(key(KeyCode::Char('q'))), Some(Intent::Quit));
    assert_eq!(menu.handle_key(key(KeyCode::Char('3'))), None);
}

#[test]
fn test_difficulty_input_is_clamped() {
    let mut input = DifficultyInput::new(9, 2, 10);
    assert_eq!(input.increase(), 10);
    assert_eq!(input.increase(), 10);

    let mut input = DifficultyInput::new(0, 2, 10);
    assert_eq!(input.value(), 2);
    assert_eq!(input.decrease(), 2);
}

#[test]
fn test_difficulty_input_at_integer_limits() {
    let mut input = DifficultyInput::new(i32::MAX, 2, i32::MAX);
    assert_eq!(input.increase(), i32::MAX);
    assert_eq!(input.decrease(), i32::MAX - 1);

    let mut input = DifficultyInput::new(i32::MIN, i32::MIN, 10);
    assert_eq!(input.decrease(), i32::MIN);
    assert_eq!(input.increase(), i32::MIN + 1);
}

#[test]
fn test_new_game_modal_flow() {
    let mut modal = NewGameModal::open(DifficultyInput::new(5, 2, 10), Player::PlayerOne);

    // Adjusting the difficulty stays inside the dialog.
    assert_eq!(modal.handle_key(key(KeyCode::Right)), None);
    assert_eq!(modal.difficulty().value(), 6);
    assert_eq!(modal.handle_key(key(KeyCode::Tab)), None);
    assert_eq!(modal.starting_player(), Player::PlayerTwo);

    assert_eq!(
        modal.handle_key(key(KeyCode::Enter)),
        Some(Intent::StartNewGame {
            difficulty: 6,
            starting_player: Player::PlayerTwo,
        })
    );
    assert_eq!(
        modal.handle_key(key(KeyCode::Esc)),
        Some(Intent::CloseOverlay)
    );
}
