//! Tests for terminal teardown.

use connect_four_ui::tui::restore_terminal;

#[test]
fn test_restore_terminal_leaves_alternate_screen() {
    let mut out: Vec<u8> = Vec::new();
    restore_terminal(&mut out).expect("Restore failed");
    assert_eq!(out, b"\x1b[?1049l");

    // A second teardown after a partial setup is harmless.
    restore_terminal(&mut out).expect("Second restore failed");
    assert_eq!(out, b"\x1b[?1049l\x1b[?1049l");
}
