mod confirm;
mod form;
mod mouse;
mod normal;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Esc during a drag aborts the gesture, whatever else is going on
    if app.gesture.is_active() && key.code == KeyCode::Esc {
        app.cancel_drag();
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Normal => normal::handle_normal(app, key),
        Mode::Form => form::handle_form(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
    }
}

/// Handle a mouse event (press/move/release/scroll)
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    mouse::handle_mouse(app, mouse);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, BoardConfig, Item, Lane};
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> (App, TempDir) {
        let tmp = TempDir::new().unwrap();
        let mut board = Board::new();
        board.insert(
            Item {
                id: "a".into(),
                title: "A".into(),
                description: String::new(),
            },
            Lane::Todo,
            0,
        );
        let app = App::new(board, BoardConfig::default(), tmp.path().to_path_buf());
        (app, tmp)
    }

    #[test]
    fn esc_cancels_a_drag_without_mutating_the_board() {
        let (mut app, _tmp) = test_app();
        let before = app.board.clone();
        app.gesture.start("a", Lane::Todo, 0).unwrap();
        app.gesture.hover(Lane::Done, 0);

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.gesture.dragging_id().is_none());
        assert_eq!(app.board, before);
    }

    #[test]
    fn help_overlay_swallows_the_next_key() {
        let (mut app, _tmp) = test_app();
        app.show_help = true;
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
