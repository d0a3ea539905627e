use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Delete confirmation: y/Enter deletes, anything else backs out
pub fn handle_confirm(app: &mut App, key: KeyEvent) {
    let confirm = match app.confirm.take() {
        Some(c) => c,
        None => {
            app.mode = Mode::Normal;
            return;
        }
    };

    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            // Delete is idempotent; a card already gone is not an error
            if app.board.remove(&confirm.item_id) {
                app.notify(format!("deleted \"{}\"", confirm.title));
            }
            app.clamp_cursors();
            app.commit();
        }
        _ => {}
    }
    app.mode = Mode::Normal;
}
