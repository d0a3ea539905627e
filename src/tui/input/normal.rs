use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, ConfirmState, FormState, Mode};

/// Keys in Normal mode: navigation plus entry points into the modals
pub fn handle_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Left | KeyCode::Char('h') => {
            app.focused_lane = app.focused_lane.prev();
            app.set_cursor(app.cursor());
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.focused_lane = app.focused_lane.next();
            app.set_cursor(app.cursor());
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.set_cursor(app.cursor().saturating_sub(1));
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.set_cursor(app.cursor() + 1);
        }

        KeyCode::Char('n') => {
            app.form = Some(FormState::create(app.focused_lane));
            app.mode = Mode::Form;
        }
        KeyCode::Char('e') => {
            if let Some(item) = app.focused_item() {
                app.form = Some(FormState::edit(item, app.focused_lane));
                app.mode = Mode::Form;
            }
        }
        KeyCode::Char('d') => {
            if let Some(item) = app.focused_item() {
                app.confirm = Some(ConfirmState {
                    item_id: item.id.clone(),
                    title: item.title.clone(),
                });
                app.mode = Mode::Confirm;
            }
        }
        KeyCode::Char('r') => {
            app.reload_from_disk();
        }
        _ => {}
    }
}
