use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{BoardError, Item};
use crate::ops::form::{self, CardForm};
use crate::tui::app::{App, EditBuffer, FormField, FormState, FormTarget, Mode};

/// Keys in the add/edit form
pub fn handle_form(app: &mut App, key: KeyEvent) {
    let mut state = match app.form.take() {
        Some(f) => f,
        None => {
            app.mode = Mode::Normal;
            return;
        }
    };
    state.error = None;

    match key.code {
        KeyCode::Esc => {
            // Cancel: no mutation at all
            app.mode = Mode::Normal;
            return;
        }
        KeyCode::Enter => {
            match form::validate(&state.title.text, &state.description.text, state.lane) {
                Ok(card) => {
                    submit(app, &state.target, card);
                    app.mode = Mode::Normal;
                    return;
                }
                Err(e) => state.error = Some(e.to_string()),
            }
        }
        KeyCode::Tab | KeyCode::Down => state.field = next_field(state.field),
        KeyCode::BackTab | KeyCode::Up => state.field = prev_field(state.field),
        _ => match state.field {
            FormField::Title => edit_key(&mut state.title, key),
            FormField::Description => edit_key(&mut state.description, key),
            FormField::Lane => match key.code {
                KeyCode::Left | KeyCode::Char('h') => state.lane = state.lane.prev(),
                KeyCode::Right | KeyCode::Char('l') => state.lane = state.lane.next(),
                _ => {}
            },
        },
    }

    app.form = Some(state);
}

fn next_field(field: FormField) -> FormField {
    match field {
        FormField::Title => FormField::Description,
        FormField::Description => FormField::Lane,
        FormField::Lane => FormField::Title,
    }
}

fn prev_field(field: FormField) -> FormField {
    match field {
        FormField::Title => FormField::Lane,
        FormField::Description => FormField::Title,
        FormField::Lane => FormField::Description,
    }
}

fn edit_key(buf: &mut EditBuffer, key: KeyEvent) {
    match key.code {
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => buf.delete_word(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            buf.text.clear();
            buf.cursor = 0;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => buf.insert_char(c),
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Left => buf.left(),
        KeyCode::Right => buf.right(),
        KeyCode::Home => buf.home(),
        KeyCode::End => buf.end(),
        _ => {}
    }
}

/// Apply a validated form. Create appends to the chosen lane; edit
/// rewrites the card's text and moves it to the chosen lane's end if
/// the lane changed.
fn submit(app: &mut App, target: &FormTarget, card: CardForm) {
    match target {
        FormTarget::Create => {
            let id = app.board.next_id();
            let index = app.board.lane_len(card.lane);
            app.board.insert(
                Item {
                    id: id.clone(),
                    title: card.title,
                    description: card.description,
                },
                card.lane,
                index,
            );
            app.focused_lane = card.lane;
            app.cursors[card.lane.index()] = index;
            app.notify(format!("added {}", id));
        }
        FormTarget::Edit(id) => {
            let origin = app.board.locate(id).map(|(lane, _)| lane);
            match app.board.update_text(id, card.title, card.description) {
                Ok(()) => {
                    if origin != Some(card.lane) {
                        // Clamped append at the end of the target lane
                        let _ = app.board.move_across(id, card.lane, usize::MAX);
                    }
                    app.notify(format!("updated {}", id));
                }
                // Card vanished mid-edit (external reload): log, don't crash
                Err(BoardError::ItemNotFound(_)) => {
                    app.warn(format!("card {} no longer exists", id));
                    app.mode = Mode::Normal;
                    return;
                }
                Err(e) => {
                    app.warn(e.to_string());
                    return;
                }
            }
        }
    }
    app.clamp_cursors();
    app.commit();
}
