use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::{App, Mode, PendingDrag};
use crate::tui::layout::BoardLayout;

/// Cells of pointer travel before a press becomes a drag. Below this,
/// press + release is a click that just focuses the card.
const DRAG_THRESHOLD: u16 = 1;

/// All pointer input funnels through here; the modals are keyboard-only,
/// so the mouse is live only in Normal mode.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.mode != Mode::Normal {
        return;
    }
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => on_press(app, x, y),
        MouseEventKind::Drag(MouseButton::Left) => on_move(app, x, y),
        MouseEventKind::Up(MouseButton::Left) => on_release(app, x, y),
        MouseEventKind::ScrollUp => on_scroll(app, x, y, -1),
        MouseEventKind::ScrollDown => on_scroll(app, x, y, 1),
        _ => {}
    }
}

/// Press focuses the card and arms a pending drag.
fn on_press(app: &mut App, x: u16, y: u16) {
    let Some(lane) = app.layout.lane_at(x, y) else {
        return;
    };
    let Some(slot) = app.layout.card_at(x, y) else {
        return;
    };
    let item_id = slot.id.clone();
    app.focused_lane = lane;
    app.cursors[lane.index()] = slot.lane_index;
    app.pending_drag = Some(PendingDrag {
        item_id,
        pressed: (x, y),
    });
}

/// Movement promotes the pending drag past the threshold, then keeps
/// the placeholder following the pointer. Hover is read-only on the
/// board and may fire on every pointer move.
fn on_move(app: &mut App, x: u16, y: u16) {
    if !app.gesture.is_active()
        && let Some(pending) = &app.pending_drag
        && manhattan(pending.pressed, (x, y)) >= u32::from(DRAG_THRESHOLD)
    {
        let pending = app.pending_drag.take().unwrap();
        match app.board.locate(&pending.item_id) {
            Some((lane, index)) => {
                // Cannot be AlreadyActive: we just checked; but if it
                // ever is, the existing gesture wins and this one dies
                if app.gesture.start(&pending.item_id, lane, index).is_err() {
                    return;
                }
            }
            // Card vanished between press and move (external reload)
            None => return,
        }
    }

    if !app.gesture.is_active() {
        return;
    }
    app.pointer = Some((x, y));

    // Hit-test against a layout with the dragged card suppressed, the
    // same one the next frame will draw
    let layout = BoardLayout::compute(
        &app.board,
        app.board_area,
        app.gesture.dragging_id(),
        &app.scroll,
    );
    match layout.lane_at(x, y) {
        Some(lane) => {
            let index = layout.insertion_slot(lane, y);
            app.gesture.hover(lane, index);
        }
        None => app.gesture.clear_hover(),
    }
    app.layout = layout;
}

/// Release commits an active drag, or ends a click.
fn on_release(app: &mut App, _x: u16, _y: u16) {
    app.pending_drag = None;
    app.pointer = None;

    let Some(result) = app.gesture.drop_on(&mut app.board) else {
        return; // plain click, focus already moved on press
    };
    match result {
        Ok(outcome) => {
            if let Some((lane, index)) = app.board.locate(&outcome.item_id) {
                app.focused_lane = lane;
                app.cursors[lane.index()] = index;
            }
            if outcome.moved {
                app.notify(format!("moved {} to {}", outcome.item_id, outcome.lane));
            }
            app.clamp_cursors();
            // Even a back-to-origin drop counts as a commit: re-render
            // and save keep counts and board.json in step
            app.commit();
        }
        Err(e) => {
            app.warn(e.to_string());
            app.clamp_cursors();
        }
    }
}

fn on_scroll(app: &mut App, x: u16, y: u16, delta: i32) {
    let Some(lane) = app.layout.lane_at(x, y) else {
        return;
    };
    let scroll = &mut app.scroll[lane.index()];
    let max = app.board.lane_len(lane).saturating_sub(1);
    *scroll = scroll.saturating_add_signed(delta as isize).min(max);
}

fn manhattan(a: (u16, u16), b: (u16, u16)) -> u32 {
    u32::from(a.0.abs_diff(b.0)) + u32::from(a.1.abs_diff(b.1))
}
