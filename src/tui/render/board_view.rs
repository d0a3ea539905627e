use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Lane;
use crate::tui::app::{App, Mode};
use crate::tui::layout::{CARD_ROWS, CardSlot};
use crate::util::unicode;

/// Render the three lane columns with their cards. The lane header is
/// the only place card counts are written, so a count can never
/// disagree with the cards below it.
pub fn render_board(frame: &mut Frame, app: &App, _area: Rect) {
    for lane in Lane::ALL {
        render_lane(frame, app, lane);
    }
    if let Some(id) = app.gesture.dragging_id() {
        render_placeholder(frame, app);
        render_ghost(frame, app, id);
    }
}

fn render_lane(frame: &mut Frame, app: &App, lane: Lane) {
    let ll = app.layout.lane_layout(lane);
    if ll.area.width < 3 || ll.area.height < 3 {
        return;
    }
    let bg = app.theme.background;
    let focused = lane == app.focused_lane && app.mode == Mode::Normal;
    let border = if focused {
        app.theme.selection_border
    } else {
        app.theme.dim
    };

    let header = format!(" {} ({}) ", lane.title(), app.board.lane_len(lane));
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .title(Span::styled(
            header,
            Style::default()
                .fg(app.theme.lane_color(lane))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    if ll.hidden_above > 0 {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" ↑{} ", ll.hidden_above),
                Style::default().fg(app.theme.dim).bg(bg),
            ))
            .right_aligned(),
        );
    }
    frame.render_widget(block, ll.area);

    // Card under the keyboard cursor; suppressed while dragging so the
    // placeholder is the only highlight
    let cursor = app.cursors[lane.index()];
    let dragging = app.gesture.is_active();
    for slot in &ll.cards {
        let selected = focused && !dragging && slot.lane_index == cursor;
        render_card(frame, app, slot, selected);
    }
}

fn render_card(frame: &mut Frame, app: &App, slot: &CardSlot, selected: bool) {
    let Some(item) = app.board.get(&slot.id) else {
        return;
    };
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let fg = if selected {
        app.theme.text_bright
    } else {
        app.theme.text
    };
    let inner = (slot.rect.width as usize).saturating_sub(2);

    let title = Line::from(Span::styled(
        format!(" {}", unicode::truncate_to_width(&item.title, inner)),
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
    ));
    let description = Line::from(Span::styled(
        format!(" {}", unicode::truncate_to_width(&item.description, inner)),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    frame.render_widget(
        Paragraph::new(vec![title, description]).style(Style::default().bg(bg)),
        slot.rect,
    );
}

/// Horizontal rule at the row where a drop would land. Indices from the
/// gesture count the lane without the dragged card, same as the visible
/// card stack.
fn render_placeholder(frame: &mut Frame, app: &App) {
    let Some((lane, index)) = app.gesture.placeholder() else {
        return;
    };
    let ll = app.layout.lane_layout(lane);
    let visible = index.saturating_sub(ll.hidden_above);

    let y = if ll.cards.is_empty() {
        ll.content.y
    } else if visible == 0 {
        // Dropping at the top: mark the border row above the first card
        ll.area.y
    } else if visible < ll.cards.len() {
        ll.cards[visible].rect.y - 1
    } else {
        let last = ll.cards.last().unwrap();
        (last.rect.y + CARD_ROWS).min(ll.area.y + ll.area.height.saturating_sub(1))
    };

    let rule = "━".repeat(ll.content.width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            rule,
            Style::default()
                .fg(app.theme.placeholder)
                .bg(app.theme.background),
        ))),
        Rect::new(ll.content.x, y, ll.content.width, 1),
    );
}

/// One-line copy of the dragged card's title riding under the pointer
fn render_ghost(frame: &mut Frame, app: &App, id: &str) {
    let Some((x, y)) = app.pointer else {
        return;
    };
    let Some(item) = app.board.get(id) else {
        return;
    };
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let text = format!(" {} ", unicode::truncate_to_width(&item.title, 24));
    let w = (unicode::display_width(&text) as u16).min(area.width);
    let rect = Rect::new(
        x.min(area.width.saturating_sub(w)),
        y.min(area.height.saturating_sub(1)),
        w,
        1,
    );
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD),
        )),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::layout::BoardLayout;
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, render_to_string, sample_app};

    fn draw(app: &mut App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            app.board_area = area;
            app.layout =
                BoardLayout::compute(&app.board, area, app.gesture.dragging_id(), &app.scroll);
            render_board(frame, app, area);
        })
    }

    #[test]
    fn headers_carry_live_counts() {
        let mut app = sample_app();
        let out = draw(&mut app);
        assert!(out.contains("To Do (2)"), "{out}");
        assert!(out.contains("In Progress (1)"), "{out}");
        assert!(out.contains("Done (0)"), "{out}");
    }

    #[test]
    fn cards_show_title_and_description() {
        let mut app = sample_app();
        let out = draw(&mut app);
        assert!(out.contains("Write the docs"));
        assert!(out.contains("outline first"));
    }

    #[test]
    fn dragged_card_leaves_its_lane_and_rides_the_pointer() {
        let mut app = sample_app();
        let (lane, index) = app.board.locate("c-1").unwrap();
        app.gesture.start("c-1", lane, index).unwrap();
        app.pointer = Some((40, 10));
        app.gesture.hover(Lane::InProgress, 0);

        let out = draw(&mut app);
        // count still includes the card in flight
        assert!(out.contains("To Do (2)"), "{out}");
        // placeholder rule shows up in the hovered lane
        assert!(out.contains("━"), "{out}");
        // ghost echoes the title at the pointer
        assert!(out.matches("Write the docs").count() >= 1);
    }

    #[test]
    fn long_titles_are_truncated_with_ellipsis() {
        let mut app = sample_app();
        app.board
            .update_text("c-1", "x".repeat(100), String::new())
            .unwrap();
        let out = draw(&mut app);
        assert!(out.contains("…"), "{out}");
    }
}
