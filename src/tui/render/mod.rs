pub mod board_view;
pub mod confirm_popup;
pub mod form_view;
pub mod help_overlay;
pub mod helpers;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;
use super::layout::BoardLayout;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title row | lanes | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // board title
            Constraint::Min(1),    // lane columns
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_title(frame, app, chunks[0]);

    // The layout computed here is the one mouse events hit-test against
    // until the next frame
    app.board_area = chunks[1];
    app.layout = BoardLayout::compute(
        &app.board,
        chunks[1],
        app.gesture.dragging_id(),
        &app.scroll,
    );
    board_view::render_board(frame, app, chunks[1]);

    if app.form.is_some() {
        form_view::render_form(frame, app, frame.area());
    }
    if app.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, frame.area());
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let bg = app.theme.background;
    let line = Line::from(Span::styled(
        format!(" {}", app.config.board.name),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
