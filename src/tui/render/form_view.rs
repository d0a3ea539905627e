use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, EditBuffer, FormField, FormState, FormTarget};

use super::helpers::centered_rect_fixed;

/// Render the modal add/edit form
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };

    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let focused_label_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let header = match form.target {
        FormTarget::Create => " New Card",
        FormTarget::Edit(_) => " Edit Card",
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        header,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        " Title",
        if form.field == FormField::Title {
            focused_label_style
        } else {
            label_style
        },
    )));
    lines.push(input_line(app, &form.title, form.field == FormField::Title));

    lines.push(Line::from(Span::styled(
        " Description",
        if form.field == FormField::Description {
            focused_label_style
        } else {
            label_style
        },
    )));
    lines.push(input_line(
        app,
        &form.description,
        form.field == FormField::Description,
    ));

    lines.push(Line::from(Span::styled(
        " Lane",
        if form.field == FormField::Lane {
            focused_label_style
        } else {
            label_style
        },
    )));
    lines.push(lane_line(app, form));

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(app.theme.red).bg(bg),
        )));
    }

    let popup_w: u16 = 48.min(area.width.saturating_sub(2));
    let popup_h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        overlay,
    );
}

/// One editable field: text split at the cursor, ▌ where it sits
fn input_line<'a>(app: &App, buf: &'a EditBuffer, focused: bool) -> Line<'a> {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    if !focused {
        return Line::from(Span::styled(
            format!("   {}", buf.text),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }
    Line::from(vec![
        Span::styled("   ", text_style),
        Span::styled(&buf.text[..buf.cursor], text_style),
        Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(&buf.text[buf.cursor..], text_style),
    ])
}

fn lane_line<'a>(app: &App, form: &FormState) -> Line<'a> {
    let bg = app.theme.background;
    let accent = app.theme.lane_color(form.lane);
    let arrow_style = Style::default().fg(app.theme.dim).bg(bg);
    Line::from(vec![
        Span::styled("   \u{25C2} ", arrow_style),
        Span::styled(
            form.lane.title().to_string(),
            Style::default().fg(accent).bg(bg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{25B8}", arrow_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Lane;
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, render_to_string, sample_app};

    fn draw(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| render_form(frame, app, area))
    }

    #[test]
    fn create_form_shows_fields_and_lane() {
        let mut app = sample_app();
        app.mode = Mode::Form;
        app.form = Some(FormState::create(Lane::InProgress));
        let out = draw(&app);
        assert!(out.contains("New Card"), "{out}");
        assert!(out.contains("Title"), "{out}");
        assert!(out.contains("In Progress"), "{out}");
    }

    #[test]
    fn edit_form_is_prefilled() {
        let mut app = sample_app();
        let item = app.board.lane(Lane::Todo)[0].clone();
        app.mode = Mode::Form;
        app.form = Some(FormState::edit(&item, Lane::Todo));
        let out = draw(&app);
        assert!(out.contains("Edit Card"), "{out}");
        assert!(out.contains(&item.title), "{out}");
    }

    #[test]
    fn validation_error_is_shown() {
        let mut app = sample_app();
        app.mode = Mode::Form;
        let mut form = FormState::create(Lane::Todo);
        form.error = Some("title cannot be empty".into());
        app.form = Some(form);
        let out = draw(&app);
        assert!(out.contains("title cannot be empty"), "{out}");
    }
}
