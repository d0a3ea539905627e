use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, NoticeKind};

use super::helpers::spans_width;

/// Render the status row (bottom of screen): last notice on the left,
/// key hints right-aligned
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(notice) = &app.notice {
        let fg = match notice.kind {
            NoticeKind::Info => app.theme.text,
            NoticeKind::Warn => app.theme.red,
        };
        spans.push(Span::styled(
            format!(" {}", notice.text),
            Style::default().fg(fg).bg(bg),
        ));
    }

    if app.config.ui.show_key_hints {
        let hint = match app.mode {
            Mode::Normal => "n new  e edit  d delete  r reload  ? help  q quit ",
            Mode::Form => "Enter save  Tab field  Esc cancel ",
            Mode::Confirm => "y delete  n cancel ",
        };
        let used = spans_width(&spans);
        let hint_width = hint.chars().count();
        if used + hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - used - hint_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    if spans.is_empty() {
        spans.push(Span::styled(" ".repeat(width), Style::default().bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
