use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Board, BoardConfig, Item, Lane};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Two cards in To Do, one in In Progress, Done empty.
pub fn sample_board() -> Board {
    let mut board = Board::new();
    board.insert(
        Item {
            id: "c-1".into(),
            title: "Write the docs".into(),
            description: "outline first".into(),
        },
        Lane::Todo,
        0,
    );
    board.insert(
        Item {
            id: "c-2".into(),
            title: "Fix the login bug".into(),
            description: String::new(),
        },
        Lane::Todo,
        1,
    );
    board.insert(
        Item {
            id: "c-3".into(),
            title: "Ship v1".into(),
            description: "tag and release".into(),
        },
        Lane::InProgress,
        0,
    );
    board
}

/// App over the sample board. The board dir points at nothing; render
/// tests never touch the disk.
pub fn sample_app() -> App {
    App::new(
        sample_board(),
        BoardConfig::default(),
        PathBuf::from("/tmp/plank-render-test"),
    )
}
