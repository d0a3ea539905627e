use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::board_io::{discover_board, load_board, save_board};
use crate::io::config_io::load_config;
use crate::io::watcher::BoardWatcher;
use crate::model::{Board, BoardConfig, Item, Lane};
use crate::util::unicode;

use super::gesture::DragGesture;
use super::input;
use super::layout::{BoardLayout, CARD_GAP, CARD_ROWS};
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Form,
    Confirm,
}

/// Severity of a status-row notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warn,
}

/// Transient status-row message, replaced by the next one
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

/// A mouse press that may become a drag once the pointer moves
#[derive(Debug, Clone)]
pub struct PendingDrag {
    pub item_id: String,
    pub pressed: (u16, u16),
}

/// Single-line edit buffer with a byte cursor on grapheme boundaries
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    pub text: String,
    pub cursor: usize,
}

impl EditBuffer {
    pub fn with_text(text: &str) -> Self {
        EditBuffer {
            cursor: text.len(),
            text: text.to_string(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete_word(&mut self) {
        let start = unicode::word_boundary_left(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Which field of the add/edit form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Lane,
}

/// Whether the form creates a new card or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(String),
}

/// The modal add/edit form
#[derive(Debug, Clone)]
pub struct FormState {
    pub target: FormTarget,
    pub field: FormField,
    pub title: EditBuffer,
    pub description: EditBuffer,
    pub lane: Lane,
    /// Set after a rejected submit, cleared on next input
    pub error: Option<String>,
}

impl FormState {
    pub fn create(lane: Lane) -> Self {
        FormState {
            target: FormTarget::Create,
            field: FormField::Title,
            title: EditBuffer::default(),
            description: EditBuffer::default(),
            lane,
            error: None,
        }
    }

    pub fn edit(item: &Item, lane: Lane) -> Self {
        FormState {
            target: FormTarget::Edit(item.id.clone()),
            field: FormField::Title,
            title: EditBuffer::with_text(&item.title),
            description: EditBuffer::with_text(&item.description),
            lane,
            error: None,
        }
    }
}

/// Delete confirmation popup
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub item_id: String,
    pub title: String,
}

/// Main application state
pub struct App {
    pub board: Board,
    pub config: BoardConfig,
    pub theme: Theme,
    pub board_dir: PathBuf,
    pub mode: Mode,
    pub should_quit: bool,
    /// Lane with keyboard focus
    pub focused_lane: Lane,
    /// Cursor index per lane
    pub cursors: [usize; 3],
    /// First visible card index per lane
    pub scroll: [usize; 3],
    /// The one drag gesture; Idle unless a card is being dragged
    pub gesture: DragGesture,
    /// Armed on mouse press, promoted to a gesture past the move threshold
    pub pending_drag: Option<PendingDrag>,
    /// Last pointer position during a drag (for the ghost line)
    pub pointer: Option<(u16, u16)>,
    pub form: Option<FormState>,
    pub confirm: Option<ConfirmState>,
    pub show_help: bool,
    pub notice: Option<Notice>,
    /// Layout of the last drawn frame, used for mouse hit-testing
    pub layout: BoardLayout,
    /// Screen region the lanes were drawn into last frame
    pub board_area: ratatui::layout::Rect,
    /// External file change arrived while a drag or modal was active
    pub reload_pending: bool,
}

impl App {
    pub fn new(board: Board, config: BoardConfig, board_dir: PathBuf) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            board,
            config,
            theme,
            board_dir,
            mode: Mode::Normal,
            should_quit: false,
            focused_lane: Lane::Todo,
            cursors: [0; 3],
            scroll: [0; 3],
            gesture: DragGesture::new(),
            pending_drag: None,
            pointer: None,
            form: None,
            confirm: None,
            show_help: false,
            notice: None,
            layout: BoardLayout::default(),
            board_area: ratatui::layout::Rect::default(),
            reload_pending: false,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.focused_lane.index()]
    }

    pub fn set_cursor(&mut self, index: usize) {
        self.cursors[self.focused_lane.index()] = index;
        self.clamp_cursors();
        self.fix_scroll();
    }

    /// The card under the keyboard cursor
    pub fn focused_item(&self) -> Option<&Item> {
        self.board.lane(self.focused_lane).get(self.cursor())
    }

    /// Keep all cursors within their lanes after any mutation
    pub fn clamp_cursors(&mut self) {
        for lane in Lane::ALL {
            let len = self.board.lane_len(lane);
            let cursor = &mut self.cursors[lane.index()];
            *cursor = (*cursor).min(len.saturating_sub(1));
            let scroll = &mut self.scroll[lane.index()];
            *scroll = (*scroll).min(len.saturating_sub(1));
        }
    }

    /// Scroll the focused lane so its cursor stays visible
    pub fn fix_scroll(&mut self) {
        let content = self.layout.lane_layout(self.focused_lane).content;
        let per_card = (CARD_ROWS + CARD_GAP) as usize;
        let capacity = ((content.height as usize) / per_card).max(1);
        let cursor = self.cursor();
        let scroll = &mut self.scroll[self.focused_lane.index()];
        if cursor < *scroll {
            *scroll = cursor;
        } else if cursor >= *scroll + capacity {
            *scroll = cursor + 1 - capacity;
        }
    }

    pub fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind: NoticeKind::Info,
        });
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind: NoticeKind::Warn,
        });
    }

    /// Persist the current board. A failed save is reported but never
    /// rolls back the in-memory board; the session keeps working from
    /// memory.
    pub fn commit(&mut self) {
        if let Err(e) = save_board(&self.board_dir, &self.board.snapshot()) {
            self.warn(format!("save failed: {}", e));
        }
    }

    /// Abandon any armed or active drag without touching the board
    pub fn cancel_drag(&mut self) {
        self.gesture.cancel();
        self.pending_drag = None;
        self.pointer = None;
    }

    /// Replace the in-memory board with what's on disk. Missing or
    /// corrupt board.json leaves the current board in place.
    pub fn reload_from_disk(&mut self) {
        self.reload_pending = false;
        match load_board(&self.board_dir) {
            Some(snapshot) => {
                let fresh = Board::from_snapshot(&snapshot);
                if fresh != self.board {
                    self.board = fresh;
                    self.clamp_cursors();
                    self.notify("board reloaded from disk");
                }
            }
            None => self.warn("could not reload board.json — keeping in-memory board"),
        }
    }

    /// Whether it is safe to swap the board out from under the UI
    pub fn idle(&self) -> bool {
        self.mode == Mode::Normal && !self.gesture.is_active() && self.pending_drag.is_none()
    }
}

/// Restore UI state from .state.json
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let ui_state = match read_ui_state(&app.board_dir) {
        Some(s) => s,
        None => return,
    };

    if let Ok(lane) = ui_state.focused_lane.parse::<Lane>() {
        app.focused_lane = lane;
    }
    for lane in Lane::ALL {
        if let Some(&cursor) = ui_state.cursors.get(lane.as_str()) {
            app.cursors[lane.index()] = cursor;
        }
    }
    app.clamp_cursors();
}

/// Save UI state to .state.json
pub fn save_ui_state(app: &App) {
    use crate::io::state::{UiState, write_ui_state};

    let mut state = UiState {
        focused_lane: app.focused_lane.as_str().to_string(),
        ..Default::default()
    };
    for lane in Lane::ALL {
        state
            .cursors
            .insert(lane.as_str().to_string(), app.cursors[lane.index()]);
    }
    let _ = write_ui_state(&app.board_dir, &state);
}

/// Load board + config for the TUI, seeding board.json if absent.
fn open_board(start: &Path) -> Result<App, Box<dyn std::error::Error>> {
    let board_dir = discover_board(start)?;
    let config = load_config(&board_dir)?;

    let (board, seeded) = match load_board(&board_dir) {
        Some(snapshot) => (Board::from_snapshot(&snapshot), false),
        None => (Board::seeded(), true),
    };

    let mut app = App::new(board, config, board_dir);
    if seeded {
        app.commit();
    }
    Ok(app)
}

/// Run the TUI application
pub fn run(board_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let start = match board_dir {
        Some(dir) => std::fs::canonicalize(dir)?,
        None => std::env::current_dir()?,
    };
    let mut app = open_board(&start)?;

    restore_ui_state(&mut app);

    // Watcher failures are non-fatal: external edits just won't auto-reload
    let watcher = BoardWatcher::start(&app.board_dir).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&BoardWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse(app, mouse);
                }
                // Focus loss cancels a drag: the terminal stops sending
                // us the release event, so the gesture would go stale
                Event::FocusLost => {
                    app.cancel_drag();
                }
                _ => {}
            }
        }

        // External edits to board.json: reload when idle, defer while a
        // drag or modal is active
        if let Some(w) = watcher
            && !w.poll().is_empty()
        {
            app.reload_pending = true;
        }
        if app.reload_pending && app.idle() {
            app.reload_from_disk();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
