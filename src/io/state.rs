use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to .state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Which lane has focus ("todo", "inprogress", "done")
    pub focused_lane: String,
    /// Cursor position per lane, keyed by lane status string
    #[serde(default)]
    pub cursors: HashMap<String, usize>,
}

/// Read .state.json from the board directory
pub fn read_ui_state(board_dir: &Path) -> Option<UiState> {
    let path = board_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the board directory
pub fn write_ui_state(board_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = board_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
