use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Snapshot;

/// Name of the directory that marks a plank board
pub const BOARD_DIR: &str = ".plank";
/// The persisted blob inside the board directory
pub const BOARD_FILE: &str = "board.json";

/// Error type for board I/O operations
#[derive(Debug, thiserror::Error)]
pub enum BoardIoError {
    #[error("not a plank board: no .plank/ directory found")]
    NotABoard,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize board: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("could not parse config.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Discover the board by walking up from the given directory,
/// looking for a `.plank/` subdirectory with a config.toml.
pub fn discover_board(start: &Path) -> Result<PathBuf, BoardIoError> {
    let mut current = start.to_path_buf();
    loop {
        let board_dir = current.join(BOARD_DIR);
        if board_dir.is_dir() && board_dir.join("config.toml").exists() {
            return Ok(board_dir);
        }
        if !current.pop() {
            return Err(BoardIoError::NotABoard);
        }
    }
}

/// Load the last saved snapshot from `board.json`.
///
/// A missing file, unreadable file, or corrupt JSON all yield `None`:
/// the caller falls back to a seeded board instead of crashing.
pub fn load_board(board_dir: &Path) -> Option<Snapshot> {
    let path = board_dir.join(BOARD_FILE);
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write a snapshot to `board.json` atomically (temp file + rename).
///
/// Last write wins; failures are reported to the caller but never roll
/// back the in-memory board.
pub fn save_board(board_dir: &Path, snapshot: &Snapshot) -> Result<(), BoardIoError> {
    let path = board_dir.join(BOARD_FILE);
    let mut content = serde_json::to_string_pretty(snapshot)?;
    content.push('\n');
    atomic_write(&path, content.as_bytes()).map_err(|e| BoardIoError::WriteError {
        path,
        source: e,
    })
}

/// Write content to a temp file in the same directory, then rename over
/// the target. Readers never observe a half-written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, Lane};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let board = Board::seeded();
        let snapshot = board.snapshot();

        save_board(tmp.path(), &snapshot).unwrap();
        let loaded = load_board(tmp.path()).unwrap();

        assert_eq!(loaded, snapshot);
        assert_eq!(Board::from_snapshot(&loaded), board);
    }

    #[test]
    fn load_missing_file_returns_none() {
        let tmp = TempDir::new().unwrap();
        assert!(load_board(tmp.path()).is_none());
    }

    #[test]
    fn load_malformed_json_returns_none() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(BOARD_FILE), "not json {{{").unwrap();
        assert!(load_board(tmp.path()).is_none());
    }

    #[test]
    fn load_unknown_status_returns_none() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(BOARD_FILE),
            r#"[{"id": "c-1", "title": "x", "status": "limbo"}]"#,
        )
        .unwrap();
        assert!(load_board(tmp.path()).is_none());
    }

    #[test]
    fn save_is_last_write_wins() {
        let tmp = TempDir::new().unwrap();
        let mut board = Board::seeded();
        save_board(tmp.path(), &board.snapshot()).unwrap();

        board.move_across("c-1", Lane::Done, 0).unwrap();
        save_board(tmp.path(), &board.snapshot()).unwrap();

        let loaded = load_board(tmp.path()).unwrap();
        assert_eq!(Board::from_snapshot(&loaded), board);
    }

    #[test]
    fn discover_walks_up() {
        let tmp = TempDir::new().unwrap();
        let board_dir = tmp.path().join(BOARD_DIR);
        fs::create_dir_all(&board_dir).unwrap();
        fs::write(board_dir.join("config.toml"), "[board]\nname = \"t\"\n").unwrap();
        let nested = tmp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(discover_board(&nested).unwrap(), board_dir);
        assert_eq!(discover_board(tmp.path()).unwrap(), board_dir);
    }

    #[test]
    fn discover_fails_outside_any_board() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            discover_board(tmp.path()),
            Err(BoardIoError::NotABoard)
        ));
    }
}
