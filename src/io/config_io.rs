use std::fs;
use std::path::Path;

use crate::io::board_io::BoardIoError;
use crate::model::BoardConfig;

/// Read and parse `config.toml` from the board directory.
pub fn load_config(board_dir: &Path) -> Result<BoardConfig, BoardIoError> {
    let path = board_dir.join("config.toml");
    let content = fs::read_to_string(&path).map_err(|e| BoardIoError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: BoardConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_parses_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[board]\nname = \"Kitchen\"\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.board.name, "Kitchen");
    }

    #[test]
    fn load_missing_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(BoardIoError::ReadError { .. })
        ));
    }

    #[test]
    fn load_invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "board = [broken").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(BoardIoError::ConfigParseError(_))
        ));
    }
}
