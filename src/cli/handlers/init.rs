use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::board_io::{self, BOARD_DIR, BOARD_FILE};
use crate::model::Board;

const CONFIG_TOML_TEMPLATE: &str = r##"[board]
name = "{name}"

# --- UI Customization ---
# Uncomment and edit to override defaults.

[ui]
# show_key_hints = false
#
# [ui.colors]
# background = "#0C001B"
# text = "#B0AAFF"
# text_bright = "#FFFFFF"
# highlight = "#FB4196"
# dim = "#7D78BF"
# red = "#FF4444"
# yellow = "#FFD700"
# green = "#44FF88"
# cyan = "#44DDFF"
# selection_bg = "#3D1438"
# selection_border = "#FB4196"
# placeholder = "#40E0D0"
"##;

/// Infer a board name from a directory name: replace hyphens with spaces, title-case.
fn infer_name(dir_name: &str) -> String {
    dir_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    upper + &chars.collect::<String>()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let board_dir = cwd.join(BOARD_DIR);

    if board_dir.is_dir() && !args.force {
        return Err("board already exists in ./.plank/ (use --force to reinitialize)".into());
    }

    // Warn when nesting under another board
    if let Some(parent) = cwd.parent()
        && let Ok(parent_dir) = board_io::discover_board(parent)
    {
        eprintln!("Note: parent board found at {}/", parent_dir.display());
        eprintln!("Creating new board in ./{}/", BOARD_DIR);
    }

    let name = args.name.unwrap_or_else(|| {
        cwd.file_name()
            .and_then(|n| n.to_str())
            .map(infer_name)
            .unwrap_or_else(|| "Untitled".to_string())
    });

    fs::create_dir_all(&board_dir)?;

    let toml_content = CONFIG_TOML_TEMPLATE.replace("{name}", &name);
    fs::write(board_dir.join("config.toml"), toml_content)?;

    // Seed the board unless a previous one is being kept
    if args.force || !board_dir.join(BOARD_FILE).exists() {
        board_io::save_board(&board_dir, &Board::seeded().snapshot())?;
    }

    println!("Initialized board: {}", name);
    Ok(())
}
