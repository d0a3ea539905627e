mod init;
pub use init::cmd_init;

use std::path::PathBuf;
use std::sync::Mutex;

/// Global override for the board directory (set by -C flag)
static BOARD_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::board_io::{self, BOARD_FILE};
use crate::io::lock::FileLock;
use crate::model::{Board, Lane};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for load_board_cwd()
    if let Some(ref dir) = cli.board_dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        BOARD_DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        None => unreachable!("no-subcommand launches the TUI from main"),
        Some(cmd) => match cmd {
            // Init is handled in main.rs before board discovery
            Commands::Init(args) => cmd_init(args),

            // Read commands
            Commands::List(args) => cmd_list(args, json),
            Commands::Show(args) => cmd_show(args, json),

            // Write commands
            Commands::Add(args) => cmd_add(args, json),
            Commands::Edit(args) => cmd_edit(args),
            Commands::Mv(args) => cmd_mv(args),
            Commands::Rm(args) => cmd_rm(args),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Discover the board from the cwd (or the -C override) and load it.
/// A missing board.json is an empty board; an unreadable one is an
/// error rather than a silent wipe on the next save.
fn load_board_cwd() -> Result<(Board, PathBuf), Box<dyn std::error::Error>> {
    let start = match BOARD_DIR_OVERRIDE.lock().unwrap().as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let board_dir = board_io::discover_board(&start)?;

    let board = match board_io::load_board(&board_dir) {
        Some(snapshot) => Board::from_snapshot(&snapshot),
        None if board_dir.join(BOARD_FILE).exists() => {
            return Err(format!(
                "could not parse {}: fix or remove it before writing",
                board_dir.join(BOARD_FILE).display()
            )
            .into());
        }
        None => Board::new(),
    };
    Ok((board, board_dir))
}

fn parse_lane(s: &str) -> Result<Lane, Box<dyn std::error::Error>> {
    Ok(s.parse::<Lane>()?)
}

fn save(board_dir: &PathBuf, board: &Board) -> Result<(), Box<dyn std::error::Error>> {
    board_io::save_board(board_dir, &board.snapshot())?;
    Ok(())
}

fn print_lane(board: &Board, lane: Lane) {
    println!("{} ({})", lane.title(), board.lane_len(lane));
    for (i, item) in board.lane(lane).iter().enumerate() {
        println!("  {}", card_row(item, lane, i));
    }
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (board, _) = load_board_cwd()?;
    let lane_filter = args.lane.as_deref().map(parse_lane).transpose()?;

    if json {
        let out = match lane_filter {
            Some(lane) => serde_json::to_string_pretty(&lane_to_json(&board, lane))?,
            None => serde_json::to_string_pretty(&board_to_json(&board))?,
        };
        println!("{}", out);
        return Ok(());
    }

    match lane_filter {
        Some(lane) => print_lane(&board, lane),
        None => {
            for lane in Lane::ALL {
                print_lane(&board, lane);
            }
        }
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (board, _) = load_board_cwd()?;
    let (lane, position) = board
        .locate(&args.id)
        .ok_or_else(|| format!("card not found: {}", args.id))?;
    let item = board.get(&args.id).unwrap();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&card_to_json(item, lane, position))?
        );
        return Ok(());
    }

    println!("{}  [{}:{}]", item.id, lane, position);
    println!("  {}", item.title);
    if !item.description.is_empty() {
        println!("  {}", item.description);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (mut board, board_dir) = load_board_cwd()?;
    let _lock = FileLock::acquire_default(&board_dir)?;

    let lane = parse_lane(&args.lane)?;
    let card = crate::ops::form::validate(
        &args.title,
        args.description.as_deref().unwrap_or(""),
        lane,
    )?;

    let id = board.next_id();
    let index = args.at.unwrap_or(usize::MAX);
    board.insert(
        crate::model::Item {
            id: id.clone(),
            title: card.title,
            description: card.description,
        },
        lane,
        index,
    );
    save(&board_dir, &board)?;

    if json {
        let (lane, position) = board.locate(&id).unwrap();
        let item = board.get(&id).unwrap();
        println!(
            "{}",
            serde_json::to_string_pretty(&card_to_json(item, lane, position))?
        );
    } else {
        println!("{}", id);
    }
    Ok(())
}

fn cmd_edit(args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.title.is_none() && args.description.is_none() {
        return Err("nothing to change: pass --title and/or -d".into());
    }
    let (mut board, board_dir) = load_board_cwd()?;
    let _lock = FileLock::acquire_default(&board_dir)?;

    let current = board
        .get(&args.id)
        .ok_or_else(|| format!("card not found: {}", args.id))?
        .clone();
    let title = args.title.unwrap_or(current.title);
    let description = args.description.unwrap_or(current.description);
    if title.trim().is_empty() {
        return Err(crate::ops::form::FormError::EmptyTitle.into());
    }

    board.update_text(&args.id, title, description)?;
    save(&board_dir, &board)?;
    println!("updated {}", args.id);
    Ok(())
}

fn cmd_mv(args: MvArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (mut board, board_dir) = load_board_cwd()?;
    let _lock = FileLock::acquire_default(&board_dir)?;

    let lane = parse_lane(&args.lane)?;
    let index = args.at.unwrap_or(usize::MAX);
    board.move_across(&args.id, lane, index)?;
    save(&board_dir, &board)?;

    let (_, position) = board.locate(&args.id).unwrap();
    println!("moved {} to {}:{}", args.id, lane, position);
    Ok(())
}

fn cmd_rm(args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (mut board, board_dir) = load_board_cwd()?;
    let _lock = FileLock::acquire_default(&board_dir)?;

    if !board.remove(&args.id) {
        return Err(format!("card not found: {}", args.id).into());
    }
    save(&board_dir, &board)?;
    println!("deleted {}", args.id);
    Ok(())
}
