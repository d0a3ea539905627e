use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plank", about = concat!("[|] plank v", env!("CARGO_PKG_VERSION"), " - a kanban board in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different board directory
    #[arg(short = 'C', long = "board-dir", global = true)]
    pub board_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new board in the current directory
    Init(InitArgs),
    /// List cards, per lane
    List(ListArgs),
    /// Show one card in full
    Show(ShowArgs),
    /// Add a card to a lane (appended at the bottom)
    Add(AddArgs),
    /// Edit a card's title or description
    Edit(EditArgs),
    /// Move a card to a lane or position
    Mv(MvArgs),
    /// Delete a card
    Rm(RmArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Board name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Reinitialize even if .plank/ already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Lane to list (todo, inprogress, done; default: all)
    pub lane: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Card ID to show
    pub id: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Card title
    pub title: String,
    /// Card description
    #[arg(short = 'd', long)]
    pub description: Option<String>,
    /// Target lane (default: todo)
    #[arg(long, default_value = "todo")]
    pub lane: String,
    /// Insert at this position instead of the bottom
    #[arg(long)]
    pub at: Option<usize>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Card ID to edit
    pub id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description
    #[arg(short = 'd', long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct MvArgs {
    /// Card ID to move
    pub id: String,
    /// Target lane (todo, inprogress, done)
    pub lane: String,
    /// Position within the lane (default: bottom)
    #[arg(long)]
    pub at: Option<usize>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Card ID to delete
    pub id: String,
}
