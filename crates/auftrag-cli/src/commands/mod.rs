//! CLI command definitions and handlers.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use auftrag_core::board::RecordStore;
use auftrag_core::{config, storage};

pub mod board;
pub mod init;
pub mod order;

/// Auftragsverwaltung - work orders on a Kanban board
#[derive(Parser)]
#[command(name = "auftrag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true, env = "AUFTRAG_PROJECT")]
    pub project: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a board in the project directory
    Init(init::InitArgs),

    /// Create a new work order in the first column
    New(order::NewArgs),

    /// Edit the fields of a work order
    Edit(order::EditArgs),

    /// Delete a work order
    Delete(order::DeleteArgs),

    /// Move a work order to a column
    Move(order::MoveArgs),

    /// Show a single work order
    Show(order::ShowArgs),

    /// List work orders in board order
    List(board::ListArgs),

    /// Display the board
    Board(board::BoardArgs),

    /// Show the configured columns
    Columns,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        match self.command {
            Commands::Init(args) => init::execute(args, &project_dir),
            Commands::New(args) => order::new(args, &project_dir),
            Commands::Edit(args) => order::edit(args, &project_dir),
            Commands::Delete(args) => order::delete(args, &project_dir),
            Commands::Move(args) => order::move_order(args, &project_dir),
            Commands::Show(args) => order::show(args, &project_dir),
            Commands::List(args) => board::list(args, &project_dir),
            Commands::Board(args) => board::board(args, &project_dir),
            Commands::Columns => board::columns(&project_dir),
        }
    }
}

/// Load the project's board with its configured columns.
pub(crate) fn open_board(project_dir: &Path) -> Result<RecordStore> {
    let config = config::load_config(project_dir)?;
    let store = storage::load_board(project_dir, &config)
        .with_context(|| format!("Failed to load board in {}", project_dir.display()))?;
    tracing::debug!(orders = store.len(), "board loaded");
    Ok(store)
}

/// Expand a unique id prefix to the full work-order id.
///
/// Input that matches no work order is returned as given so the store can
/// report it as not found. Blank input never matches by prefix.
pub(crate) fn resolve_id(store: &RecordStore, input: &str) -> Result<String> {
    if input.trim().is_empty() || store.get(input).is_some() {
        return Ok(input.to_string());
    }

    let matches: Vec<&str> = store
        .all()
        .iter()
        .map(|o| o.id.as_str())
        .filter(|id| id.starts_with(input))
        .collect();

    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => Ok(input.to_string()),
        _ => bail!("Id prefix '{}' is ambiguous ({} matches)", input, matches.len()),
    }
}
