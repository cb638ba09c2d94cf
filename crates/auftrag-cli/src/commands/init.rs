//! Board initialization command.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;

use auftrag_core::board::{ColumnSet, RecordStore, ReorderPolicy};
use auftrag_core::config::{self, BoardConfig};
use auftrag_core::storage;

#[derive(Args)]
pub struct InitArgs {
    /// Comma-separated column names (defaults to the standard columns)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Placement of moved cards: append or positional
    #[arg(long, default_value = "append")]
    pub reorder: String,

    /// Overwrite an existing configuration
    #[arg(short, long)]
    pub force: bool,
}

pub fn execute(args: InitArgs, project_dir: &Path) -> Result<()> {
    let config_path = config::config_path(project_dir);
    if config_path.exists() && !args.force {
        bail!(
            "Board already initialized at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let columns = if args.columns.is_empty() {
        ColumnSet::default()
    } else {
        ColumnSet::new(args.columns.iter().map(|c| c.trim().to_string()))?
    };
    let reorder = ReorderPolicy::from_str(&args.reorder).with_context(|| {
        format!("Invalid reorder policy '{}'. Use append or positional.", args.reorder)
    })?;

    let board_config = BoardConfig { columns, reorder };
    let path = config::write_config(project_dir, &board_config)?;

    if !storage::board_path(project_dir).exists() {
        storage::save_board(project_dir, &RecordStore::new(board_config.columns.clone()))?;
    }
    tracing::info!(path = %path.display(), "board initialized");

    println!("{} Board initialized: {}", "✓".green().bold(), path.display());
    println!("  Columns: {}", board_config.columns.as_slice().join(" → ").cyan());
    println!("  Reorder: {}", board_config.reorder.as_str());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  auftrag new --customer <name> --problem <text>");
    println!("  auftrag board");

    Ok(())
}
