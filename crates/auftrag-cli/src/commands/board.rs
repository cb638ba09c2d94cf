//! Board views: the Kanban board, the order list and the column overview.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::open_board;
use crate::output;

#[derive(Args)]
pub struct BoardArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only list work orders in this column
    #[arg(short, long)]
    pub column: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn board(args: BoardArgs, project_dir: &Path) -> Result<()> {
    let store = open_board(project_dir)?;
    let view = store.project();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        output::print_board(&view);
    }

    Ok(())
}

pub fn list(args: ListArgs, project_dir: &Path) -> Result<()> {
    let store = open_board(project_dir)?;
    if let Some(column) = &args.column {
        store.columns().require(column)?;
    }

    let view = store.project();
    let orders: Vec<_> = view
        .columns
        .iter()
        .filter(|c| args.column.as_deref().map_or(true, |name| c.name == name))
        .flat_map(|c| c.orders.iter().copied())
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&orders)?);
    } else {
        output::print_orders_table(&orders);
    }

    Ok(())
}

pub fn columns(project_dir: &Path) -> Result<()> {
    let store = open_board(project_dir)?;
    output::print_columns(&store.project(), store.policy());
    Ok(())
}
