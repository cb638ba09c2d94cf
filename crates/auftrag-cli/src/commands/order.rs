//! Work-order commands: create, edit, delete, move and show.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::Input;
use std::path::Path;

use auftrag_core::board::{Field, FormMode, ReorderPolicy};
use auftrag_core::storage;

use super::{open_board, resolve_id};
use crate::output;

/// Field values given as flags.
#[derive(Args, Default)]
pub struct FieldArgs {
    /// Customer (Kunde)
    #[arg(long)]
    pub customer: Option<String>,

    /// Address (Adresse)
    #[arg(long)]
    pub address: Option<String>,

    /// Tenant (Mieter)
    #[arg(long)]
    pub tenant: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// E-mail address
    #[arg(long)]
    pub email: Option<String>,

    /// Problem description
    #[arg(long = "problem")]
    pub problem_description: Option<String>,

    /// Reference to an attached file (e.g. a PDF path)
    #[arg(long = "attachment")]
    pub attachment_ref: Option<String>,
}

#[derive(Args)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Set a field as field=value (repeatable, German names accepted)
    #[arg(long)]
    pub set: Vec<String>,

    /// Prompt for every field
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Work order ID (or unique prefix)
    pub id: String,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Set a field as field=value (repeatable, German names accepted)
    #[arg(long)]
    pub set: Vec<String>,

    /// Prompt for every field, pre-filled with the current values
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Work order ID (or unique prefix)
    pub id: String,
}

#[derive(Args)]
pub struct MoveArgs {
    /// Work order ID (or unique prefix)
    pub id: String,

    /// Target column
    pub column: String,

    /// Position within the target column (only used with positional reordering)
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Work order ID (or unique prefix)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Combine flag values and `--set` assignments, flags first.
fn collect_assignments(fields: FieldArgs, set: &[String]) -> Result<Vec<(Field, String)>> {
    let flags = [
        (Field::Customer, fields.customer),
        (Field::Address, fields.address),
        (Field::Tenant, fields.tenant),
        (Field::Phone, fields.phone),
        (Field::Email, fields.email),
        (Field::ProblemDescription, fields.problem_description),
        (Field::AttachmentRef, fields.attachment_ref),
    ];

    let mut assignments: Vec<(Field, String)> = flags
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect();
    for raw in set {
        assignments.push(Field::parse_assignment(raw)?);
    }

    Ok(assignments)
}

fn prompt_fields(form: &mut FormMode) -> Result<()> {
    println!("{}", form.title().bold());
    for field in Field::ALL {
        let current = field.get(form.draft()).to_string();
        let value: String = Input::new()
            .with_prompt(field.label())
            .default(current)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read {}", field.label()))?;
        form.set(field, value);
    }
    Ok(())
}

pub fn new(args: NewArgs, project_dir: &Path) -> Result<()> {
    let mut store = open_board(project_dir)?;
    let mut form = FormMode::default();

    for (field, value) in collect_assignments(args.fields, &args.set)? {
        form.set(field, value);
    }
    if args.interactive {
        prompt_fields(&mut form)?;
    }

    let id = form.submit(&mut store)?;
    storage::save_board(project_dir, &store)?;

    let order = store.get(&id).context("created work order missing from board")?;
    println!(
        "{} Created work order: {} ({})",
        "✓".green().bold(),
        output::display_customer(order).cyan(),
        id.dimmed()
    );
    println!("  Column: {}", order.status.cyan());

    Ok(())
}

pub fn edit(args: EditArgs, project_dir: &Path) -> Result<()> {
    let mut store = open_board(project_dir)?;
    let id = resolve_id(&store, &args.id)?;

    let Some(order) = store.get(&id) else {
        output::print_not_found(&id);
        return Ok(());
    };
    let mut form = FormMode::edit(order);

    let assignments = collect_assignments(args.fields, &args.set)?;
    if assignments.is_empty() && !args.interactive {
        println!("{}", "No fields given. Use --customer, --set field=value or -i.".dimmed());
        return Ok(());
    }
    for (field, value) in assignments {
        form.set(field, value);
    }
    if args.interactive {
        prompt_fields(&mut form)?;
    }

    match form.submit(&mut store) {
        Ok(id) => {
            storage::save_board(project_dir, &store)?;
            println!("{} Updated work order {}", "✓".green().bold(), id.dimmed());
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            output::print_not_found(&id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn delete(args: DeleteArgs, project_dir: &Path) -> Result<()> {
    let mut store = open_board(project_dir)?;
    let id = resolve_id(&store, &args.id)?;

    match store.delete(&id) {
        Ok(removed) => {
            storage::save_board(project_dir, &store)?;
            println!(
                "{} Deleted work order: {} ({})",
                "✓".green().bold(),
                output::display_customer(&removed).cyan(),
                removed.id.dimmed()
            );
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            output::print_not_found(&id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn move_order(args: MoveArgs, project_dir: &Path) -> Result<()> {
    let mut store = open_board(project_dir)?;
    let id = resolve_id(&store, &args.id)?;
    let policy = store.policy();

    match store.move_order(&id, &args.column, args.index) {
        Ok(_) => {
            storage::save_board(project_dir, &store)?;
            println!(
                "{} Moved work order {} to {}",
                "✓".green().bold(),
                id.dimmed(),
                args.column.cyan()
            );
            if policy == ReorderPolicy::Append && args.index > 0 {
                let note = "Placed at the end of the column; \
                            set reorder = \"positional\" to honour --index.";
                println!("  {}", note.dimmed());
            }
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            output::print_not_found(&id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn show(args: ShowArgs, project_dir: &Path) -> Result<()> {
    let store = open_board(project_dir)?;
    let id = resolve_id(&store, &args.id)?;

    let Some(order) = store.get(&id) else {
        output::print_not_found(&id);
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(order)?);
    } else {
        output::print_order(order);
    }

    Ok(())
}
