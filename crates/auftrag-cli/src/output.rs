//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use auftrag_core::board::{BoardColumn, BoardView, Field, ReorderPolicy, WorkOrder};

/// Customer name for display, with a placeholder for blank names.
pub fn display_customer(order: &WorkOrder) -> &str {
    if order.fields.customer.trim().is_empty() {
        "(ohne Kunde)"
    } else {
        &order.fields.customer
    }
}

/// Short form of an id for tables and cards.
fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Report a stale or unknown id. The board was not changed.
pub fn print_not_found(id: &str) {
    println!(
        "{} Work order {} not found, board unchanged",
        "·".dimmed(),
        id.dimmed()
    );
}

/// Print a single work order.
pub fn print_order(order: &WorkOrder) {
    println!(
        "{} {}",
        display_customer(order).cyan().bold(),
        format!("({})", order.id).dimmed()
    );
    println!();
    println!("{}: {}", "Status".bold(), order.status.yellow());

    for field in Field::ALL {
        if field == Field::Customer {
            continue;
        }
        let value = field.get(&order.fields);
        if value.is_empty() {
            println!("{}: {}", field.label().bold(), "-".dimmed());
        } else {
            println!("{}: {}", field.label().bold(), value);
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Created {} · updated {}",
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.updated_at.format("%Y-%m-%d %H:%M")
        )
        .dimmed()
    );
}

/// Print work orders as a table.
pub fn print_orders_table(orders: &[&WorkOrder]) {
    if orders.is_empty() {
        println!("{}", "No work orders found.".dimmed());
        return;
    }

    println!(
        "{:<10} {:<24} {:<20} {:<30}",
        "ID", "Customer", "Status", "Problem"
    );
    println!("{}", "─".repeat(86));

    for order in orders {
        println!(
            "{:<10} {} {} {}",
            short_id(&order.id),
            pad_right(&truncate_visual(display_customer(order), 24), 24),
            pad_right(&truncate_visual(&order.status, 20), 20).yellow(),
            truncate_visual(&order.fields.problem_description, 30)
        );
    }

    println!();
    println!("{} work order(s) total", orders.len());
}

/// Print the configured columns with their current counts.
pub fn print_columns(view: &BoardView<'_>, policy: ReorderPolicy) {
    println!("{}", "Columns".bold());
    println!();

    for (i, col) in view.columns.iter().enumerate() {
        let marker = if i == 0 { "new →" } else { "" };
        println!(
            "  {} {:24} {:>3} {}",
            "●".dimmed(),
            column_color(i, col.name),
            col.orders.len(),
            marker.dimmed()
        );
    }

    println!();
    println!("Reorder policy: {}", policy.as_str().cyan());
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

/// Colour a column label by its position on the board.
fn column_color(position: usize, label: &str) -> ColoredString {
    match position % 6 {
        0 => label.blue().bold(),
        1 => label.yellow().bold(),
        2 => label.cyan().bold(),
        3 => label.magenta().bold(),
        4 => label.green().bold(),
        _ => label.white().dimmed(),
    }
}

/// Format column header text (plain, for width calculation).
fn column_header_plain(name: &str, count: usize, max_width: usize) -> String {
    let suffix = if count > 0 {
        format!(" {}", count)
    } else {
        String::new()
    };
    let full = format!("{}{}", name.to_uppercase(), suffix);
    if UnicodeWidthStr::width(full.as_str()) > max_width {
        truncate_visual(&full, max_width)
    } else {
        full
    }
}

/// One-line card text: customer, then the problem if there is room.
fn card_text(order: &WorkOrder, width: usize) -> String {
    let text = if order.fields.problem_description.is_empty() {
        display_customer(order).to_string()
    } else {
        format!(
            "{} · {}",
            display_customer(order),
            order.fields.problem_description.lines().next().unwrap_or_default()
        )
    };
    pad_right(&truncate_visual(&text, width), width)
}

/// Print the Kanban board.
pub fn print_board(view: &BoardView<'_>) {
    if view.total() == 0 {
        println!(
            "{}",
            "No work orders yet. Create one with 'auftrag new --customer <name>'.".dimmed()
        );
        return;
    }

    let width = term_width();

    if width < 60 {
        print_board_compact(view);
    } else {
        print_board_wide(view, width);
    }
}

/// Wide board layout with columns side-by-side.
fn print_board_wide(view: &BoardView<'_>, term_w: usize) {
    // Medium terminals only show columns that have cards
    let visible: Vec<(usize, &BoardColumn<'_>)> = view
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| term_w >= 120 || !c.orders.is_empty())
        .collect();

    let num_cols = visible.len();
    let available = if term_w > num_cols + 1 { term_w - num_cols - 1 } else { num_cols * 10 };
    let col_width = (available / num_cols).clamp(12, 30);

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = (0..num_cols).map(|_| "─".repeat(col_width)).collect();
        println!("{}{}{}", left.dimmed(), segments.join(mid).dimmed(), right.dimmed());
    };

    // ── Header ──
    rule("┌", "┬", "┐");
    print!("{}", "│".dimmed());
    for (i, (position, col)) in visible.iter().enumerate() {
        let header = column_header_plain(col.name, col.orders.len(), col_width);
        let padding = col_width.saturating_sub(UnicodeWidthStr::width(header.as_str()));
        let left_pad = padding / 2;
        print!(
            "{}{}{}",
            " ".repeat(left_pad),
            column_color(*position, &header),
            " ".repeat(padding - left_pad)
        );
        if i < num_cols - 1 {
            print!("{}", "│".dimmed());
        }
    }
    println!("{}", "│".dimmed());
    rule("├", "┼", "┤");

    // ── Card rows ──
    let max_cards = visible.iter().map(|(_, c)| c.orders.len()).max().unwrap_or(0);
    for row in 0..max_cards {
        print!("{}", "│".dimmed());
        for (i, (position, col)) in visible.iter().enumerate() {
            match col.orders.get(row) {
                Some(order) if *position == view.columns.len() - 1 => {
                    print!("{}", card_text(order, col_width).dimmed())
                }
                Some(order) => print!("{}", card_text(order, col_width)),
                None => print!("{}", " ".repeat(col_width)),
            }
            if i < num_cols - 1 {
                print!("{}", "│".dimmed());
            }
        }
        println!("{}", "│".dimmed());
    }

    rule("└", "┴", "┘");

    // ── Summary line ──
    let total = view.total();
    let last = view.columns.last().map_or(0, |c| c.orders.len());
    println!(
        " {} {} work orders {} {} in {}",
        "■".cyan(),
        total.to_string().bold(),
        "·".dimmed(),
        last.to_string().green(),
        view.columns.last().map_or("", |c| c.name)
    );
}

/// Compact vertical board layout for narrow terminals.
fn print_board_compact(view: &BoardView<'_>) {
    println!("{}", " AUFTRÄGE ".on_blue().white().bold());
    println!();

    for (position, col) in view.columns.iter().enumerate() {
        if col.orders.is_empty() {
            continue;
        }

        let header = column_header_plain(col.name, col.orders.len(), 30);
        println!(" {} {}", "▸".dimmed(), column_color(position, &header));

        for order in &col.orders {
            println!(
                "   {} {}",
                display_customer(order),
                short_id(&order.id).dimmed()
            );
            if !order.fields.problem_description.is_empty() {
                println!(
                    "     {}",
                    truncate_visual(&order.fields.problem_description, 40).dimmed()
                );
            }
        }
        println!();
    }
}
