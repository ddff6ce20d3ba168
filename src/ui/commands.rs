use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::warn;

use super::app::{App, InputMode, PendingAction, Screen};
use super::format::rupees;
use crate::models::{Bill, Category};
use crate::store::validate;
use crate::store::BillError;

pub(crate) struct Command {
    /// Canonical name; aliases share the same entry under other keys.
    pub(crate) name: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ([$name:expr $(, $alias:expr)*], $usage:expr, $desc:expr, $func:expr, $registry:expr) => {{
        for key in [$name $(, $alias)*] {
            $registry.insert(
                key,
                Command {
                    name: $name,
                    usage: $usage,
                    description: $desc,
                    run: $func,
                },
            );
        }
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!(["add", "a"], "<date> <amount> <category> <desc>", "Add a bill", cmd_add, r);
    register_command!(
        ["edit", "e"],
        "<date> <amount> <category> <desc>",
        "Replace the selected bill",
        cmd_edit,
        r
    );
    register_command!(["rename"], "[desc]", "Rename the selected bill", cmd_rename, r);
    register_command!(["due"], "[date]", "Set or clear the selected bill's due date", cmd_due, r);
    register_command!(["delete", "rm"], "", "Delete the selected bill", cmd_delete, r);
    register_command!(["select"], "<n>", "Select the n-th listed bill", cmd_select, r);
    register_command!(["budget"], "<amount>", "Set the monthly budget", cmd_budget, r);
    register_command!(
        ["filter", "f"],
        "[category]",
        "Filter by category, none clears",
        cmd_filter,
        r
    );
    register_command!(["dashboard", "d"], "", "Go to Dashboard", cmd_dashboard, r);
    register_command!(["bills", "b"], "", "Go to Bills", cmd_bills, r);
    register_command!(["optimizer", "o"], "", "Go to Optimizer", cmd_optimizer, r);
    register_command!(["help", "h"], "", "Show this help", cmd_help, r);
    register_command!(["quit", "q"], "", "Quit", cmd_quit, r);

    r
});

/// Canonical command names, sorted.
pub(crate) fn canonical_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = COMMANDS.values().map(|cmd| cmd.name).collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Every key registered for the command named `name`, canonical name first.
pub(crate) fn aliases_of(name: &str) -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = COMMANDS
        .iter()
        .filter(|(_, cmd)| cmd.name == name)
        .map(|(key, _)| *key)
        .collect();
    keys.sort_by_key(|k| (*k != name, *k));
    keys
}

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim().trim_start_matches(':');
    let (cmd_name, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let args = args.trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        warn!(command = cmd_name, "unknown command");
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

/// Carry out the action waiting in `Confirm` mode and return to `Normal`.
pub(crate) fn confirm_pending(app: &mut App) {
    if let Some(action) = app.pending_action.take() {
        match action {
            PendingAction::RemoveBill { id, description } => {
                app.store.remove_bill(&id);
                app.clamp_selection();
                app.set_status(format!("Deleted: {description}"));
            }
        }
    }
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();
}

pub(crate) fn cancel_pending(app: &mut App) {
    app.pending_action = None;
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();
    app.set_status("Cancelled");
}

/// Replace the description of the selected bill.
pub(crate) fn rename_selected(app: &mut App, description: &str) {
    let Some(mut bill) = app.selected_bill().cloned() else {
        app.set_status("No bill selected");
        return;
    };
    bill.description = description.to_string();
    app.store.edit_bill(bill);
    app.set_status(format!("Renamed to: {description}"));
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .values()
        .map(|cmd| cmd.name)
        .min_by_key(|name| (levenshtein(input, name), *name))
        .unwrap_or("help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn reject(app: &mut App, err: BillError) {
    warn!(%err, "rejected input");
    app.set_status(err.to_string());
}

/// Fields shared by `:add` and `:edit`: `<date> <amount> <category> <description>`.
struct BillFields<'a> {
    date: &'a str,
    amount: &'a str,
    category: &'a str,
    description: &'a str,
}

/// Split off the first whitespace-separated word, returning it and the rest.
fn next_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some(input.split_at(end))
}

fn split_bill_fields(args: &str) -> Option<BillFields<'_>> {
    let (date, rest) = next_word(args)?;
    let (amount, rest) = next_word(rest)?;
    let (category, rest) = next_word(rest)?;
    let description = rest.trim();
    if description.is_empty() {
        return None;
    }
    Some(BillFields {
        date,
        amount,
        category,
        description,
    })
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_bills(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Bills;
    app.clamp_selection();
    Ok(())
}

fn cmd_optimizer(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Optimizer;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(fields) = split_bill_fields(args) else {
        app.set_status("Usage: :add <YYYY-MM-DD> <amount> <category> <description>");
        return Ok(());
    };

    let date = match validate::parse_date(fields.date) {
        Ok(d) => d,
        Err(e) => {
            reject(app, e);
            return Ok(());
        }
    };
    let category = match validate::parse_category(fields.category) {
        Ok(c) => c,
        Err(e) => {
            reject(app, e);
            return Ok(());
        }
    };
    let amount = match validate::validate_submission(&app.store, fields.amount, None) {
        Ok(a) => a,
        Err(e) => {
            reject(app, e);
            return Ok(());
        }
    };

    let bill = Bill::new(fields.description.to_string(), category, amount, date);
    app.store.add_bill(bill);
    app.set_status(format!(
        "Added bill: {} {} ({category})",
        fields.description,
        rupees(amount)
    ));
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(current) = app.selected_bill().cloned() else {
        app.set_status("Navigate to Bills and select one first");
        return Ok(());
    };
    let Some(fields) = split_bill_fields(args) else {
        app.set_status("Usage: :edit <YYYY-MM-DD> <amount> <category> <description>");
        return Ok(());
    };

    let date = match validate::parse_date(fields.date) {
        Ok(d) => d,
        Err(e) => {
            reject(app, e);
            return Ok(());
        }
    };
    let category = match validate::parse_category(fields.category) {
        Ok(c) => c,
        Err(e) => {
            reject(app, e);
            return Ok(());
        }
    };
    let amount =
        match validate::validate_submission(&app.store, fields.amount, Some(&current.id)) {
            Ok(a) => a,
            Err(e) => {
                reject(app, e);
                return Ok(());
            }
        };

    let updated = Bill {
        description: fields.description.to_string(),
        category,
        amount,
        date,
        ..current
    };
    app.store.edit_bill(updated);
    app.clamp_selection();
    app.set_status(format!("Updated bill: {}", fields.description));
    Ok(())
}

fn cmd_rename(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(description) = app.selected_bill().map(|b| b.description.clone()) else {
        app.set_status("Navigate to Bills and select one first");
        return Ok(());
    };

    if args.is_empty() {
        app.command_input = description;
        app.input_mode = InputMode::Editing;
        app.set_status("Type new description, press Enter to confirm");
        return Ok(());
    }

    rename_selected(app, args);
    Ok(())
}

fn cmd_due(args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(mut bill) = app.selected_bill().cloned() else {
        app.set_status("Navigate to Bills and select one first");
        return Ok(());
    };

    if args.is_empty() {
        bill.due_date = None;
        let description = bill.description.clone();
        app.store.edit_bill(bill);
        app.set_status(format!("Cleared due date: {description}"));
        return Ok(());
    }

    match validate::parse_date(args) {
        Ok(due) => {
            let bill = bill.with_due_date(due);
            let description = bill.description.clone();
            app.store.edit_bill(bill);
            app.set_status(format!("Due {due}: {description}"));
        }
        Err(e) => reject(app, e),
    }
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(bill) = app.selected_bill() else {
        app.set_status("No bill selected");
        return Ok(());
    };

    let id = bill.id.clone();
    let description = bill.description.clone();
    app.confirm_message = format!("Delete '{description}'?");
    app.pending_action = Some(PendingAction::RemoveBill { id, description });
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_select(args: &str, app: &mut App) -> anyhow::Result<()> {
    let len = app.visible_bills().len();
    let page = app.visible_rows;
    let picked = args
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .is_some_and(|index| app.cursor.jump(index, len, page));

    match app.selected_bill().filter(|_| picked) {
        Some(bill) => {
            let description = bill.description.clone();
            app.set_status(format!("Selected: {description}"));
        }
        None => app.set_status(format!("Usage: :select <1-{len}>")),
    }
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!(
            "Monthly budget: {}. Usage: :budget <amount>",
            rupees(app.store.monthly_budget())
        ));
        return Ok(());
    }

    match validate::parse_budget(args) {
        Ok(budget) => {
            app.store.set_monthly_budget(budget);
            app.clamp_selection();
            app.set_status(format!("Monthly budget set to {}", rupees(budget)));
        }
        Err(e) => reject(app, e),
    }
    Ok(())
}

fn cmd_filter(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.store.filter_bills(None);
        app.reset_selection();
        app.set_status("Category filter cleared - showing all bills");
        return Ok(());
    }

    match validate::parse_category(args) {
        Ok(category) => {
            app.store.filter_bills(Some(category));
            app.reset_selection();
            app.screen = Screen::Bills;
            app.set_status(format!("Filtering by category: {category}"));
        }
        Err(e) => {
            let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
            warn!(%e, "rejected input");
            app.set_status(format!("{e}. Available: {}", names.join(", ")));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
