use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::config::{Config, Mode};
use crate::store::BillStore;
use crate::ui::app::{App, InputMode};
use crate::ui::commands::{self, aliases_of};
use crate::ui::format::{due_label, rupees};

pub(crate) fn as_cli(config: Config) -> Result<()> {
    match config.mode {
        Mode::Help => {
            print_usage();
            Ok(())
        }
        Mode::Version => {
            println!("billtui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Mode::Batch(path) => {
            let mut app = App::new(BillStore::with_budget(config.monthly_budget));
            let stdout = io::stdout();
            let mut out = stdout.lock();
            match path {
                Some(path) => batch_from_path(&path, &mut app, &mut out),
                None => run_batch(io::stdin().lock(), &mut app, &mut out),
            }
        }
        Mode::Tui => anyhow::bail!("TUI mode is not a CLI command"),
    }
}

fn print_usage() {
    println!("billtui - session-only bill tracker with a budget optimizer");
    println!();
    println!("Usage: billtui [command] [--budget <amount>]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  batch [file]                  Run TUI commands from a file (or stdin)");
    println!("  --budget <amount>             Starting monthly budget (default 50000)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Batch lines use the command bar syntax, e.g.");
    println!("  add 2024-01-15 1200 utility Electricity");
    println!("  budget 1000");
    println!("  filter utility");
    println!();
    println!("Set BILLTUI_LOG (e.g. BILLTUI_LOG=debug) for diagnostics on stderr.");
}

pub(crate) fn batch_from_path(path: &Path, app: &mut App, out: &mut impl Write) -> Result<()> {
    let file =
        File::open(path).with_context(|| format!("Failed to open batch file: {}", path.display()))?;
    run_batch(BufReader::new(file), app, out)
}

/// Apply one command per line, echoing each status message, then print a
/// summary of the resulting store.
pub(crate) fn run_batch(reader: impl BufRead, app: &mut App, out: &mut impl Write) -> Result<()> {
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", lineno + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        app.status_message.clear();
        commands::handle_command(trimmed, app)?;

        match app.input_mode {
            InputMode::Confirm => commands::confirm_pending(app),
            InputMode::Editing => {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
                app.set_status("Usage: :rename <description>");
            }
            InputMode::Normal | InputMode::Command => {}
        }

        if app.show_help {
            app.show_help = false;
            write_command_list(out)?;
        }
        if !app.status_message.is_empty() {
            writeln!(out, "{}", app.status_message)?;
        }
        if !app.running {
            break;
        }
    }

    write_summary(app, out)
}

fn write_command_list(out: &mut impl Write) -> Result<()> {
    for name in commands::canonical_names() {
        let Some(cmd) = commands::COMMANDS.get(name) else {
            continue;
        };
        let call = format!(":{} {}", aliases_of(name).join("/:"), cmd.usage);
        writeln!(out, "  {:<44} {}", call.trim_end(), cmd.description)?;
    }
    Ok(())
}

fn write_summary(app: &App, out: &mut impl Write) -> Result<()> {
    let store = &app.store;
    let filter = store
        .category_filter()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "none".into());

    writeln!(out)?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Monthly Budget:  {}", rupees(store.monthly_budget()))?;
    writeln!(out, "  Total Amount:    {}", rupees(store.calculate_total()))?;
    writeln!(out, "  Remaining:       {}", rupees(store.remaining_budget()))?;
    writeln!(out, "  Filter:          {filter}")?;

    let visible = app.visible_bills();
    writeln!(out)?;
    writeln!(out, "Bills ({}):", visible.len())?;
    for (i, bill) in visible.iter().enumerate() {
        writeln!(
            out,
            "  {:>3}. {} {:<24} {:<16} due {:<10} {:>14}",
            i + 1,
            bill.date,
            bill.description,
            bill.category.as_str(),
            due_label(bill.due_date),
            rupees(bill.amount),
        )?;
    }

    let optimization = store.optimize();
    writeln!(out)?;
    writeln!(
        out,
        "Optimizer: {} bills, Total Selected Amount {}",
        optimization.selected_bills.len(),
        rupees(optimization.total_selected)
    )?;
    for bill in &optimization.selected_bills {
        writeln!(out, "  {:<24} {:>14}", bill.description, rupees(bill.amount))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
