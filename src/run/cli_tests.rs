#![allow(clippy::unwrap_used)]

use std::io::{Cursor, Write as _};

use rust_decimal_macros::dec;

use super::*;

fn batch(script: &str, budget: rust_decimal::Decimal) -> (App, String) {
    let mut app = App::new(BillStore::with_budget(budget));
    let mut out = Vec::new();
    run_batch(Cursor::new(script), &mut app, &mut out).unwrap();
    (app, String::from_utf8(out).unwrap())
}

// ── Line handling ─────────────────────────────────────────────

#[test]
fn test_batch_echoes_status_per_command() {
    let (app, out) = batch(
        "add 2024-01-15 1200 utility Electricity\n:add 2024-02-01 300 food Groceries\n",
        dec!(50000),
    );
    assert_eq!(app.store.len(), 2);
    assert!(out.contains("Added bill: Electricity ₹1,200.00 (Utility)"));
    assert!(out.contains("Added bill: Groceries ₹300.00 (Food & Dining)"));
}

#[test]
fn test_batch_skips_blank_and_comment_lines() {
    let (app, out) = batch(
        "\n# monthly bills\n   \nadd 2024-01-15 100 travel Bus pass\n",
        dec!(50000),
    );
    assert_eq!(app.store.len(), 1);
    assert!(!out.contains("Unknown command"));
}

#[test]
fn test_batch_rejections_leave_store_unchanged() {
    let (app, out) = batch(
        "add 2024-01-15 abc utility Water\nadd 2024-01-15 999 utility Water\n",
        dec!(500),
    );
    assert!(app.store.is_empty());
    assert!(out.contains("Please enter a valid amount"));
    assert!(out.contains("exceeds the monthly budget"));
}

#[test]
fn test_batch_auto_confirms_delete() {
    let (app, out) = batch(
        "add 2024-01-15 100 travel Taxi\nadd 2024-01-16 200 travel Train\nselect 1\ndelete\n",
        dec!(50000),
    );
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.bills()[0].description, "Train");
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(out.contains("Deleted: Taxi"));
}

#[test]
fn test_batch_rename_without_args_prints_usage() {
    let (app, out) = batch(
        "add 2024-01-15 100 travel Taxi\nrename\n",
        dec!(50000),
    );
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.store.bills()[0].description, "Taxi");
    assert!(out.contains("Usage: :rename <description>"));
}

#[test]
fn test_batch_quit_stops_processing() {
    let (app, _) = batch(
        "add 2024-01-15 100 travel Taxi\nquit\nadd 2024-01-16 200 travel Train\n",
        dec!(50000),
    );
    assert_eq!(app.store.len(), 1);
}

#[test]
fn test_batch_help_lists_commands() {
    let (_, out) = batch("help\n", dec!(50000));
    assert!(out.contains(":budget"));
    assert!(out.contains(":filter"));
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_batch_summary_reports_optimizer() {
    let script = "\
add 2024-01-01 300 shopping Shoes
add 2024-01-02 200 shopping Bag
add 2024-01-03 100 shopping Socks
budget 450
";
    let (app, out) = batch(script, dec!(50000));
    assert_eq!(app.store.monthly_budget(), dec!(450));
    assert!(out.contains("Monthly Budget:  ₹450.00"));
    assert!(out.contains("Total Amount:    ₹600.00"));
    assert!(out.contains("Remaining:       -₹150.00"));
    assert!(out.contains("Optimizer: 2 bills, Total Selected Amount ₹400.00"));
}

#[test]
fn test_batch_summary_shows_filtered_bills() {
    let script = "\
add 2024-01-01 300 shopping Shoes
add 2024-01-02 50 travel Metro
filter travel
";
    let (_, out) = batch(script, dec!(50000));
    assert!(out.contains("Filter:          Travel"));
    assert!(out.contains("Bills (1):"));
    assert!(out.contains("Metro"));
}

#[test]
fn test_batch_empty_input_prints_summary() {
    let (_, out) = batch("", dec!(50000));
    assert!(out.contains("Monthly Budget:  ₹50,000.00"));
    assert!(out.contains("Bills (0):"));
    assert!(out.contains("Optimizer: 0 bills"));
}

// ── Files ─────────────────────────────────────────────────────

#[test]
fn test_batch_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "add 2024-03-10 750 education Course fee").unwrap();
    writeln!(file, "due 2024-03-31").unwrap();

    let mut app = App::new(BillStore::new());
    let mut out = Vec::new();
    batch_from_path(file.path(), &mut app, &mut out).unwrap();

    assert_eq!(app.store.len(), 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Course fee"));
    assert!(text.contains("2024-03-31"));
}

#[test]
fn test_batch_missing_file_is_error() {
    let mut app = App::new(BillStore::new());
    let mut out = Vec::new();
    let err = batch_from_path(Path::new("/nonexistent/bills.txt"), &mut app, &mut out).unwrap_err();
    assert!(err.to_string().contains("Failed to open batch file"));
}
