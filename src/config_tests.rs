#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use rust_decimal_macros::dec;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("billtui")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

// ── Modes ─────────────────────────────────────────────────────

#[test]
fn test_no_args_launches_tui_with_default_budget() {
    let config = Config::from_args(&args(&[])).unwrap();
    assert_eq!(config.mode, Mode::Tui);
    assert_eq!(config.monthly_budget, dec!(50000));
}

#[test]
fn test_batch_from_stdin() {
    assert_eq!(
        Config::from_args(&args(&["batch"])).unwrap().mode,
        Mode::Batch(None)
    );
    assert_eq!(
        Config::from_args(&args(&["batch", "-"])).unwrap().mode,
        Mode::Batch(None)
    );
}

#[test]
fn test_batch_from_file() {
    let config = Config::from_args(&args(&["batch", "bills.txt"])).unwrap();
    assert_eq!(config.mode, Mode::Batch(Some(PathBuf::from("bills.txt"))));
}

#[test]
fn test_help_and_version_aliases() {
    for flag in ["help", "--help", "-h"] {
        assert_eq!(Config::from_args(&args(&[flag])).unwrap().mode, Mode::Help);
    }
    for flag in ["version", "--version", "-V"] {
        assert_eq!(
            Config::from_args(&args(&[flag])).unwrap().mode,
            Mode::Version
        );
    }
}

#[test]
fn test_unknown_command_is_error() {
    let err = Config::from_args(&args(&["export"])).unwrap_err();
    assert!(err.to_string().contains("Unknown command: export"));
}

#[test]
fn test_batch_with_extra_args_is_error() {
    assert!(Config::from_args(&args(&["batch", "a.txt", "b.txt"])).is_err());
}

// ── --budget ──────────────────────────────────────────────────

#[test]
fn test_budget_flag_anywhere() {
    let before = Config::from_args(&args(&["--budget", "1200", "batch"])).unwrap();
    assert_eq!(before.monthly_budget, dec!(1200));
    assert_eq!(before.mode, Mode::Batch(None));

    let after = Config::from_args(&args(&["batch", "in.txt", "--budget", "750.50"])).unwrap();
    assert_eq!(after.monthly_budget, dec!(750.50));
    assert_eq!(after.mode, Mode::Batch(Some(PathBuf::from("in.txt"))));
}

#[test]
fn test_budget_flag_equals_form() {
    let config = Config::from_args(&args(&["--budget=300"])).unwrap();
    assert_eq!(config.monthly_budget, dec!(300));
    assert_eq!(config.mode, Mode::Tui);
}

#[test]
fn test_budget_flag_missing_value() {
    let err = Config::from_args(&args(&["--budget"])).unwrap_err();
    assert!(err.to_string().contains("requires an amount"));
}

#[test]
fn test_budget_flag_rejects_non_positive() {
    assert!(Config::from_args(&args(&["--budget", "0"])).is_err());
    assert!(Config::from_args(&args(&["--budget", "-10"])).is_err());
    assert!(Config::from_args(&args(&["--budget", "lots"])).is_err());
}
