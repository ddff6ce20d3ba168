use std::path::PathBuf;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::store::{validate, DEFAULT_MONTHLY_BUDGET};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Mode {
    Tui,
    /// Read commands from the file, or stdin when `None`.
    Batch(Option<PathBuf>),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub(crate) mode: Mode,
    pub(crate) monthly_budget: Decimal,
}

impl Config {
    /// Parse process arguments, including the program name at index 0.
    pub(crate) fn from_args(args: &[String]) -> Result<Self> {
        let mut monthly_budget = DEFAULT_MONTHLY_BUDGET;
        let mut positional: Vec<&str> = Vec::new();

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            if arg == "--budget" {
                let Some(value) = iter.next() else {
                    anyhow::bail!("--budget requires an amount");
                };
                monthly_budget = validate::parse_budget(value)?;
            } else if let Some(value) = arg.strip_prefix("--budget=") {
                monthly_budget = validate::parse_budget(value)?;
            } else {
                positional.push(arg.as_str());
            }
        }

        let mode = match positional.as_slice() {
            [] => Mode::Tui,
            ["batch"] => Mode::Batch(None),
            ["batch", "-"] => Mode::Batch(None),
            ["batch", path] => Mode::Batch(Some(PathBuf::from(path))),
            ["help" | "--help" | "-h", ..] => Mode::Help,
            ["version" | "--version" | "-V", ..] => Mode::Version,
            ["batch", ..] => anyhow::bail!("Usage: billtui batch [file]"),
            [other, ..] => anyhow::bail!("Unknown command: {other}"),
        };

        Ok(Self {
            mode,
            monthly_budget,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
