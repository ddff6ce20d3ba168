mod config;
mod models;
mod run;
mod store;
mod ui;

use std::io::IsTerminal;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use config::{Config, Mode};

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_args(&args)?;
    tracing::debug!(?config, "starting billtui");

    match config.mode {
        Mode::Tui => run::as_tui(store::BillStore::with_budget(config.monthly_budget)),
        _ => run::as_cli(config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BILLTUI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
