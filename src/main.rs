//! Neon Tic Tac Toe - terminal edition.

#![warn(missing_docs)]

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use neon_tictactoe::{
    AppController, AppSettings, JsonFileStore, SessionContext, SessionRecord, Store,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log file used while the TUI owns the terminal.
const LOG_FILE: &str = "neon_tictactoe.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            store_path,
            no_effects,
        } => run_play(config, store_path, no_effects),
        Command::Stats { store_path } => run_stats(store_path),
        Command::Reset { store_path } => run_reset(store_path),
    }
}

/// Run the game UI
fn run_play(
    config: Option<PathBuf>,
    store_path: Option<PathBuf>,
    no_effects: bool,
) -> Result<()> {
    // Stdout belongs to the TUI, so tracing goes to a file.
    let log_file = std::fs::File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let mut settings = match config {
        Some(path) => AppSettings::from_file(path)?,
        None => AppSettings::load_or_default()?,
    };
    if let Some(path) = store_path {
        settings.set_store_path(path);
    }
    if no_effects {
        settings.disable_effects();
    }

    info!(store_path = %settings.store_path().display(), "Starting Neon Tic Tac Toe");

    let store = JsonFileStore::new(settings.store_path().clone());
    let ctx = SessionContext::new(Box::new(store))?;
    let mut controller = AppController::new(ctx, settings);

    let mut terminal = ratatui::init();
    let result = controller.run(&mut terminal);
    ratatui::restore();
    result
}

/// Print the persisted profile and statistics
fn run_stats(store_path: PathBuf) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = JsonFileStore::new(store_path);
    let record = store.load()?;

    if record.name().is_empty() {
        println!("No active session.");
        return Ok(());
    }

    let stats = record.stats();
    println!("Profile: {}", record.name());
    println!("  Matches played: {}", stats.matches_played());
    println!("  Matches won:    {}", stats.matches_won());
    println!("  Matches lost:   {}", stats.matches_lost());
    println!("  Matches drawn:  {}", stats.matches_draw());
    println!("  Win rate:       {:.1}%", stats.win_rate());
    Ok(())
}

/// Clear the persisted profile
fn run_reset(store_path: PathBuf) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = JsonFileStore::new(store_path);
    store.save(&SessionRecord::default())?;
    println!("Profile data cleared.");
    Ok(())
}
