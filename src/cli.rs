//! Command-line interface for neon_tictactoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Neon Tic Tac Toe - terminal tic-tac-toe with persisted player stats
#[derive(Parser, Debug)]
#[command(name = "neon_tictactoe")]
#[command(about = "Neon-themed tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the game UI
    Play {
        /// Path to a TOML settings file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to the JSON store file (overrides settings)
        #[arg(long)]
        store_path: Option<PathBuf>,

        /// Disable the decorative particle effects
        #[arg(long)]
        no_effects: bool,
    },

    /// Print the persisted profile and statistics
    Stats {
        /// Path to the JSON store file
        #[arg(long, default_value = "neon_tictactoe.json")]
        store_path: PathBuf,
    },

    /// Clear the persisted profile (same as logging out)
    Reset {
        /// Path to the JSON store file
        #[arg(long, default_value = "neon_tictactoe.json")]
        store_path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: None,
            store_path: None,
            no_effects: false,
        }
    }
}
