//! Command-line interface for optimal_games.

use crate::settings::{DEFAULT_SETTINGS_FILE, FirstPlayer};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Optimal Games - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "optimal_games")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the settings file (optional; defaults apply if missing)
        #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
        config: PathBuf,

        /// Who moves first, overriding the settings file
        #[arg(long, value_enum)]
        first: Option<FirstPlayer>,

        /// Log file, overriding the settings file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the computer's evaluation of a position
    Analyze {
        /// Board as three rows of `.`, `1` (human) or `2` (computer), e.g. `110/220/...`
        #[arg(short, long)]
        board: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from(DEFAULT_SETTINGS_FILE),
            first: None,
            log_file: None,
        }
    }
}
