//! Optimal Games - Unified CLI
//!
//! Tic-tac-toe against a computer opponent that searches every
//! continuation and never loses.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod settings;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use optimal_tictactoe::{Board, search};
use settings::{FirstPlayer, Settings};
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            first,
            log_file,
        } => run_play(config, first, log_file),
        Command::Analyze { board, json } => run_analyze(&board, json),
    }
}

/// Run the terminal game
fn run_play(config: PathBuf, first: Option<FirstPlayer>, log_file: Option<PathBuf>) -> Result<()> {
    let mut settings = Settings::load_or_default(&config)?;
    if let Some(first) = first {
        settings = settings.with_first_player(first);
    }
    if let Some(log_file) = log_file {
        settings = settings.with_log_file(log_file);
    }

    initialize_file_tracing(&settings)?;
    info!(config = %config.display(), ?settings, "Starting Optimal Games");

    tui::run_tui(&settings)
}

/// Run the one-shot position analysis
#[instrument]
fn run_analyze(text: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut board: Board = text
        .parse()
        .with_context(|| format!("Invalid board '{}'", text))?;
    debug!(%board, "Analyzing position");

    let report = search::analyze(&mut board).context("Cannot analyze this position")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let best = report.best_move();
    println!("Position: {}", board);
    println!(
        "Best move: {} {} (score {})",
        best,
        best.label(),
        report.score()
    );
    println!("Candidates:");
    for candidate in report.candidates() {
        println!(
            "  {} {:<14} {:>2}",
            candidate.position,
            candidate.position.label(),
            candidate.score
        );
    }
    println!("Positions searched: {}", report.nodes());
    Ok(())
}

/// Logs go to a file so they don't interfere with the terminal UI.
fn initialize_file_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!(
            "Failed to create log file {}",
            settings.log_file().display()
        )
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}
