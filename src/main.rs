//! Five in a row - unified CLI
//!
//! Interactive terminal game and headless replay.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use five_in_a_row::{Report, Settings, parse_script, run_script, run_tui};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(Some(cli.config.as_path()))?;

    match cli.command {
        Command::Play => run_play(&settings),
        Command::Replay { script, json } => run_replay(&settings, script, json),
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Run the interactive game, logging to a file so the screen stays clean
fn run_play(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    run_tui(settings)
}

/// Run a script and print the final position
fn run_replay(settings: &Settings, script: Option<PathBuf>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .init();

    let report = replay(script)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

#[instrument]
fn replay(script: Option<PathBuf>) -> Result<Report> {
    let text = match &script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let commands = parse_script(&text)?;
    let history = run_script(&commands)?;
    info!(pointer = history.pointer(), len = history.len(), "Replay finished");
    Ok(Report::from_history(&history))
}
