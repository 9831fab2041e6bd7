//! Grid Arcade - Unified CLI
//!
//! Terminal tic-tac-toe and snake, plus headless runs of both.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use grid_arcade::cli::{Cli, Command, Path};
use grid_arcade::{ArcadeConfig, MotionConfig, headless, tui};
use std::path::Path as FsPath;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Toe => {
            init_file_logging(&cli.log_file)?;
            let config = load_config(cli.config.as_deref())?;
            info!("Starting turn mode");
            tui::run_turn_tui(*config.turn()).await
        }
        Command::Snake { tick_ms } => {
            init_file_logging(&cli.log_file)?;
            let config = load_config(cli.config.as_deref())?;
            let motion = with_tick_override(*config.motion(), tick_ms)?;
            info!("Starting motion mode");
            tui::run_motion_tui(motion).await
        }
        Command::Replay { moves } => {
            init_stderr_logging();
            let config = load_config(cli.config.as_deref())?;
            run_replay(&config, &moves)
        }
        Command::Simulate { path } => {
            init_stderr_logging();
            let config = load_config(cli.config.as_deref())?;
            run_simulate(&config, &path)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends logs to a file so they do not garble the terminal UI.
fn init_file_logging(path: &FsPath) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

#[instrument]
fn load_config(path: Option<&FsPath>) -> Result<ArcadeConfig> {
    match path {
        Some(path) => Ok(ArcadeConfig::from_file(path)?),
        None => Ok(ArcadeConfig::default()),
    }
}

fn with_tick_override(motion: MotionConfig, tick_ms: Option<u64>) -> Result<MotionConfig> {
    let Some(tick_ms) = tick_ms else {
        return Ok(motion);
    };
    let motion = motion.with_tick_ms(tick_ms);
    motion.validate()?;
    Ok(motion)
}

/// Plays the move list and prints the final board.
fn run_replay(config: &ArcadeConfig, moves: &[usize]) -> Result<()> {
    let controller = headless::replay(*config.turn(), moves)?;
    println!("{}", controller.grid().display());
    println!();
    println!("{}", controller.status());
    Ok(())
}

/// Runs the motion game along `path` and prints the final body.
fn run_simulate(config: &ArcadeConfig, path: &Path) -> Result<()> {
    let engine = headless::simulate(*config.motion(), &path.0);
    let body: Vec<String> = engine.body().iter().map(|p| p.to_string()).collect();
    println!("body: {}", body.join(" "));
    println!("heading: {}", engine.heading());
    println!("ticks: {}", engine.ticks());
    println!("status: {}", engine.status());
    Ok(())
}
