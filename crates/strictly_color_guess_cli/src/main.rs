//! Color Guess - command-line front end
//!
//! Plays the color code breaker on stdin/stdout, or scores a single guess.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use play::PlayOptions;
use std::path::Path;
use strictly_color_guess::{GameConfig, RandomGenerator};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            demo,
            seed,
            tries,
            length,
        } => run_play(config, demo, seed, tries, length),
        Command::Score { secret, guess } => {
            play::score_once(&config, &secret, &guess, &mut std::io::stdout().lock())
        }
    }
}

/// Loads the game configuration, falling back to the classic game.
#[instrument]
fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            debug!("No config file given, using defaults");
            Ok(GameConfig::default())
        }
    }
}

/// Run an interactive sitting on stdin/stdout
#[instrument(skip(config))]
fn run_play(
    config: GameConfig,
    demo: bool,
    seed: Option<u64>,
    tries: Option<u32>,
    length: Option<usize>,
) -> Result<()> {
    let config = match tries {
        Some(tries) => config.with_max_attempts(tries)?,
        None => config,
    };
    let config = match length {
        Some(length) => config.with_code_length(length)?,
        None => config,
    };

    let mut generator = match seed {
        Some(seed) => RandomGenerator::seeded(seed),
        None => RandomGenerator::from_entropy(),
    };

    info!(
        code_length = *config.code_length(),
        max_attempts = *config.max_attempts(),
        "Starting color guess"
    );

    let stdin = std::io::stdin();
    let tally = play::run(
        &config,
        &mut generator,
        PlayOptions { demo },
        &mut stdin.lock(),
        &mut std::io::stdout().lock(),
    )?;

    info!(played = tally.played(), won = tally.won(), "Goodbye");
    Ok(())
}
