//! Command-line interface for color_guess.

use clap::{Parser, Subcommand};

/// Color Guess - crack the hidden color code
#[derive(Parser, Debug)]
#[command(name = "color_guess")]
#[command(about = "Mastermind-style color code breaker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration (alphabet, code_length, max_attempts)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Print the answer sheet before each game
        #[arg(long)]
        demo: bool,

        /// Seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,

        /// Override the number of guesses per game
        #[arg(long)]
        tries: Option<u32>,

        /// Override the number of pegs per code
        #[arg(long)]
        length: Option<usize>,
    },

    /// Score a single guess against a known secret
    Score {
        /// Secret code, e.g. "R G B Y"
        #[arg(long)]
        secret: String,

        /// Guess to score, e.g. "G R B W"
        #[arg(long)]
        guess: String,
    },
}
