//! Strictly Color Guess - pure game logic for a Mastermind-style code breaker
//!
//! A secret code of colored pegs is hidden; each guess is answered with the
//! number of pegs in the right position and the number of right colors in
//! the wrong position.
//!
//! # Architecture
//!
//! - **Scoring**: [`score`] compares one guess with the secret
//! - **Session**: [`Session`] runs a bounded number of rounds to a win or loss
//! - **Config**: [`GameConfig`] fixes the alphabet, code length and attempts
//! - **Generator**: [`SecretGenerator`] supplies secrets
//! - **Guess**: [`parse_guess`] validates typed input
//!
//! # Example
//!
//! ```
//! use strictly_color_guess::{Code, Color, GameConfig, Session, SessionStatus};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let secret = Code::from([Color::Red, Color::Green, Color::Blue, Color::Yellow]);
//! let mut session = Session::with_secret(GameConfig::default(), secret.clone())?;
//!
//! let outcome = session.submit_guess(secret)?;
//! assert_eq!(outcome.status, SessionStatus::Won { attempts: 1 });
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod code;
mod color;
mod config;
mod generator;
mod guess;
mod scoring;
mod session;
mod tally;

// Crate-level exports - Domain types
pub use code::Code;
pub use color::Color;

// Crate-level exports - Configuration
pub use config::{Alphabet, ConfigError, GameConfig, DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS};

// Crate-level exports - Scoring
pub use scoring::{score, ScoreError, ScoreResult};

// Crate-level exports - Session management
pub use session::{Round, RoundOutcome, Session, SessionError, SessionStatus};

// Crate-level exports - Collaborators
pub use generator::{FixedGenerator, RandomGenerator, SecretGenerator};
pub use guess::{parse_guess, GuessError};
pub use tally::Tally;
