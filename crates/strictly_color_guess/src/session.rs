//! Turn controller for one game of color guess.
//!
//! A [`Session`] owns the secret and an attempt counter. Each submitted
//! guess is scored and moves the session to one of three states:
//! still in progress, won, or out of attempts.

use super::scoring::{score, ScoreError, ScoreResult};
use super::{Code, Color, GameConfig, SecretGenerator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a session stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Guesses are still accepted.
    InProgress,
    /// The secret was guessed.
    Won {
        /// Attempt on which the secret was found (1-based).
        attempts: u32,
    },
    /// Every attempt was used without finding the secret.
    Exhausted {
        /// The secret, disclosed now that the game is over.
        secret: Code,
    },
}

impl SessionStatus {
    /// True once the session accepts no more guesses.
    pub fn is_finished(&self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }

    /// True for a won session.
    pub fn is_won(&self) -> bool {
        matches!(self, SessionStatus::Won { .. })
    }
}

/// A guess together with the feedback it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The submitted guess.
    pub guess: Code,
    /// Its score against the secret.
    pub score: ScoreResult,
}

/// What a display layer needs after one guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Attempt number the guess was scored as (1-based).
    pub attempt: u32,
    /// Peg feedback.
    pub score: ScoreResult,
    /// Session state after the guess.
    pub status: SessionStatus,
}

/// Error returned when a session cannot accept a code.
///
/// Guesses are expected to be validated before they reach the session,
/// so every variant points at a defect in the caller.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The code has the wrong number of pegs.
    #[display("{}", _0)]
    Score(ScoreError),

    /// The code uses a color outside the configured alphabet.
    #[display("Color {} is not in this game's alphabet", _0)]
    InvalidSymbol(Color),

    /// The session already ended.
    #[display("Session is already finished")]
    Finished,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Score(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScoreError> for SessionError {
    fn from(err: ScoreError) -> Self {
        SessionError::Score(err)
    }
}

/// One game: a secret, an attempt budget and the guesses made so far.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    secret: Code,
    attempt: u32,
    status: SessionStatus,
    history: Vec<Round>,
}

impl Session {
    /// Starts a session with a secret drawn from `generator`.
    #[instrument(skip(generator))]
    pub fn new(
        config: GameConfig,
        generator: &mut impl SecretGenerator,
    ) -> Result<Self, SessionError> {
        let secret = generator.generate(config.alphabet(), *config.code_length());
        Self::with_secret(config, secret)
    }

    /// Starts a session with a known secret.
    #[instrument(skip(secret))]
    pub fn with_secret(config: GameConfig, secret: Code) -> Result<Self, SessionError> {
        check_code(&config, &secret)?;
        info!(
            code_length = *config.code_length(),
            max_attempts = *config.max_attempts(),
            "Starting color guess session"
        );
        Ok(Self {
            config,
            secret,
            attempt: 1,
            status: SessionStatus::InProgress,
            history: Vec::new(),
        })
    }

    /// Scores a guess and advances the session.
    ///
    /// Winning takes priority over running out of attempts, so a correct
    /// final guess still wins.
    #[instrument(skip(self, guess), fields(attempt = self.attempt, guess = %guess))]
    pub fn submit_guess(&mut self, guess: Code) -> Result<RoundOutcome, SessionError> {
        if self.status.is_finished() {
            warn!(status = ?self.status, "Guess submitted to finished session");
            return Err(SessionError::Finished);
        }
        check_code(&self.config, &guess)?;

        let result = score(&guess, &self.secret)?;
        let attempt = self.attempt;
        self.history.push(Round {
            guess,
            score: result,
        });

        if result.is_solved(*self.config.code_length()) {
            info!(attempts = attempt, "Secret found");
            self.status = SessionStatus::Won { attempts: attempt };
        } else if attempt >= *self.config.max_attempts() {
            info!(attempts = attempt, "Out of attempts");
            self.status = SessionStatus::Exhausted {
                secret: self.secret.clone(),
            };
        } else {
            self.attempt += 1;
            debug!(
                exact = result.exact_positions(),
                wrong = result.wrong_positions(),
                next_attempt = self.attempt,
                "Round scored"
            );
        }

        Ok(RoundOutcome {
            attempt,
            score: result,
            status: self.status.clone(),
        })
    }

    /// Current attempt number (1-based).
    ///
    /// Stays at the final attempt once the session ends.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Guesses still allowed, counting the current one.
    pub fn attempts_remaining(&self) -> u32 {
        if self.status.is_finished() {
            0
        } else {
            *self.config.max_attempts() - self.attempt + 1
        }
    }

    /// Returns the session state.
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Returns the configuration the session runs under.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Guesses submitted so far, oldest first.
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// The secret, once the session is over.
    pub fn revealed_secret(&self) -> Option<&Code> {
        self.status.is_finished().then_some(&self.secret)
    }

    /// The secret regardless of state, for demo mode answer sheets.
    pub fn demo_secret(&self) -> &Code {
        &self.secret
    }
}

/// Rejects codes with the wrong length or colors outside the alphabet.
fn check_code(config: &GameConfig, code: &Code) -> Result<(), SessionError> {
    let expected = *config.code_length();
    if code.len() != expected {
        warn!(expected, actual = code.len(), "Code has wrong length");
        return Err(ScoreError::InvalidLength {
            expected,
            actual: code.len(),
        }
        .into());
    }
    if let Some(color) = code.iter().find(|c| !config.alphabet().contains(**c)) {
        warn!(%color, "Code uses color outside alphabet");
        return Err(SessionError::InvalidSymbol(*color));
    }
    Ok(())
}
