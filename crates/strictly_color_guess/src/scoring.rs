//! Peg scoring for a single guess.
//!
//! Scoring runs in two passes over a multiset of the secret's colors.
//! Exact matches are counted and consumed first, then every remaining
//! mismatch may claim one unconsumed occurrence of its color. Consuming
//! before the second pass is what keeps a secret peg from being credited
//! twice and caps repeated guess colors at the secret's occurrences.

use super::{Code, Color};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{instrument, trace, warn};

/// Feedback for one guess: exact and misplaced peg counts.
///
/// Invariant: `exact_positions + wrong_positions` never exceeds the code length.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_new::new,
)]
pub struct ScoreResult {
    exact_positions: usize,
    wrong_positions: usize,
}

impl ScoreResult {
    /// Pegs with the right color in the right position.
    pub fn exact_positions(&self) -> usize {
        self.exact_positions
    }

    /// Pegs with a color present elsewhere in the secret.
    pub fn wrong_positions(&self) -> usize {
        self.wrong_positions
    }

    /// True when every peg of a code of `code_length` is exact.
    pub fn is_solved(&self, code_length: usize) -> bool {
        self.exact_positions == code_length
    }
}

impl std::fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Correct Positions: {} | Incorrect Positions: {}",
            self.exact_positions, self.wrong_positions
        )
    }
}

/// Error raised when two codes cannot be compared.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScoreError {
    /// Guess and secret have different lengths.
    #[display("Expected a code of {} colors, got {}", expected, actual)]
    InvalidLength {
        /// Length required by the secret or configuration.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl std::error::Error for ScoreError {}

/// Scores `guess` against `secret`.
///
/// Both codes must have the same length; a mismatch is reported rather
/// than truncated or padded.
#[instrument(skip_all, fields(guess = %guess, len = secret.len()))]
pub fn score(guess: &Code, secret: &Code) -> Result<ScoreResult, ScoreError> {
    if guess.len() != secret.len() {
        warn!(
            expected = secret.len(),
            actual = guess.len(),
            "Refusing to score codes of different lengths"
        );
        return Err(ScoreError::InvalidLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut remaining: HashMap<Color, usize> = HashMap::new();
    for color in secret {
        *remaining.entry(*color).or_default() += 1;
    }

    let mut exact_positions = 0;
    for (guessed, actual) in guess.iter().zip(secret) {
        if guessed == actual {
            exact_positions += 1;
            consume(&mut remaining, *guessed);
        }
    }

    let mut wrong_positions = 0;
    for (guessed, actual) in guess.iter().zip(secret) {
        if guessed != actual && consume(&mut remaining, *guessed) {
            wrong_positions += 1;
        }
    }

    trace!(exact_positions, wrong_positions, "Scored guess");
    Ok(ScoreResult::new(exact_positions, wrong_positions))
}

/// Takes one unconsumed occurrence of `color`, if any is left.
fn consume(remaining: &mut HashMap<Color, usize>, color: Color) -> bool {
    match remaining.get_mut(&color) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn code<const N: usize>(colors: [Color; N]) -> Code {
        Code::from(colors)
    }

    #[test]
    fn test_all_correct() {
        let secret = code([Red, Green, Blue, Yellow]);
        assert_eq!(score(&secret, &secret).unwrap(), ScoreResult::new(4, 0));
    }

    #[test]
    fn test_disjoint_colors() {
        let secret = code([Red, Green, Red, Green]);
        let guess = code([Blue, Yellow, White, Orange]);
        assert_eq!(score(&guess, &secret).unwrap(), ScoreResult::new(0, 0));
    }

    #[test]
    fn test_swapped_pair_and_one_exact() {
        let secret = code([Red, Green, Blue, Yellow]);
        let guess = code([Green, Red, Blue, White]);
        assert_eq!(score(&guess, &secret).unwrap(), ScoreResult::new(1, 2));
    }

    #[test]
    fn test_full_permutation_with_duplicates() {
        let secret = code([Red, Red, Green, Blue]);
        let guess = code([Blue, Green, Red, Red]);
        assert_eq!(score(&guess, &secret).unwrap(), ScoreResult::new(0, 4));
    }

    #[test]
    fn test_repeated_guess_capped_by_exact_matches() {
        let secret = code([Red, Red, Green, Blue]);
        let guess = code([Red, Red, Red, Red]);
        assert_eq!(score(&guess, &secret).unwrap(), ScoreResult::new(2, 0));
    }

    #[test]
    fn test_repeated_guess_capped_by_secret_occurrences() {
        let secret = code([Red, Green, Blue, Yellow]);
        let guess = code([Green, Green, Green, Red]);
        // One Green is exact; the other Greens find nothing left. Red is misplaced.
        assert_eq!(score(&guess, &secret).unwrap(), ScoreResult::new(1, 1));
    }

    #[test]
    fn test_exact_match_not_double_counted() {
        let secret = code([Blue, Orange, Orange, White]);
        let guess = code([Orange, Orange, Yellow, Yellow]);
        assert_eq!(score(&guess, &secret).unwrap(), ScoreResult::new(1, 1));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let secret = code([Red, Green, Blue, Yellow]);
        let guess = code([Red, Green, Blue]);
        assert_eq!(
            score(&guess, &secret),
            Err(ScoreError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_display_matches_round_feedback() {
        assert_eq!(
            ScoreResult::new(1, 2).to_string(),
            "Correct Positions: 1 | Incorrect Positions: 2"
        );
    }
}
