//! Parsing typed guesses into codes.
//!
//! This is the input side of the game: it turns a line such as
//! `"r g b y"` into a [`Code`] that satisfies the configuration, or
//! explains what is wrong so the caller can ask again.

use super::{Code, Color, GameConfig};
use tracing::{debug, instrument};

/// Why a typed guess was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Too many or too few colors.
    #[display("You must guess {} colors.", expected)]
    WrongLength {
        /// Colors required.
        expected: usize,
        /// Colors typed.
        actual: usize,
    },

    /// A token that names no color.
    #[display("Invalid color {:?}. Try again.", _0)]
    UnknownColor(String),

    /// A real color this game does not use.
    #[display("Invalid color {}. Try again.", _0)]
    NotInAlphabet(Color),
}

impl std::error::Error for GuessError {}

/// Parses a whitespace-separated guess.
///
/// Tokens are letter labels or color names in any case. Length is
/// checked before individual colors.
#[instrument(skip(config))]
pub fn parse_guess(line: &str, config: &GameConfig) -> Result<Code, GuessError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let expected = *config.code_length();
    if tokens.len() != expected {
        debug!(expected, actual = tokens.len(), "Wrong number of colors");
        return Err(GuessError::WrongLength {
            expected,
            actual: tokens.len(),
        });
    }

    tokens
        .into_iter()
        .map(|token| {
            let color = Color::from_label(token)
                .ok_or_else(|| GuessError::UnknownColor(token.to_string()))?;
            if config.alphabet().contains(color) {
                Ok(color)
            } else {
                Err(GuessError::NotInAlphabet(color))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Alphabet;
    use Color::*;

    #[test]
    fn test_parse_uppercase_letters() {
        let code = parse_guess("R G B Y", &GameConfig::default()).unwrap();
        assert_eq!(code, Code::from([Red, Green, Blue, Yellow]));
    }

    #[test]
    fn test_parse_mixed_case_and_names() {
        let code = parse_guess("  r green B   orange\n", &GameConfig::default()).unwrap();
        assert_eq!(code, Code::from([Red, Green, Blue, Orange]));
    }

    #[test]
    fn test_wrong_count() {
        let err = parse_guess("R G B", &GameConfig::default()).unwrap_err();
        assert_eq!(
            err,
            GuessError::WrongLength {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(err.to_string(), "You must guess 4 colors.");
    }

    #[test]
    fn test_empty_line() {
        let err = parse_guess("", &GameConfig::default()).unwrap_err();
        assert!(matches!(err, GuessError::WrongLength { actual: 0, .. }));
    }

    #[test]
    fn test_unknown_color() {
        let err = parse_guess("R G P Y", &GameConfig::default()).unwrap_err();
        assert_eq!(err, GuessError::UnknownColor("P".to_string()));
        assert!(err.to_string().contains("Try again."));
    }

    #[test]
    fn test_color_outside_alphabet() {
        let alphabet = Alphabet::new(vec![Red, Green, Blue]).unwrap();
        let config = GameConfig::new(alphabet, 2, 5).unwrap();
        let err = parse_guess("R W", &config).unwrap_err();
        assert_eq!(err, GuessError::NotInAlphabet(White));
    }
}
