//! The closed set of peg colors.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A peg color.
///
/// Codes are built only from these six values. Which of them a game
/// actually allows is decided by its [`Alphabet`](crate::Alphabet).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum Color {
    /// Red (`R`)
    #[serde(rename = "R", alias = "red", alias = "Red")]
    Red,
    /// Green (`G`)
    #[serde(rename = "G", alias = "green", alias = "Green")]
    Green,
    /// Blue (`B`)
    #[serde(rename = "B", alias = "blue", alias = "Blue")]
    Blue,
    /// Yellow (`Y`)
    #[serde(rename = "Y", alias = "yellow", alias = "Yellow")]
    Yellow,
    /// White (`W`)
    #[serde(rename = "W", alias = "white", alias = "White")]
    White,
    /// Orange (`O`)
    #[serde(rename = "O", alias = "orange", alias = "Orange")]
    Orange,
}

impl Color {
    /// All colors, in label order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Orange,
    ];

    /// Single-letter label used on the board and in typed guesses.
    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "R",
            Color::Green => "G",
            Color::Blue => "B",
            Color::Yellow => "Y",
            Color::White => "W",
            Color::Orange => "O",
        }
    }

    /// Full lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::White => "white",
            Color::Orange => "orange",
        }
    }

    /// Parses a color from its letter label or full name (case-insensitive).
    #[instrument]
    pub fn from_label(s: &str) -> Option<Color> {
        let s = s.trim();
        <Color as strum::IntoEnumIterator>::iter().find(|color| {
            color.label().eq_ignore_ascii_case(s) || color.name().eq_ignore_ascii_case(s)
        })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_from_label_letters() {
        assert_eq!(Color::from_label("R"), Some(Color::Red));
        assert_eq!(Color::from_label("o"), Some(Color::Orange));
        assert_eq!(Color::from_label(" y "), Some(Color::Yellow));
    }

    #[test]
    fn test_from_label_names() {
        assert_eq!(Color::from_label("green"), Some(Color::Green));
        assert_eq!(Color::from_label("WHITE"), Some(Color::White));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(Color::from_label("P"), None);
        assert_eq!(Color::from_label(""), None);
        assert_eq!(Color::from_label("redd"), None);
    }

    #[test]
    fn test_all_matches_count() {
        assert_eq!(Color::ALL.len(), Color::COUNT);
        for color in Color::ALL {
            assert_eq!(Color::from_label(color.label()), Some(color));
        }
    }
}
