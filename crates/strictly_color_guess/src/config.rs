//! Game configuration: alphabet, code length and attempt budget.

use super::Color;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Pegs per code in the classic game.
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Guesses allowed per game in the classic game.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// The colors a game may use.
///
/// Always non-empty and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Alphabet {
    colors: Vec<Color>,
}

impl Alphabet {
    /// Creates an alphabet, rejecting empty or repeated color lists.
    #[track_caller]
    #[instrument]
    pub fn new(colors: Vec<Color>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::new("Alphabet must contain at least one color".to_string()));
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(ConfigError::new(format!(
                    "Alphabet lists color {} more than once",
                    color
                )));
            }
        }
        Ok(Self { colors })
    }

    /// Returns the allowed colors in configured order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of allowed colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Checks whether the color may appear in a code.
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
        }
    }
}

impl TryFrom<Vec<Color>> for Alphabet {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Alphabet> for Vec<Color> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.colors
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.colors.iter().map(|c| c.label()).collect();
        write!(f, "{}", labels.join(" "))
    }
}

/// Settings for one game of color guess.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "GameConfigFile")]
pub struct GameConfig {
    /// Colors allowed in the secret and in guesses.
    alphabet: Alphabet,

    /// Pegs per code.
    code_length: usize,

    /// Guesses allowed before the game is lost.
    max_attempts: u32,
}

/// On-disk shape of [`GameConfig`]; every key is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GameConfigFile {
    #[serde(default)]
    alphabet: Alphabet,
    #[serde(default = "default_code_length")]
    code_length: usize,
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,
}

#[instrument]
fn default_code_length() -> usize {
    DEFAULT_CODE_LENGTH
}

#[instrument]
fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl TryFrom<GameConfigFile> for GameConfig {
    type Error = ConfigError;

    fn try_from(file: GameConfigFile) -> Result<Self, Self::Error> {
        Self::new(file.alphabet, file.code_length, file.max_attempts)
    }
}

impl GameConfig {
    /// Creates a validated configuration.
    #[track_caller]
    #[instrument(skip(alphabet), fields(alphabet = %alphabet))]
    pub fn new(alphabet: Alphabet, code_length: usize, max_attempts: u32) -> Result<Self, ConfigError> {
        if code_length == 0 {
            return Err(ConfigError::new("Code length must be at least 1".to_string()));
        }
        if max_attempts == 0 {
            return Err(ConfigError::new("Max attempts must be at least 1".to_string()));
        }
        Ok(Self {
            alphabet,
            code_length,
            max_attempts,
        })
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;

        info!(
            code_length = config.code_length,
            max_attempts = config.max_attempts,
            alphabet = %config.alphabet,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Returns a copy with a different code length.
    #[track_caller]
    pub fn with_code_length(self, code_length: usize) -> Result<Self, ConfigError> {
        Self::new(self.alphabet, code_length, self.max_attempts)
    }

    /// Returns a copy with a different attempt budget.
    #[track_caller]
    pub fn with_max_attempts(self, max_attempts: u32) -> Result<Self, ConfigError> {
        Self::new(self.alphabet, self.code_length, max_attempts)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_game() {
        let config = GameConfig::default();
        assert_eq!(*config.code_length(), 4);
        assert_eq!(*config.max_attempts(), 10);
        assert_eq!(config.alphabet().len(), 6);
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let err = Alphabet::new(Vec::new()).unwrap_err();
        assert!(err.message.contains("at least one color"));
    }

    #[test]
    fn test_duplicate_alphabet_rejected() {
        let err = Alphabet::new(vec![Color::Red, Color::Blue, Color::Red]).unwrap_err();
        assert!(err.message.contains("more than once"));
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(GameConfig::new(Alphabet::default(), 0, 10).is_err());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert!(GameConfig::new(Alphabet::default(), 4, 0).is_err());
    }

    #[test]
    fn test_toml_defaults_fill_missing_keys() {
        let config = GameConfig::from_toml_str("max_attempts = 3").unwrap();
        assert_eq!(*config.max_attempts(), 3);
        assert_eq!(*config.code_length(), DEFAULT_CODE_LENGTH);
        assert_eq!(config.alphabet(), &Alphabet::default());
    }

    #[test]
    fn test_toml_full() {
        let config = GameConfig::from_toml_str(
            r#"
alphabet = ["R", "G", "blue"]
code_length = 5
max_attempts = 12
"#,
        )
        .unwrap();
        assert_eq!(config.alphabet().colors(), &[Color::Red, Color::Green, Color::Blue]);
        assert_eq!(*config.code_length(), 5);
        assert_eq!(*config.max_attempts(), 12);
    }

    #[test]
    fn test_toml_invalid_values_rejected() {
        assert!(GameConfig::from_toml_str("code_length = 0").is_err());
        assert!(GameConfig::from_toml_str("alphabet = []").is_err());
        assert!(GameConfig::from_toml_str(r#"alphabet = ["P"]"#).is_err());
        assert!(GameConfig::from_toml_str("tries = 3").is_err());
    }
}
