//! Color codes: the secret and every guess share this shape.

use super::Color;
use serde::{Deserialize, Serialize};

/// An ordered sequence of colors.
///
/// A code carries no length or alphabet constraint of its own; those
/// belong to the [`GameConfig`](crate::GameConfig) it is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code {
    colors: Vec<Color>,
}

impl Code {
    /// Creates a code from its colors.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Returns the colors in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of pegs.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True for a code with no pegs.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates the colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl<const N: usize> From<[Color; N]> for Code {
    fn from(colors: [Color; N]) -> Self {
        Self::new(colors.to_vec())
    }
}

impl FromIterator<Color> for Code {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Code {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.colors.iter().map(|c| c.label()).collect();
        write!(f, "{}", labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    #[test]
    fn test_display_space_separated() {
        let code = Code::from([Red, Green, Blue, Yellow]);
        assert_eq!(code.to_string(), "R G B Y");
    }

    #[test]
    fn test_serializes_as_label_list() {
        let code = Code::from([Orange, White]);
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, r#"["O","W"]"#);
    }
}
