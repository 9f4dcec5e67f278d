//! Secret code generation.

use super::{Alphabet, Code};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Produces secret codes for new sessions.
///
/// Implementations must return exactly `length` colors, each drawn from
/// `alphabet`. Sessions reject anything else.
pub trait SecretGenerator {
    /// Generates one secret.
    fn generate(&mut self, alphabet: &Alphabet, length: usize) -> Code;
}

/// Draws every peg independently and uniformly, repeats allowed.
#[derive(Debug, Clone)]
pub struct RandomGenerator<R = StdRng> {
    rng: R,
}

impl RandomGenerator<StdRng> {
    /// Seeds from operating-system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible games.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomGenerator<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SecretGenerator for RandomGenerator<R> {
    #[instrument(skip(self, alphabet), fields(alphabet = %alphabet))]
    fn generate(&mut self, alphabet: &Alphabet, length: usize) -> Code {
        let colors = alphabet.colors();
        let code: Code = (0..length)
            .map(|_| colors[self.rng.gen_range(0..colors.len())])
            .collect();
        debug!(length, "Generated secret code");
        code
    }
}

/// Always hands out the same code.
///
/// Used for scripted games and tests where the secret must be known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedGenerator {
    code: Code,
}

impl FixedGenerator {
    /// Creates a generator that returns `code` on every call.
    pub fn new(code: Code) -> Self {
        Self { code }
    }
}

impl SecretGenerator for FixedGenerator {
    fn generate(&mut self, _alphabet: &Alphabet, _length: usize) -> Code {
        self.code.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_random_code_has_requested_length() {
        let mut generator = RandomGenerator::seeded(7);
        let code = generator.generate(&Alphabet::default(), 4);
        assert_eq!(code.len(), 4);
    }

    #[test]
    fn test_random_code_stays_in_alphabet() {
        let alphabet = Alphabet::new(vec![Color::Blue, Color::Orange]).unwrap();
        let mut generator = RandomGenerator::seeded(42);
        for _ in 0..50 {
            let code = generator.generate(&alphabet, 6);
            assert!(code.iter().all(|c| alphabet.contains(*c)));
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let alphabet = Alphabet::default();
        let a = RandomGenerator::seeded(99).generate(&alphabet, 8);
        let b = RandomGenerator::seeded(99).generate(&alphabet, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_color_alphabet() {
        let alphabet = Alphabet::new(vec![Color::White]).unwrap();
        let code = RandomGenerator::seeded(1).generate(&alphabet, 3);
        assert_eq!(code, Code::from([Color::White, Color::White, Color::White]));
    }

    #[test]
    fn test_fixed_generator_repeats() {
        let code = Code::from([Color::Red, Color::Green]);
        let mut generator = FixedGenerator::new(code.clone());
        assert_eq!(generator.generate(&Alphabet::default(), 2), code);
        assert_eq!(generator.generate(&Alphabet::default(), 2), code);
    }
}
