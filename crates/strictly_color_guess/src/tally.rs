//! Running score across replayed games.

use super::SessionStatus;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Games played and won in one sitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    played: u32,
    won: u32,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Unfinished sessions are ignored.
    #[instrument]
    pub fn record(&mut self, status: &SessionStatus) {
        match status {
            SessionStatus::InProgress => {}
            SessionStatus::Won { .. } => {
                self.played += 1;
                self.won += 1;
            }
            SessionStatus::Exhausted { .. } => self.played += 1,
        }
    }

    /// Finished games.
    pub fn played(&self) -> u32 {
        self.played
    }

    /// Games where the secret was found; this is the player's score.
    pub fn won(&self) -> u32 {
        self.won
    }
}
