//! Player identification for the two fixed roles.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The game has exactly two players:
//! player 0 is the Guesser, player 1 is the Adjudicator. They alternate
//! strictly on every applied action.

use serde::{Deserialize, Serialize};

/// Number of players. Fixed; the game has no parameters.
pub const NUM_PLAYERS: usize = 2;

/// Player 0: selects a candidate rung each turn.
pub const GUESSER: PlayerId = PlayerId(0);

/// Player 1: answers a pending guess with a Left/Right confirmation.
pub const ADJUDICATOR: PlayerId = PlayerId(1);

/// Player identifier (0 = Guesser, 1 = Adjudicator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    ///
    /// Panics on an id outside 0..2 - such a value can only come from a
    /// host bug, never from game play.
    #[must_use]
    pub fn opponent(self) -> PlayerId {
        match self.0 {
            0 => ADJUDICATOR,
            1 => GUESSER,
            id => panic!("invalid player id {id}"),
        }
    }

    /// Role label used in action rendering.
    ///
    /// Panics on an invalid id (defensive default case, same taxonomy as
    /// `opponent`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Guesser",
            1 => "Adjudicator",
            id => panic!("invalid player id {id}"),
        }
    }

    /// Assert that `self` names a real player.
    ///
    /// Observation accessors call this before touching state; an
    /// out-of-range id is a host contract breach.
    pub fn check_valid(self) {
        assert!(
            self.index() < NUM_PLAYERS,
            "player id {} out of range (expected 0..{NUM_PLAYERS})",
            self.0
        );
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
