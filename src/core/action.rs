//! Action vocabulary: guesses and confirmations.
//!
//! The two roles have disjoint action spaces, represented as a tagged enum
//! rather than bare integers:
//! - the Guesser names a rung: `Guess(rung)`, rung 1-based;
//! - the Adjudicator answers the pending guess: `Confirm(Right)` or
//!   `Confirm(Left)`.
//!
//! Generic game-tree hosts speak flat integer action ids, so a codec maps
//! both vocabularies onto one id space, disambiguated by whose turn it is:
//! a Guesser id is the 1-based rung index; an Adjudicator id of 0 means
//! Right, anything greater means Left.

use serde::{Deserialize, Serialize};

use super::board::NUM_COLS;
use super::player::PlayerId;

/// The Adjudicator's two possible answers to a pending guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// Confirm the guessed rung: it is marked `Nought` and every rung
    /// strictly below it is eliminated.
    Right,
    /// Reject upward: the guessed rung and everything above it is
    /// eliminated, consuming a jar.
    Left,
}

/// A complete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Guesser selects a rung (1-based). Held as the pending guess until
    /// the next confirmation consumes it.
    Guess(usize),
    /// Adjudicator answers the pending guess.
    Confirm(Branch),
}

impl Action {
    /// Decode a flat action id in the context of the player to move.
    ///
    /// Panics on a Guesser id of 0 - no rung has that index, so the id
    /// cannot have come from `legal_actions`.
    #[must_use]
    pub fn from_id(player: PlayerId, id: u64) -> Self {
        if player.index() == 0 {
            assert!(id >= 1, "guess action id must be a 1-based rung index, got 0");
            Action::Guess(id as usize)
        } else if id == 0 {
            Action::Confirm(Branch::Right)
        } else {
            Action::Confirm(Branch::Left)
        }
    }

    /// Encode to the flat action id the host sees.
    #[must_use]
    pub fn id(self) -> u64 {
        match self {
            Action::Guess(rung) => rung as u64,
            Action::Confirm(Branch::Right) => 0,
            Action::Confirm(Branch::Left) => 1,
        }
    }

    /// Human-readable rendering, prefixed with the acting player's role.
    ///
    /// A guess renders its target column index; a confirmation renders
    /// "R" or "L".
    #[must_use]
    pub fn to_string_for(self, player: PlayerId) -> String {
        match self {
            Action::Guess(rung) => format!("{}({})", player.label(), rung % NUM_COLS),
            Action::Confirm(Branch::Right) => format!("{}(R)", player.label()),
            Action::Confirm(Branch::Left) => format!("{}(L)", player.label()),
        }
    }
}

/// A history entry: who acted, and how.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,
    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action) -> Self {
        Self { player, action }
    }
}
