//! The game definition: fixed facts and initial-state construction.
//!
//! `HsrGame` is an immutable descriptor consumed once at registration
//! time. It advertises the classification a generic search host needs to
//! route algorithms (sequential, deterministic, perfect information,
//! zero-sum, terminal-only reward, exactly two players) and manufactures
//! fresh `GameState` values.

use serde::{Deserialize, Serialize};

use crate::core::board::{CELL_STATES, NUM_CELLS};
use crate::core::player::NUM_PLAYERS;
use crate::core::state::GameState;

/// How players take turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dynamics {
    Sequential,
    Simultaneous,
}

/// Whether chance nodes exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChanceMode {
    Deterministic,
    ExplicitStochastic,
}

/// What players can observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Information {
    PerfectInformation,
    ImperfectInformation,
}

/// How payoffs relate across players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Utility {
    ZeroSum,
    GeneralSum,
}

/// When rewards are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardModel {
    Terminal,
    Rewards,
}

/// Static facts about a game, used by a host catalog to route generic
/// search algorithms without game-specific code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameType {
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub dynamics: Dynamics,
    pub chance_mode: ChanceMode,
    pub information: Information,
    pub utility: Utility,
    pub reward_model: RewardModel,
    pub min_players: usize,
    pub max_players: usize,
    pub provides_information_state_string: bool,
    pub provides_information_state_tensor: bool,
    pub provides_observation_string: bool,
    pub provides_observation_tensor: bool,
}

/// Facts about this game. No configurable parameters exist.
pub const GAME_TYPE: GameType = GameType {
    short_name: "hsr",
    long_name: "Highest Safe Rung",
    dynamics: Dynamics::Sequential,
    chance_mode: ChanceMode::Deterministic,
    information: Information::PerfectInformation,
    utility: Utility::ZeroSum,
    reward_model: RewardModel::Terminal,
    min_players: NUM_PLAYERS,
    max_players: NUM_PLAYERS,
    provides_information_state_string: true,
    provides_information_state_tensor: false,
    provides_observation_string: true,
    provides_observation_tensor: true,
};

/// The game definition: hands fresh states to the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct HsrGame;

impl HsrGame {
    /// Create the definition. Parameters are fixed; nothing to validate.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The game's static facts.
    #[must_use]
    pub fn game_type(&self) -> &'static GameType {
        &GAME_TYPE
    }

    /// A fresh initial state: all-empty board, counters at their
    /// constants, Guesser to move, empty history.
    #[must_use]
    pub fn new_initial_state(&self) -> GameState {
        GameState::new()
    }

    /// Number of players.
    #[must_use]
    pub fn num_players(&self) -> usize {
        NUM_PLAYERS
    }

    /// Size of the flat action id space: ids `0..=NUM_CELLS` cover both
    /// roles' vocabularies.
    #[must_use]
    pub fn num_distinct_actions(&self) -> usize {
        NUM_CELLS + 1
    }

    /// Shape of the observation tensor.
    #[must_use]
    pub fn observation_tensor_shape(&self) -> [usize; 2] {
        [CELL_STATES, NUM_CELLS]
    }

    /// Minimum terminal utility for any player.
    #[must_use]
    pub fn min_utility(&self) -> f64 {
        -1.0
    }

    /// Maximum terminal utility for any player.
    #[must_use]
    pub fn max_utility(&self) -> f64 {
        1.0
    }
}
