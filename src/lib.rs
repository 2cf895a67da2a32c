//! # hsr-engine
//!
//! A deterministic, perfect-information, two-player, zero-sum engine for
//! the Highest Safe Rung guess-and-confirm ladder game, built for
//! external search and learning hosts (MCTS, self-play training loops).
//!
//! ## Design Principles
//!
//! 1. **Closed state machine**: every input is either legal (proceeds) or
//!    illegal (fatal with a diagnostic). The host is trusted to draw
//!    actions from `legal_actions`; there is no recoverable-error path at
//!    play time.
//!
//! 2. **Cheap branching**: `Clone` yields a fully independent copy.
//!    History uses `im` persistent structures so search trees can fork
//!    states freely.
//!
//! 3. **Explicit registration**: games are looked up by name in a
//!    `GameRegistry` populated at program initialization, not through
//!    static constructor side effects.
//!
//! ## Modules
//!
//! - `core`: players, board, actions, the `GameState` machine
//! - `game`: the `HsrGame` definition and its static `GameType` facts
//! - `registry`: the name-keyed game catalog
//! - `encoder`: one-hot observation tensors for learning hosts

pub mod core;
pub mod encoder;
pub mod game;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, Branch, CellState, GameState, PlayerId, ADJUDICATOR,
    CELL_STATES, GUESSER, NUM_CELLS, NUM_COLS, NUM_JARS, NUM_PLAYERS, NUM_QUESTIONS, NUM_ROWS,
};

pub use crate::game::{
    ChanceMode, Dynamics, GameType, HsrGame, Information, RewardModel, Utility, GAME_TYPE,
};

pub use crate::registry::{GameParameters, GameRegistry, RegistryError};

pub use crate::encoder::{EncodedState, OneHotBoardEncoder, StateEncoder};
