//! Core engine types: players, board, actions, the state machine.
//!
//! Everything here is the turn-by-turn machinery; the game-facing
//! descriptor and registry live one level up.

pub mod action;
pub mod board;
pub mod player;
pub mod state;

pub use action::{Action, ActionRecord, Branch};
pub use board::{Board, CellState, CELL_STATES, NUM_CELLS, NUM_COLS, NUM_ROWS};
pub use player::{PlayerId, ADJUDICATOR, GUESSER, NUM_PLAYERS};
pub use state::{GameState, NUM_JARS, NUM_QUESTIONS};
