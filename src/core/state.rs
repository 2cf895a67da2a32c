//! The game state machine.
//!
//! ## GameState
//!
//! Owns the board, the three counters, the pending guess, the player to
//! move, the outcome, and the action history. Everything mutates through
//! `apply_action`; `Clone` yields a fully independent copy so search
//! algorithms can branch without replaying.
//!
//! The turn cycle: the Guesser names a still-empty rung (held as the
//! pending guess, no board mutation), then the Adjudicator consumes it
//! with a Right or Left confirmation that marks the board and updates the
//! counters. Win predicates run after every applied action, the mover
//! still being the player whose action was just applied:
//!
//! 1. `rungs_left == 1` - the mover's opponent wins;
//! 2. otherwise any counter at zero - the mover wins.
//!
//! Because the predicates run on the Guesser's turn too (when no counter
//! has changed since the previous confirmation), a guess can only decide
//! the game if the previous confirmation already produced a winning
//! configuration; normally that confirmation is itself observed as
//! terminal first. The evaluation is kept unconditional and the behavior
//! is pinned by a regression test.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord, Branch};
use super::board::{Board, CellState, CELL_STATES, NUM_CELLS};
use super::player::{PlayerId, GUESSER};

/// Starting budget of confirmations available to the Adjudicator.
pub const NUM_QUESTIONS: u32 = 4;
/// Starting count of the auxiliary resource consumed by Left answers.
pub const NUM_JARS: u32 = 2;

/// The shared mutable state of one game in progress.
///
/// History uses a persistent `im::Vector` so `Clone` stays cheap under
/// MCTS branching; structural sharing is immutable, so mutating a clone
/// never affects the original.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    questions_left: u32,
    rungs_left: u32,
    jars_left: u32,
    /// Most recent guess, 1-based, not yet consumed by a confirmation.
    pending_guess: Option<usize>,
    to_move: PlayerId,
    /// Winner once settled. Terminal is absorbing.
    outcome: Option<PlayerId>,
    history: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the initial state: all-empty board, counters at their
    /// starting constants, Guesser to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            questions_left: NUM_QUESTIONS,
            rungs_left: NUM_CELLS as u32,
            jars_left: NUM_JARS,
            pending_guess: None,
            to_move: GUESSER,
            outcome: None,
            history: Vector::new(),
        }
    }

    // === Queries ===

    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.is_terminal() {
            None
        } else {
            Some(self.to_move)
        }
    }

    /// Whether the outcome has been settled.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<PlayerId> {
        self.outcome
    }

    /// Zero-sum terminal payoff, indexed by player: +1 to the winner, -1
    /// to the loser, all zeros while undetermined.
    #[must_use]
    pub fn returns(&self) -> [f64; 2] {
        match self.outcome {
            Some(p) if p.index() == 0 => [1.0, -1.0],
            Some(_) => [-1.0, 1.0],
            None => [0.0, 0.0],
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Confirmations the Adjudicator may still make.
    #[must_use]
    pub fn questions_left(&self) -> u32 {
        self.questions_left
    }

    /// Size of the currently active ladder segment.
    #[must_use]
    pub fn rungs_left(&self) -> u32 {
        self.rungs_left
    }

    /// Jars remaining; a Left answer consumes one.
    #[must_use]
    pub fn jars_left(&self) -> u32 {
        self.jars_left
    }

    /// The not-yet-consumed guess, 1-based.
    #[must_use]
    pub fn pending_guess(&self) -> Option<usize> {
        self.pending_guess
    }

    /// Ordered sequence of applied actions.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The flat action ids of the history, for id-based hosts.
    #[must_use]
    pub fn history_ids(&self) -> Vec<u64> {
        self.history.iter().map(|r| r.action.id()).collect()
    }

    // === Legal actions ===

    /// Legal actions for the player to move; empty once terminal.
    ///
    /// Guesser: one `Guess` per still-empty cell, in index order.
    /// Adjudicator: exactly `Confirm(Right)` and `Confirm(Left)`.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_terminal() {
            return Vec::new();
        }
        if self.to_move == GUESSER {
            self.board
                .empty_cells()
                .map(|cell| Action::Guess(cell + 1))
                .collect()
        } else {
            vec![Action::Confirm(Branch::Right), Action::Confirm(Branch::Left)]
        }
    }

    /// Legal actions as flat ids, for id-based hosts.
    #[must_use]
    pub fn legal_action_ids(&self) -> Vec<u64> {
        self.legal_actions().iter().map(|a| a.id()).collect()
    }

    // === Transitions ===

    /// Apply an action for the player to move.
    ///
    /// The host is trusted to supply only values drawn from
    /// `legal_actions`; anything else is a contract breach and panics
    /// with a diagnostic naming the violated precondition.
    pub fn apply_action(&mut self, action: Action) {
        assert!(
            !self.is_terminal(),
            "apply_action called on a terminal state"
        );
        let mover = self.to_move;

        match (mover, action) {
            (p, Action::Guess(rung)) if p == GUESSER => {
                assert!(
                    (1..=NUM_CELLS).contains(&rung),
                    "guess {rung} out of range 1..={NUM_CELLS}"
                );
                assert!(
                    self.board.is_empty(rung - 1),
                    "guessed rung {rung} is already marked"
                );
                self.pending_guess = Some(rung);
            }
            (p, Action::Confirm(branch)) if p != GUESSER => {
                let guess = self
                    .pending_guess
                    .unwrap_or_else(|| panic!("confirmation with no pending guess"));
                match branch {
                    Branch::Right => self.confirm_right(guess),
                    Branch::Left => self.confirm_left(guess),
                }
            }
            (p, a) => panic!("action {a:?} is not in {}'s action space", p.label()),
        }

        self.evaluate_outcome(mover);
        self.history.push_back(ActionRecord::new(mover, action));
        self.to_move = mover.opponent();
    }

    /// Decode and apply a flat action id for the player to move.
    pub fn apply_action_id(&mut self, id: u64) {
        assert!(
            !self.is_terminal(),
            "apply_action called on a terminal state"
        );
        let action = Action::from_id(self.to_move, id);
        self.apply_action(action);
    }

    /// Right answer: the guessed rung holds. It is marked `Nought`, every
    /// rung strictly below it is eliminated, and the active segment
    /// shrinks to the rungs above it.
    fn confirm_right(&mut self, guess: usize) {
        self.questions_left -= 1;
        self.rungs_left = (NUM_CELLS - guess) as u32;

        self.board.set(guess - 1, CellState::Nought);
        for cell in 0..guess.saturating_sub(1) {
            self.board.set(cell, CellState::Cross);
        }
    }

    /// Left answer: the guessed rung fails. It and everything above it is
    /// eliminated, the active segment shrinks to the rungs below it, and
    /// a jar is consumed.
    fn confirm_left(&mut self, guess: usize) {
        for cell in (guess - 1)..NUM_CELLS {
            self.board.set(cell, CellState::Cross);
        }
        self.questions_left -= 1;
        self.rungs_left = guess as u32;
        self.jars_left -= 1;
    }

    /// Win predicates, in fixed priority order, relative to the mover.
    fn evaluate_outcome(&mut self, mover: PlayerId) {
        if self.rungs_left == 1 {
            self.outcome = Some(mover.opponent());
        } else if self.jars_left == 0 || self.questions_left == 0 || self.rungs_left == 0 {
            self.outcome = Some(mover);
        }
    }

    /// Partial undo of the most recent action.
    ///
    /// Reverts the single board cell indexed by the raw action id (when in
    /// range), hands the turn back to `player`, clears the outcome, and
    /// pops the history entry. Counters and the pending guess are NOT
    /// restored; callers needing a full inverse must snapshot or re-derive.
    pub fn undo_action(&mut self, player: PlayerId, action: Action) {
        player.check_valid();
        let id = action.id() as usize;
        if id < NUM_CELLS {
            self.board.set(id, CellState::Empty);
        }
        self.to_move = player;
        self.outcome = None;
        self.history.pop_back();
    }

    // === Observations ===

    /// The full action history as a string, identical for both players
    /// (perfect information).
    #[must_use]
    pub fn information_state_string(&self, player: PlayerId) -> String {
        player.check_valid();
        let ids: Vec<String> = self
            .history
            .iter()
            .map(|r| r.action.id().to_string())
            .collect();
        ids.join(", ")
    }

    /// The board rendering, from any valid player's perspective.
    #[must_use]
    pub fn observation_string(&self, player: PlayerId) -> String {
        player.check_valid();
        self.board.to_string()
    }

    /// One-hot encode the board into a caller-provided buffer laid out as
    /// `(CELL_STATES, NUM_CELLS)` row-major: channel 0 empty, 1 nought,
    /// 2 cross.
    ///
    /// The buffer length must be exactly `CELL_STATES * NUM_CELLS`.
    pub fn observation_tensor(&self, player: PlayerId, buffer: &mut [f32]) {
        player.check_valid();
        assert_eq!(
            buffer.len(),
            CELL_STATES * NUM_CELLS,
            "observation buffer length {} != {}",
            buffer.len(),
            CELL_STATES * NUM_CELLS
        );

        buffer.fill(0.0);
        for (cell, state) in self.board.iter().enumerate() {
            buffer[state.channel() * NUM_CELLS + cell] = 1.0;
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
