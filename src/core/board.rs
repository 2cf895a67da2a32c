//! The ladder board: a fixed grid of three-valued cells.
//!
//! Cells start `Empty` and are marked only by the Adjudicator's confirm
//! actions: the confirmed rung becomes `Nought`, eliminated rungs become
//! `Cross`. Later confirms may overwrite earlier marks; only `undo_action`
//! ever reverts a cell to `Empty`.

use serde::{Deserialize, Serialize};

/// Board rows. Fixed; the game has no parameters.
pub const NUM_ROWS: usize = 3;
/// Board columns.
pub const NUM_COLS: usize = 3;
/// Total rungs on the ladder.
pub const NUM_CELLS: usize = NUM_ROWS * NUM_COLS;
/// Distinct cell states, the channel count of the observation tensor.
pub const CELL_STATES: usize = 3;

/// State of a single rung.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Not yet touched by a confirmation.
    Empty,
    /// The confirmed rung ("o").
    Nought,
    /// An eliminated rung ("x").
    Cross,
}

impl CellState {
    /// Single-character board symbol.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Nought => 'o',
            CellState::Cross => 'x',
        }
    }

    /// Channel index in the one-hot observation layout.
    #[must_use]
    pub fn channel(self) -> usize {
        match self {
            CellState::Empty => 0,
            CellState::Nought => 1,
            CellState::Cross => 2,
        }
    }
}

/// Fixed-size board, owned by the state object. No external aliasing:
/// clones get independent copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [CellState; NUM_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [CellState::Empty; NUM_CELLS],
        }
    }

    /// Cell state at a 0-based index.
    #[must_use]
    pub fn at(&self, cell: usize) -> CellState {
        self.cells[cell]
    }

    /// Cell state at (row, column).
    #[must_use]
    pub fn at_rc(&self, row: usize, col: usize) -> CellState {
        self.cells[row * NUM_COLS + col]
    }

    /// Overwrite a cell.
    pub fn set(&mut self, cell: usize, state: CellState) {
        self.cells[cell] = state;
    }

    /// Whether a cell is still unmarked.
    #[must_use]
    pub fn is_empty(&self, cell: usize) -> bool {
        self.cells[cell] == CellState::Empty
    }

    /// 0-based indices of all unmarked cells, in order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == CellState::Empty)
            .map(|(i, _)| i)
    }

    /// Iterate over all cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().copied()
    }
}

impl std::fmt::Display for Board {
    /// Row-major rendering, one row per line, no trailing newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                write!(f, "{}", self.at_rc(row, col).symbol())?;
            }
            if row < NUM_ROWS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
