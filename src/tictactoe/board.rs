//! The 3x3 board and win/draw detection.

use serde::{Deserialize, Serialize};

/// A player mark. `X` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    #[must_use]
    pub const fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals. Checked in this
/// fixed order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Game outcome. Exactly one variant holds at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still being accepted.
    InProgress,
    /// A mark completed a line; `line` holds the three cell indices.
    Won { mark: Mark, line: [usize; 3] },
    /// All nine cells occupied, no line complete.
    Draw,
}

impl Outcome {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// A 3x3 board. Cells are indexed 0-8, row-major.
///
/// An occupied cell never changes until the board is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    /// Number of cells.
    pub const CELLS: usize = 9;

    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mark in a cell, if any. Out-of-range indices read as empty.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Whether a cell is unoccupied.
    #[must_use]
    pub fn is_free(&self, index: usize) -> bool {
        index < Self::CELLS && self.cells[index].is_none()
    }

    /// Occupy a cell. Returns false (and changes nothing) if the cell is
    /// taken or out of range.
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_free(index) {
            return false;
        }
        self.cells[index] = Some(mark);
        true
    }

    /// A copy of this board with one extra mark. Used by the move policy to
    /// test hypothetical moves.
    #[must_use]
    pub fn with(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.place(index, mark);
        next
    }

    /// Indices of unoccupied cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::CELLS).filter(|&i| self.cells[i].is_none())
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Evaluate the board: the first complete line in [`WIN_LINES`] order
    /// wins; a full board with no complete line is a draw.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        for line in WIN_LINES {
            let [a, b, c] = line;
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Outcome::Won { mark, line };
                }
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}
