//! The tic-tac-toe engine: mode selection, turns, the computer's deferred
//! move.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

use crate::core::{Delayed, Epoch, GameRng};

use super::board::{Board, Mark, Outcome};
use super::policy;

/// The computer's "thinking" pause before its move is applied.
pub const COMPUTER_DELAY: Duration = Duration::from_millis(700);

/// The mark the computer plays in [`Mode::PlayerVsComputer`]. The human
/// plays `X` and always moves first.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Who is playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

/// Deferred effects the engine can schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TttDelay {
    /// Run the move policy and place the computer's mark.
    ComputerMove,
}

/// The tic-tac-toe engine.
///
/// Starts in the mode-selection state; [`TicTacToe::select_mode`] begins
/// play. Invalid inputs are silent no-ops. The computer's move is returned
/// as a [`Delayed`] effect for the caller to fire after the thinking pause.
pub struct TicTacToe {
    mode: Option<Mode>,
    board: Board,
    current: Mark,
    outcome: Outcome,
    epoch: Epoch,
    rng: GameRng,
}

impl TicTacToe {
    /// Create an engine in the mode-selection state.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            mode: None,
            board: Board::new(),
            current: Mark::X,
            outcome: Outcome::InProgress,
            epoch: Epoch::default(),
            rng: GameRng::new(seed),
        }
    }

    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy().seed())
    }

    /// Choose (or change) the game mode. Always resets the board.
    pub fn select_mode(&mut self, mode: Mode) {
        self.clear_board();
        self.mode = Some(mode);
        debug!(?mode, "mode selected");
    }

    /// Return to the mode-selection state, resetting the board.
    pub fn to_mode_select(&mut self) {
        self.clear_board();
        self.mode = None;
    }

    /// Clear the board for another round in the same mode. Pending computer
    /// moves are invalidated.
    pub fn reset(&mut self) {
        self.clear_board();
        debug!("board reset");
    }

    fn clear_board(&mut self) {
        self.epoch.bump();
        self.board = Board::new();
        self.current = Mark::X;
        self.outcome = Outcome::InProgress;
    }

    /// Place the current mark in a cell.
    ///
    /// Ignored if no mode is selected, the game is over, the cell is taken,
    /// or (against the computer) it is the computer's turn. When the move
    /// hands the turn to the computer, returns the
    /// [`TttDelay::ComputerMove`] effect to fire after [`COMPUTER_DELAY`].
    pub fn place_mark(&mut self, cell: usize) -> Option<Delayed<TttDelay>> {
        let Some(mode) = self.mode else {
            trace!(cell, "move rejected: no mode selected");
            return None;
        };
        if self.outcome.is_terminal() || !self.board.is_free(cell) {
            trace!(cell, "move rejected: cell unavailable");
            return None;
        }
        if mode == Mode::PlayerVsComputer && self.current == COMPUTER_MARK {
            trace!(cell, "move rejected: computer's turn");
            return None;
        }

        self.apply(cell)
    }

    /// Apply a deferred effect whose delay has expired. Effects scheduled
    /// before the latest reset are dropped silently.
    pub fn fire(&mut self, delayed: Delayed<TttDelay>) {
        if delayed.token != self.epoch {
            trace!("dropping stale timer");
            return;
        }

        match delayed.payload {
            TttDelay::ComputerMove => {
                if self.mode != Some(Mode::PlayerVsComputer)
                    || self.current != COMPUTER_MARK
                    || self.outcome.is_terminal()
                {
                    return;
                }
                if let Some(cell) = policy::choose_move(&self.board, COMPUTER_MARK, &mut self.rng)
                {
                    debug!(cell, "computer plays");
                    // The turn goes back to the human, so no further effect
                    // is scheduled here.
                    let _ = self.apply(cell);
                }
            }
        }
    }

    /// Occupy the cell, re-evaluate, and pass the turn if play continues.
    fn apply(&mut self, cell: usize) -> Option<Delayed<TttDelay>> {
        self.board.place(cell, self.current);
        self.outcome = self.board.outcome();

        if self.outcome.is_terminal() {
            debug!(outcome = ?self.outcome, "game over");
            return None;
        }

        self.current = self.current.other();
        if self.mode == Some(Mode::PlayerVsComputer) && self.current == COMPUTER_MARK {
            return Some(Delayed::new(self.epoch, COMPUTER_DELAY, TttDelay::ComputerMove));
        }
        None
    }

    // === Accessors ===

    /// The selected mode, if any.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose mark moves next.
    #[must_use]
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// The game outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}
