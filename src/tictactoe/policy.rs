//! The computer's move policy.
//!
//! A fixed three-tier priority, not a search:
//!
//! 1. **Win**: the first empty cell (index order) completing a line for the
//!    computer. Deterministic.
//! 2. **Block, usually**: with probability [`BLOCK_PROBABILITY`], the first
//!    empty cell (index order) that denies the opponent a completed line.
//!    The rest of the time the blocking tier is skipped outright so a child
//!    can win sometimes.
//! 3. **Random**: a uniform pick among the remaining empty cells.

use tracing::trace;

use crate::core::GameRng;

use super::board::{Board, Mark, Outcome};

/// Chance that the policy blocks an opponent's immediate threat.
pub const BLOCK_PROBABILITY: f64 = 0.65;

/// Pick a cell for `computer` to play.
///
/// Returns `None` only for a full board, which the engine's terminal-outcome
/// guard makes unreachable; reaching it indicates an engine bug.
pub fn choose_move(board: &Board, computer: Mark, rng: &mut GameRng) -> Option<usize> {
    // Tier 1: take an immediate win.
    for cell in board.empty_cells() {
        if matches!(board.with(cell, computer).outcome(), Outcome::Won { .. }) {
            trace!(cell, "winning move");
            return Some(cell);
        }
    }

    // Tier 2: usually block an immediate threat.
    if rng.gen_bool(BLOCK_PROBABILITY) {
        let opponent = computer.other();
        for cell in board.empty_cells() {
            if matches!(board.with(cell, opponent).outcome(), Outcome::Won { .. }) {
                trace!(cell, "blocking move");
                return Some(cell);
            }
        }
    }

    // Tier 3: move at random.
    let open: Vec<usize> = board.empty_cells().collect();
    debug_assert!(!open.is_empty(), "move requested on a full board");
    rng.choose(&open).copied()
}
