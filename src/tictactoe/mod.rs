//! Tic-tac-toe engine.
//!
//! ## Key Types
//!
//! - [`Board`] / [`Mark`] / [`Outcome`]: the 3x3 grid and win/draw detection
//! - [`TicTacToe`]: mode selection, turn alternation, the computer's
//!   deferred move
//! - [`choose_move`]: the computer's fixed-priority move policy
//!
//! ## Computer Opponent
//!
//! The computer plays a three-tier heuristic, not a search: take an
//! immediate win, usually (65%) block an immediate threat, otherwise move at
//! random. It is intentionally beatable.

pub mod board;
pub mod game;
pub mod policy;

pub use board::{Board, Mark, Outcome, WIN_LINES};
pub use game::{Mode, TicTacToe, TttDelay, COMPUTER_DELAY, COMPUTER_MARK};
pub use policy::{choose_move, BLOCK_PROBABILITY};
