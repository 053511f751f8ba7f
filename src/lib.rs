//! # emoji-games
//!
//! Turn-based engines for two small children's games: an emoji
//! memory-matching game for 1-4 players and tic-tac-toe with an optional
//! computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: each engine is a plain state machine. A
//!    presentation layer calls operations in response to input events and
//!    re-renders from accessors after every call.
//!
//! 2. **Permissive-ignore**: invalid inputs (flipping a matched card,
//!    marking an occupied cell, acting out of turn) are silent no-ops,
//!    never errors.
//!
//! 3. **Explicit timers**: engines never block. A deferred effect (the
//!    mismatch flip-back, the computer's "thinking" pause) is handed to the
//!    caller as a [`Delayed`] value carrying an [`Epoch`] token. The caller
//!    waits out the delay and hands it back to the engine's `fire`; any
//!    reset in between bumps the epoch and the stale callback is dropped.
//!
//! 4. **Deterministic**: all randomness (deck shuffling, the computer's
//!    block-or-not coin, random fallback moves) flows through a seeded
//!    [`GameRng`]. Same seed, same game.
//!
//! ## Modules
//!
//! - `core`: player identifiers, per-player storage, RNG, timer tokens
//! - `memory`: the memory-matching engine
//! - `tictactoe`: the tic-tac-toe engine and its move policy

pub mod core;
pub mod memory;
pub mod tictactoe;

// Re-export commonly used types
pub use crate::core::{Delayed, Epoch, GameRng, PlayerId, PlayerMap};

pub use crate::memory::{
    Card, CardId, MemoryDelay, MemoryGame, MemoryGameBuilder, Phase, PlayerProfile, Symbol,
    CLASSIC_POOL, EXTENDED_POOL,
};

pub use crate::tictactoe::{
    Board, Mark, Mode, Outcome, TicTacToe, TttDelay, COMPUTER_MARK, WIN_LINES,
};
