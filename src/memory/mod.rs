//! Memory-matching engine.
//!
//! ## Key Types
//!
//! - [`Card`] / [`CardId`]: one face of the deck, identified by its stable
//!   board position
//! - [`MemoryGameBuilder`]: configures player count, deck size, and symbol
//!   pool, then deals
//! - [`MemoryGame`]: round state, flip evaluation, turn rotation, scoring
//! - [`MemoryDelay`]: the engine's two deferred effects (mismatch flip-back
//!   and the finish announcement)
//!
//! ## Rules
//!
//! Players take turns flipping two cards. A matching pair stays face up,
//! scores one point, and the matching player keeps the turn. A mismatched
//! pair flips back after a short delay and the turn passes. The game ends
//! when every card is matched; the highest score wins, ties included.

pub mod card;
pub mod game;
pub mod pool;

pub use card::{Card, CardId};
pub use game::{
    MemoryDelay, MemoryGame, MemoryGameBuilder, Phase, PlayerProfile, FINISH_DELAY, MISMATCH_DELAY,
};
pub use pool::{Symbol, CLASSIC_POOL, EXTENDED_POOL};
