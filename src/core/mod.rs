//! Core engine types: players, RNG, timer tokens.
//!
//! These building blocks are game-agnostic. Both game engines are built on
//! top of them.

pub mod player;
pub mod rng;
pub mod timer;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use timer::{Delayed, Epoch};
