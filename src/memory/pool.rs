//! Symbol pools for the memory game.
//!
//! A deal picks `card_count / 2` distinct symbols from one pool and lays
//! each out twice. Two pools exist, matching the two published variants of
//! the game.

/// A card face. Emoji are multi-scalar strings, so symbols are `str`s
/// rather than `char`s.
pub type Symbol = &'static str;

/// The classic pool: 16 symbols, played as a fixed 16-card (8-pair) deal.
pub const CLASSIC_POOL: [Symbol; 16] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼",
    "🚗", "✈️", "🚀", "⛵️", "🍕", "🍔", "🍓", "🍉",
];

/// The extended pool: 24 symbols, supporting 16-, 24-, and 32-card deals.
pub const EXTENDED_POOL: [Symbol; 24] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼",
    "🚗", "✈️", "🚀", "⛵️", "🍕", "🍔", "🍓", "🍉",
    "⚽️", "🏀", "🏈", "⚾️", "🎾", "🏐", "🏉", "🎱",
];
