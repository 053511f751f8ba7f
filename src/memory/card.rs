//! Cards: identity and face state.

use serde::Serialize;

use super::pool::Symbol;

/// Card identifier: the card's position in the deal, stable for the whole
/// round. Decks hold at most 32 cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the card's position index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card {}", self.0)
    }
}

/// A single card on the board.
///
/// `flipped` marks a face-up card that is not yet matched; a matched card
/// clears `flipped` and sets `matched` permanently for the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Position identity, stable until the next deal.
    pub id: CardId,

    /// The emoji on the card's face.
    pub symbol: Symbol,

    /// Face up, awaiting its pair.
    pub flipped: bool,

    /// Permanently paired off for this round.
    pub matched: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            flipped: false,
            matched: false,
        }
    }

    /// Whether the card is showing its face (flipped or matched).
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }
}
