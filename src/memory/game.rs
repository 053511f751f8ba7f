//! The memory game engine: dealing, flip evaluation, turns, scoring.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::Duration;
use tracing::{debug, trace};

use crate::core::{Delayed, Epoch, GameRng, PlayerId, PlayerMap};

use super::card::{Card, CardId};
use super::pool::{Symbol, CLASSIC_POOL};

/// How long a mismatched pair stays face up before flipping back.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Pause between the last match and the finish announcement.
pub const FINISH_DELAY: Duration = Duration::from_millis(500);

/// Round lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Cards are on the table and flips are accepted.
    Playing,
    /// Every card is matched and the result stands.
    Finished,
}

/// Per-player roster entry: display name and score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Display name, editable at any time.
    pub name: String,

    /// Confirmed pairs this round.
    pub score: u32,
}

/// Deferred effects the engine can schedule.
///
/// Returned to the caller inside a [`Delayed`]; hand it back to
/// [`MemoryGame::fire`] once the delay expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryDelay {
    /// Flip a mismatched pair back down and pass the turn.
    RevertMismatch,
    /// Transition to [`Phase::Finished`] after the last match.
    AnnounceFinish,
}

/// Builder for a [`MemoryGame`].
///
/// ## Example
///
/// ```
/// use emoji_games::memory::{MemoryGameBuilder, EXTENDED_POOL};
///
/// let game = MemoryGameBuilder::new()
///     .player_count(2)
///     .card_count(24)
///     .pool(&EXTENDED_POOL)
///     .build(42);
///
/// assert_eq!(game.cards().len(), 24);
/// ```
pub struct MemoryGameBuilder {
    player_count: usize,
    card_count: usize,
    pool: &'static [Symbol],
}

impl Default for MemoryGameBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            card_count: 16,
            pool: &CLASSIC_POOL,
        }
    }
}

impl MemoryGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        assert!((1..=4).contains(&count), "Player count must be 1-4");
        self.player_count = count;
        self
    }

    pub fn card_count(mut self, count: usize) -> Self {
        assert!(count >= 2 && count % 2 == 0, "Card count must be even");
        self.card_count = count;
        self
    }

    pub fn pool(mut self, pool: &'static [Symbol]) -> Self {
        self.pool = pool;
        self
    }

    /// Deal the game.
    ///
    /// Panics if the pool cannot supply `card_count / 2` distinct symbols.
    #[must_use]
    pub fn build(self, seed: u64) -> MemoryGame {
        assert!(
            self.card_count / 2 <= self.pool.len(),
            "Pool too small for requested card count"
        );

        let mut rng = GameRng::new(seed);
        let cards = deal_cards(&mut rng, self.pool, self.card_count);

        debug!(
            players = self.player_count,
            cards = self.card_count,
            seed,
            "dealt memory game"
        );

        MemoryGame {
            cards,
            flipped: SmallVec::new(),
            matched: ImHashSet::new(),
            players: PlayerMap::new(self.player_count, |p| PlayerProfile {
                name: format!("{}", p),
                score: 0,
            }),
            current: PlayerId::new(0),
            evaluating: false,
            phase: Phase::Playing,
            epoch: Epoch::default(),
            rng,
            pool: self.pool,
            card_count: self.card_count,
        }
    }
}

/// Pick `card_count / 2` distinct symbols from the pool, duplicate each,
/// and lay the shuffled result out as cards with ids `0..card_count`.
fn deal_cards(rng: &mut GameRng, pool: &'static [Symbol], card_count: usize) -> Vec<Card> {
    let mut symbols: Vec<Symbol> = pool.to_vec();
    rng.shuffle(&mut symbols);
    symbols.truncate(card_count / 2);

    let mut faces: Vec<Symbol> = symbols.iter().chain(symbols.iter()).copied().collect();
    rng.shuffle(&mut faces);

    faces
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Card::new(CardId::new(i as u8), symbol))
        .collect()
}

/// The memory-matching engine.
///
/// All operations are synchronous; the two timed behaviors (mismatch
/// flip-back, finish announcement) are returned as [`Delayed`] values for
/// the caller to fire after the delay. Invalid inputs are silent no-ops.
pub struct MemoryGame {
    cards: Vec<Card>,
    /// Face-up, unmatched cards. Never more than two.
    flipped: SmallVec<[CardId; 2]>,
    matched: ImHashSet<CardId>,
    players: PlayerMap<PlayerProfile>,
    current: PlayerId,
    /// A mismatched pair is on the table awaiting its flip-back timer;
    /// further flips are rejected until it fires.
    evaluating: bool,
    phase: Phase,
    epoch: Epoch,
    rng: GameRng,
    pool: &'static [Symbol],
    card_count: usize,
}

impl MemoryGame {
    /// Flip a card face up.
    ///
    /// Ignored if the round is finished, a mismatch is awaiting its timer,
    /// two cards are already up, or the card is already face up or matched.
    ///
    /// When the second card of an attempt comes up the pair is evaluated
    /// immediately:
    /// - equal symbols: both cards become matched, the active player scores
    ///   a point and keeps the turn. If that was the last pair, returns the
    ///   [`MemoryDelay::AnnounceFinish`] effect.
    /// - unequal symbols: returns the [`MemoryDelay::RevertMismatch`]
    ///   effect; input stays blocked until the caller fires it.
    pub fn flip_card(&mut self, id: CardId) -> Option<Delayed<MemoryDelay>> {
        if self.phase == Phase::Finished || self.evaluating || self.flipped.len() >= 2 {
            trace!(card = %id, "flip rejected: input blocked");
            return None;
        }
        let Some(card) = self.cards.get_mut(id.index()) else {
            trace!(card = %id, "flip rejected: no such card");
            return None;
        };
        if card.flipped || card.matched {
            trace!(card = %id, "flip rejected: already face up");
            return None;
        }

        card.flipped = true;
        self.flipped.push(id);

        if self.flipped.len() < 2 {
            return None;
        }

        let (first, second) = (self.flipped[0], self.flipped[1]);
        if self.cards[first.index()].symbol == self.cards[second.index()].symbol {
            self.confirm_match(first, second)
        } else {
            debug!(%first, %second, "mismatch, scheduling flip-back");
            self.evaluating = true;
            Some(Delayed::new(
                self.epoch,
                MISMATCH_DELAY,
                MemoryDelay::RevertMismatch,
            ))
        }
    }

    /// Both cards of the attempt showed the same symbol. The matching
    /// player scores and keeps the turn.
    fn confirm_match(&mut self, first: CardId, second: CardId) -> Option<Delayed<MemoryDelay>> {
        for id in [first, second] {
            let card = &mut self.cards[id.index()];
            card.flipped = false;
            card.matched = true;
            self.matched.insert(id);
        }
        self.flipped.clear();
        self.players[self.current].score += 1;

        debug!(
            player = %self.current,
            score = self.players[self.current].score,
            "pair matched"
        );

        if self.matched.len() == self.cards.len() {
            Some(Delayed::new(
                self.epoch,
                FINISH_DELAY,
                MemoryDelay::AnnounceFinish,
            ))
        } else {
            None
        }
    }

    /// Apply a deferred effect whose delay has expired.
    ///
    /// Effects scheduled before the latest deal are dropped silently, so a
    /// timer that could not be physically cancelled cannot corrupt the new
    /// round.
    pub fn fire(&mut self, delayed: Delayed<MemoryDelay>) {
        if delayed.token != self.epoch {
            trace!("dropping stale timer");
            return;
        }

        match delayed.payload {
            MemoryDelay::RevertMismatch => {
                if !self.evaluating {
                    return;
                }
                for id in self.flipped.drain(..) {
                    self.cards[id.index()].flipped = false;
                }
                self.evaluating = false;
                if self.players.player_count() > 1 {
                    self.current = self.current.next(self.players.player_count());
                    debug!(player = %self.current, "turn passed");
                }
            }
            MemoryDelay::AnnounceFinish => {
                if self.matched.len() == self.cards.len() {
                    self.phase = Phase::Finished;
                    debug!("round finished");
                }
            }
        }
    }

    /// Change a player's display name. Allowed at any time, no validation.
    pub fn rename(&mut self, player: PlayerId, name: impl Into<String>) {
        if player.index() < self.players.player_count() {
            self.players[player].name = name.into();
        }
    }

    /// Re-deal with the same roster and names. Scores reset, turn returns
    /// to the first player, and all pending timers are invalidated.
    pub fn new_game(&mut self) {
        self.epoch.bump();
        self.cards = deal_cards(&mut self.rng, self.pool, self.card_count);
        self.flipped.clear();
        self.matched.clear();
        for (_, profile) in self.players.iter_mut() {
            profile.score = 0;
        }
        self.current = PlayerId::new(0);
        self.evaluating = false;
        self.phase = Phase::Playing;

        debug!(cards = self.card_count, "re-dealt");
    }

    /// The players with the highest score. More than one entry means a tie.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        let top = self
            .players
            .iter()
            .map(|(_, p)| p.score)
            .max()
            .unwrap_or(0);
        self.players
            .iter()
            .filter(|(_, p)| p.score == top)
            .map(|(id, _)| id)
            .collect()
    }

    // === Accessors ===

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// A single card, if the id is on the board.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// The player roster.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerProfile> {
        &self.players
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Round lifecycle state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a mismatched pair is on the table awaiting its timer.
    #[must_use]
    pub fn is_evaluating(&self) -> bool {
        self.evaluating
    }

    /// Currently face-up, unmatched cards (0, 1, or 2).
    #[must_use]
    pub fn flipped_cards(&self) -> &[CardId] {
        &self.flipped
    }

    /// How many cards are matched so far.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }
}
