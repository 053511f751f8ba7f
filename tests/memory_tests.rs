//! Memory engine integration tests: deal properties, scripted rounds,
//! winner determination.

use proptest::prelude::*;
use std::collections::HashMap;

use emoji_games::core::PlayerId;
use emoji_games::memory::{
    Card, CardId, MemoryDelay, MemoryGame, MemoryGameBuilder, Phase, CLASSIC_POOL, EXTENDED_POOL,
};

/// Ids of an unmatched pair sharing a symbol.
fn find_pair(game: &MemoryGame) -> (CardId, CardId) {
    let cards = game.cards();
    for (i, a) in cards.iter().enumerate() {
        if a.matched {
            continue;
        }
        for b in &cards[i + 1..] {
            if a.symbol == b.symbol && !b.matched {
                return (a.id, b.id);
            }
        }
    }
    unreachable!("unmatched cards always pair up");
}

/// Ids of two unmatched cards with different symbols.
fn find_mismatch(game: &MemoryGame) -> (CardId, CardId) {
    let cards = game.cards();
    for (i, a) in cards.iter().enumerate() {
        if a.matched {
            continue;
        }
        for b in &cards[i + 1..] {
            if a.symbol != b.symbol && !b.matched {
                return (a.id, b.id);
            }
        }
    }
    unreachable!("more than one symbol remains");
}

/// Let the current player match one pair.
fn match_one(game: &mut MemoryGame) -> Option<emoji_games::Delayed<MemoryDelay>> {
    let (a, b) = find_pair(game);
    game.flip_card(a);
    game.flip_card(b)
}

/// Let the current player flub one attempt, passing the turn.
fn miss_one(game: &mut MemoryGame) {
    let (a, b) = find_mismatch(game);
    game.flip_card(a);
    let delayed = game.flip_card(b).expect("mismatch schedules a flip-back");
    game.fire(delayed);
}

proptest! {
    /// Every legal deal has the right shape: `card_count` cards, unique
    /// ids covering 0..card_count, every symbol drawn from the pool and
    /// present exactly twice.
    #[test]
    fn deal_is_well_formed(
        player_count in 1usize..=4,
        pairs in 2usize..=12,
        seed in any::<u64>(),
    ) {
        let card_count = pairs * 2;
        let game = MemoryGameBuilder::new()
            .player_count(player_count)
            .card_count(card_count)
            .pool(&EXTENDED_POOL)
            .build(seed);

        let cards = game.cards();
        prop_assert_eq!(cards.len(), card_count);

        let mut symbol_counts: HashMap<&str, usize> = HashMap::new();
        for (i, card) in cards.iter().enumerate() {
            prop_assert_eq!(card.id.index(), i);
            prop_assert!(!card.flipped);
            prop_assert!(!card.matched);
            prop_assert!(EXTENDED_POOL.contains(&card.symbol));
            *symbol_counts.entry(card.symbol).or_default() += 1;
        }

        prop_assert_eq!(symbol_counts.len(), pairs);
        prop_assert!(symbol_counts.values().all(|&count| count == 2));
    }

    /// The classic variant always deals its full fixed 8-pair deck.
    #[test]
    fn classic_deal_uses_eight_pairs(seed in any::<u64>()) {
        let game = MemoryGameBuilder::new().pool(&CLASSIC_POOL).build(seed);

        let mut symbol_counts: HashMap<&str, usize> = HashMap::new();
        for card in game.cards() {
            prop_assert!(CLASSIC_POOL.contains(&card.symbol));
            *symbol_counts.entry(card.symbol).or_default() += 1;
        }

        prop_assert_eq!(symbol_counts.len(), 8);
        prop_assert!(symbol_counts.values().all(|&count| count == 2));
    }

    /// Same seed, same deal; a re-deal shuffles with fresh randomness.
    #[test]
    fn deal_is_deterministic(seed in any::<u64>()) {
        let game1 = MemoryGameBuilder::new().build(seed);
        let game2 = MemoryGameBuilder::new().build(seed);

        let faces1: Vec<&str> = game1.cards().iter().map(|c| c.symbol).collect();
        let faces2: Vec<&str> = game2.cards().iter().map(|c| c.symbol).collect();
        prop_assert_eq!(faces1, faces2);
    }
}

#[test]
fn turn_rotates_through_all_players() {
    let mut game = MemoryGameBuilder::new().player_count(4).build(11);

    assert_eq!(game.current_player(), PlayerId::new(0));
    miss_one(&mut game);
    assert_eq!(game.current_player(), PlayerId::new(1));
    miss_one(&mut game);
    assert_eq!(game.current_player(), PlayerId::new(2));
    miss_one(&mut game);
    assert_eq!(game.current_player(), PlayerId::new(3));
    miss_one(&mut game);
    assert_eq!(game.current_player(), PlayerId::new(0));
}

#[test]
fn matching_player_keeps_the_turn_until_a_miss() {
    let mut game = MemoryGameBuilder::new().player_count(3).build(21);

    match_one(&mut game);
    match_one(&mut game);
    assert_eq!(game.current_player(), PlayerId::new(0));
    assert_eq!(game.players()[PlayerId::new(0)].score, 2);

    miss_one(&mut game);
    assert_eq!(game.current_player(), PlayerId::new(1));
}

#[test]
fn tied_round_reports_all_winners() {
    let mut game = MemoryGameBuilder::new().player_count(2).build(33);

    // Player 1 takes four pairs, player 2 the other four.
    for _ in 0..4 {
        assert!(match_one(&mut game).is_none());
    }
    miss_one(&mut game);
    assert_eq!(game.current_player(), PlayerId::new(1));

    let mut finish = None;
    for _ in 0..4 {
        finish = match_one(&mut game);
    }

    let finish = finish.expect("last match announces the finish");
    game.fire(finish);

    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.players()[PlayerId::new(0)].score, 4);
    assert_eq!(game.players()[PlayerId::new(1)].score, 4);
    assert_eq!(game.winners(), vec![PlayerId::new(0), PlayerId::new(1)]);
}

#[test]
fn lopsided_round_has_a_single_winner() {
    let mut game = MemoryGameBuilder::new().player_count(2).build(8);

    miss_one(&mut game); // player 1 misses
    let mut finish = None;
    for _ in 0..8 {
        finish = match_one(&mut game); // player 2 runs the table
    }
    game.fire(finish.unwrap());

    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.winners(), vec![PlayerId::new(1)]);
}

#[test]
fn completion_requires_every_card_matched() {
    let mut game = MemoryGameBuilder::new().player_count(1).build(2);

    for remaining in (1..=8).rev() {
        let delayed = match_one(&mut game);
        if remaining == 1 {
            assert_eq!(
                delayed.map(|d| d.payload),
                Some(MemoryDelay::AnnounceFinish)
            );
        } else {
            assert!(delayed.is_none());
            assert_eq!(game.phase(), Phase::Playing);
        }
    }
}

#[test]
fn snapshot_types_serialize() {
    let game = MemoryGameBuilder::new().player_count(2).build(1);

    // The presentation layer renders from serialized snapshots of these.
    let cards: Vec<Card> = game.cards().to_vec();
    let json = serde_json::to_string(&cards).unwrap();
    assert!(json.contains("\"flipped\":false"));

    let roster = serde_json::to_string(game.players()).unwrap();
    assert!(roster.contains("Player 1"));
}
