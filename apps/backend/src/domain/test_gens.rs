// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::cards_logic::deck;
use crate::domain::{Card, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// A vector of `count` distinct cards.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(deck())
        .prop_shuffle()
        .prop_map(move |mut cards| {
            cards.truncate(count);
            cards
        })
}

/// Played card plus a table of up to `max_table` other cards.
pub fn play_and_table(max_table: usize) -> impl Strategy<Value = (Card, Vec<Card>)> {
    (0..=max_table).prop_flat_map(|n| {
        unique_cards(n + 1).prop_map(|mut cards| {
            let played = cards.remove(0);
            (played, cards)
        })
    })
}
