//! Card catalog primitives.

use super::cards_types::{Card, Rank, Suit, DECK_SIZE};

/// The full 52-card deck in catalog order (suit-major, ace first).
pub fn deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card { suit, rank });
        }
    }
    cards
}

pub fn rank(card: Card) -> Rank {
    card.rank
}

/// Rank alone decides matching; suit is irrelevant.
pub fn same_rank(a: Card, b: Card) -> bool {
    a.rank == b.rank
}
