//! Deterministic shuffling and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::cards_logic::deck;
use super::cards_types::{Card, DECK_SIZE};
use super::seed_derivation::derive_dealing_seed;
use super::tableau::Tableau;
use super::zones::{PlayerNo, Zone};
use crate::errors::domain::{DomainError, ValidationKind};

/// Catalog deck shuffled by a ChaCha20 stream seeded from the game seed.
pub fn shuffled_deck(game_seed: u64) -> Vec<Card> {
    let mut cards = deck();
    let mut rng = ChaCha20Rng::seed_from_u64(derive_dealing_seed(game_seed));
    cards.shuffle(&mut rng);
    cards
}

pub fn validate_hand_size(hand_size: u8) -> Result<(), DomainError> {
    if hand_size == 0 || usize::from(hand_size) * 2 > DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandSize,
            format!("hand size must be 1..=26, got {hand_size}"),
        ));
    }
    Ok(())
}

/// The cards each player receives from the top of `stock`: player 1 first.
pub fn deal_plan(stock: &[Card], hand_size: u8) -> Result<[Vec<Card>; 2], DomainError> {
    validate_hand_size(hand_size)?;
    let n = usize::from(hand_size);
    if stock.len() < n * 2 {
        return Err(DomainError::validation(
            ValidationKind::StockEmpty,
            format!("stock holds {} cards, {} needed to deal", stock.len(), n * 2),
        ));
    }
    Ok([stock[..n].to_vec(), stock[n..n * 2].to_vec()])
}

/// Shuffle and deal a complete opening tableau.
pub fn deal(game_seed: u64, hand_size: u8) -> Result<Tableau, DomainError> {
    let mut tableau = Tableau::undealt(shuffled_deck(game_seed));
    let plan = deal_plan(tableau.zone(Zone::Stock), hand_size)?;
    for (player, cards) in PlayerNo::BOTH.into_iter().zip(plan) {
        tableau.move_cards(&cards, Zone::Stock, Zone::Hand(player))?;
    }
    Ok(tableau)
}
