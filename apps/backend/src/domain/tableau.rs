//! In-memory card placement across the six zones.
//!
//! `Tableau` is the value a store snapshots per game. All mutation goes
//! through [`Tableau::move_cards`], which is all-or-nothing.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, DECK_SIZE};
use super::zones::{PlayerNo, Zone};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    stock: Vec<Card>,
    hands: [Vec<Card>; 2],
    table: Vec<Card>,
    captured: [Vec<Card>; 2],
}

impl Tableau {
    /// Every card in the stock, in the given order.
    pub fn undealt(stock: Vec<Card>) -> Self {
        Self {
            stock,
            ..Self::default()
        }
    }

    /// Build a tableau from explicit zone contents. Used by fixtures and tests.
    pub fn from_zones(
        stock: Vec<Card>,
        hands: [Vec<Card>; 2],
        table: Vec<Card>,
        captured: [Vec<Card>; 2],
    ) -> Self {
        Self {
            stock,
            hands,
            table,
            captured,
        }
    }

    pub fn zone(&self, zone: Zone) -> &[Card] {
        match zone {
            Zone::Stock => &self.stock,
            Zone::Hand(p) => &self.hands[p.index()],
            Zone::Table => &self.table,
            Zone::Captured(p) => &self.captured[p.index()],
        }
    }

    fn zone_mut(&mut self, zone: Zone) -> &mut Vec<Card> {
        match zone {
            Zone::Stock => &mut self.stock,
            Zone::Hand(p) => &mut self.hands[p.index()],
            Zone::Table => &mut self.table,
            Zone::Captured(p) => &mut self.captured[p.index()],
        }
    }

    pub fn hand(&self, player: PlayerNo) -> &[Card] {
        self.zone(Zone::Hand(player))
    }

    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Move `cards` from one zone to another, appending in the given order.
    ///
    /// Either every card moves or none does.
    pub fn move_cards(&mut self, cards: &[Card], from: Zone, to: Zone) -> Result<(), DomainError> {
        let source = self.zone(from);
        for (i, card) in cards.iter().enumerate() {
            if !source.contains(card) {
                return Err(DomainError::not_found(
                    NotFoundKind::Card,
                    format!("{card} is not in {from}"),
                ));
            }
            if cards[..i].contains(card) {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("{card} listed twice in one move"),
                ));
            }
        }
        if from == to {
            return Ok(());
        }
        self.zone_mut(from).retain(|c| !cards.contains(c));
        self.zone_mut(to).extend_from_slice(cards);
        Ok(())
    }

    /// Total number of cards across all zones.
    pub fn card_count(&self) -> usize {
        Zone::ALL.iter().map(|z| self.zone(*z).len()).sum()
    }

    /// Check that the six zones partition the 52-card deck.
    pub fn verify_closure(&self) -> Result<(), DomainError> {
        let mut seen: u64 = 0;
        for zone in Zone::ALL {
            for card in self.zone(zone) {
                let bit = 1u64 << card.id();
                if seen & bit != 0 {
                    return Err(DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!("{card} appears in more than one place (found again in {zone})"),
                    ));
                }
                seen |= bit;
            }
        }
        let count = seen.count_ones() as usize;
        if count != DECK_SIZE {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("zones hold {count} distinct cards, expected {DECK_SIZE}"),
            ));
        }
        Ok(())
    }

    /// Stock and both hands are empty.
    pub fn is_exhausted(&self) -> bool {
        self.stock.is_empty() && self.hands.iter().all(Vec::is_empty)
    }
}
