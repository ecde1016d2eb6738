//! Builders for hand-arranged tableaux used by scenarios, demos and tests.

use super::cards_logic::deck;
use super::cards_parsing::try_parse_cards;
use super::cards_types::Card;
use super::tableau::Tableau;
use super::zones::{PlayerNo, Zone};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Place named cards in specific zones; everything not named goes to `rest`.
///
/// ```rust,ignore
/// let tableau = TableauBuilder::new()
///     .hand(PlayerNo::One, &["7S", "3C"])
///     .table(&["7D"])
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct TableauBuilder {
    placed: Vec<(Zone, Vec<String>)>,
    rest: Zone,
}

impl Default for TableauBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableauBuilder {
    pub fn new() -> Self {
        Self {
            placed: Vec::new(),
            rest: Zone::Stock,
        }
    }

    fn place(mut self, zone: Zone, tokens: &[&str]) -> Self {
        self.placed
            .push((zone, tokens.iter().map(|s| s.to_string()).collect()));
        self
    }

    pub fn hand(self, player: PlayerNo, tokens: &[&str]) -> Self {
        self.place(Zone::Hand(player), tokens)
    }

    pub fn table(self, tokens: &[&str]) -> Self {
        self.place(Zone::Table, tokens)
    }

    /// Cards at the top of the stock, top first.
    pub fn stock(self, tokens: &[&str]) -> Self {
        self.place(Zone::Stock, tokens)
    }

    pub fn captured(self, player: PlayerNo, tokens: &[&str]) -> Self {
        self.place(Zone::Captured(player), tokens)
    }

    /// Zone that receives every card not placed explicitly (default: stock).
    pub fn rest_to(mut self, zone: Zone) -> Self {
        self.rest = zone;
        self
    }

    pub fn build(self) -> Result<Tableau, DomainError> {
        let mut zones: [Vec<Card>; 6] = Default::default();
        let mut named: Vec<Card> = Vec::new();
        for (zone, tokens) in &self.placed {
            let cards = try_parse_cards(tokens)?;
            for card in &cards {
                if named.contains(card) {
                    return Err(DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!("{card} placed twice"),
                    ));
                }
                named.push(*card);
            }
            zones[slot(*zone)].extend(cards);
        }
        let rest: Vec<Card> = deck().into_iter().filter(|c| !named.contains(c)).collect();
        zones[slot(self.rest)].extend(rest);

        let [stock, hand1, hand2, table, cap1, cap2] = zones;
        let tableau = Tableau::from_zones(stock, [hand1, hand2], table, [cap1, cap2]);
        tableau.verify_closure()?;
        Ok(tableau)
    }
}

fn slot(zone: Zone) -> usize {
    Zone::ALL.iter().position(|z| *z == zone).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_cards_fill_the_rest_zone() {
        let t = TableauBuilder::new()
            .hand(PlayerNo::One, &["7S", "3C"])
            .table(&["7D"])
            .build()
            .unwrap();
        assert_eq!(t.hand(PlayerNo::One).len(), 2);
        assert_eq!(t.table().len(), 1);
        assert_eq!(t.stock_len(), 49);
    }

    #[test]
    fn duplicate_placement_is_rejected() {
        let err = TableauBuilder::new()
            .hand(PlayerNo::One, &["7S"])
            .table(&["7S"])
            .build();
        assert!(err.is_err());
    }

    #[test]
    fn rest_can_go_to_a_captured_pile() {
        let t = TableauBuilder::new()
            .hand(PlayerNo::Two, &["KD"])
            .rest_to(Zone::Captured(PlayerNo::One))
            .build()
            .unwrap();
        assert_eq!(t.stock_len(), 0);
        assert_eq!(t.zone(Zone::Captured(PlayerNo::One)).len(), 51);
    }
}
