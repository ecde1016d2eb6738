//! Move rating shared by the Medium and Hard tiers.

use crate::domain::{Candidate, MoveType, Rank};

/// Base rating per move type.
pub const DISCARD_BASE: i32 = 5;
pub const CAPTURE_BASE: i32 = 20;
pub const JACK_CAPTURE_BASE: i32 = 50;
pub const XERI_BONUS: i32 = 100;

/// Below this, Medium prefers drawing when it can.
pub const MEDIUM_DRAW_THRESHOLD: i32 = 10;
/// With a short hand, Hard prefers drawing below this.
pub const HARD_DRAW_THRESHOLD: i32 = 30;
pub const HARD_SHORT_HAND: usize = 3;
pub const HARD_LONG_HAND: usize = 8;

/// How much a card is worth keeping (played) or taking (claimed).
pub fn card_value(rank: Rank) -> i32 {
    match rank {
        Rank::Ace => 10,
        Rank::King => 8,
        Rank::Queen => 7,
        Rank::Jack => 6,
        Rank::Ten => 5,
        Rank::Nine => 4,
        Rank::Eight => 3,
        Rank::Seven => 2,
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
    }
}

fn base(move_type: MoveType) -> i32 {
    match move_type {
        MoveType::Discard => DISCARD_BASE,
        MoveType::Capture => CAPTURE_BASE,
        MoveType::JackCapture => JACK_CAPTURE_BASE,
    }
}

/// `base + 100·xeri − 2·value(played) + 3·Σ value(claimable)`
pub fn medium_score(c: &Candidate) -> i32 {
    let xeri = if c.is_xeri_possible { XERI_BONUS } else { 0 };
    let claimed: i32 = c.claimable.iter().map(|card| card_value(card.rank)).sum();
    base(c.move_type) + xeri - 2 * card_value(c.card.rank) + 3 * claimed
}

/// Medium plus adjustments for hand length, a Jack on a crowded table, and safe discards.
pub fn hard_score(c: &Candidate, hand_len: usize, table_len: usize) -> i32 {
    let mut score = medium_score(c);
    if hand_len >= HARD_LONG_HAND {
        score += 15;
    } else if hand_len <= HARD_SHORT_HAND {
        score -= 10;
    }
    if c.card.is_jack() && table_len >= 3 {
        score += 30;
    }
    if c.move_type == MoveType::Discard {
        score += 5;
    }
    score
}

/// Highest-rated candidate; ties keep the earliest in hand order.
pub fn best_by<'a, F>(candidates: &'a [Candidate], rate: F) -> Option<(&'a Candidate, i32)>
where
    F: Fn(&Candidate) -> i32,
{
    let mut best: Option<(&Candidate, i32)> = None;
    for c in candidates {
        let score = rate(c);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((c, score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Card;

    fn cand(card: &str, table: &[&str]) -> Candidate {
        let table: Vec<Card> = table.iter().map(|s| s.parse().unwrap()).collect();
        Candidate::new(card.parse().unwrap(), &table)
    }

    #[test]
    fn card_values() {
        assert_eq!(card_value(Rank::Ace), 10);
        assert_eq!(card_value(Rank::Jack), 6);
        assert_eq!(card_value(Rank::Seven), 2);
        assert_eq!(card_value(Rank::Four), 1);
    }

    #[test]
    fn ace_xeri_scores_130_and_small_discard_scores_3() {
        assert_eq!(medium_score(&cand("AS", &["AD"])), 130);
        assert_eq!(medium_score(&cand("3C", &["AD"])), 3);
    }

    #[test]
    fn jack_capture_rating() {
        // 50 - 12 + 3 * (1 + 4 + 8)
        assert_eq!(medium_score(&cand("JC", &["5H", "9C", "KD"])), 77);
        // Hard adds the crowded-table bonus; 6-card hand has no length adjustment.
        assert_eq!(hard_score(&cand("JC", &["5H", "9C", "KD"]), 6, 3), 107);
    }

    #[test]
    fn hard_adjusts_for_hand_length_and_discards() {
        let discard = cand("4C", &["KD"]);
        assert_eq!(medium_score(&discard), 3);
        assert_eq!(hard_score(&discard, 9, 1), 3 + 15 + 5);
        assert_eq!(hard_score(&discard, 2, 1), 3 - 10 + 5);
    }

    #[test]
    fn ties_keep_first_candidate() {
        let cs = vec![cand("2C", &[]), cand("3D", &[])];
        let (best, score) = best_by(&cs, medium_score).unwrap();
        assert_eq!(best.card, "2C".parse::<Card>().unwrap());
        assert_eq!(score, 3);
        assert!(best_by(&[], medium_score).is_none());
    }
}
