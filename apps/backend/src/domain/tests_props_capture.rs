/// Property-based tests for capture resolution
use proptest::prelude::*;

use crate::domain::capture::{is_xeri, resolve, settle_claims, ClaimPolicy, MoveType};
use crate::domain::{test_gens, test_prelude, Card, Rank};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// A Jack may claim exactly the whole table, whatever is on it.
    #[test]
    fn prop_jack_claims_whole_table(
        suit in test_gens::suit(),
        table in test_gens::unique_cards(12),
    ) {
        let jack = Card { suit, rank: Rank::Jack };
        let table: Vec<Card> = table.into_iter().filter(|c| *c != jack).collect();
        let r = resolve(jack, &table);
        prop_assert_eq!(r.move_type, MoveType::JackCapture);
        prop_assert_eq!(r.claimable, table);
    }

    /// Non-jack claimable cards are exactly the same-rank table cards.
    #[test]
    fn prop_rank_match_is_exact((played, table) in test_gens::play_and_table(10)) {
        prop_assume!(played.rank != Rank::Jack);
        let r = resolve(played, &table);
        let expected: Vec<Card> = table.iter().copied().filter(|c| c.rank == played.rank).collect();
        if expected.is_empty() {
            prop_assert_eq!(r.move_type, MoveType::Discard);
        } else {
            prop_assert_eq!(r.move_type, MoveType::Capture);
        }
        prop_assert_eq!(r.claimable, expected);
    }

    /// Resolution depends only on its inputs.
    #[test]
    fn prop_resolver_is_pure((played, table) in test_gens::play_and_table(10)) {
        let snapshot = table.clone();
        let first = resolve(played, &table);
        let second = resolve(played, &table);
        prop_assert_eq!(first, second);
        prop_assert_eq!(table, snapshot);
    }

    /// Xeri iff a rank-match takes the only card on a one-card table.
    #[test]
    fn prop_xeri_exactness((played, table) in test_gens::play_and_table(4)) {
        let r = resolve(played, &table);
        let s = settle_claims(played, &r, &r.claimable, ClaimPolicy::Lenient).unwrap();
        let xeri = is_xeri(played, &table, &s.claimed);
        let expected = played.rank != Rank::Jack
            && table.len() == 1
            && table[0].rank == played.rank;
        prop_assert_eq!(xeri, expected);
    }

    /// Settled claims are always a subset of the claimable set.
    #[test]
    fn prop_settled_claims_are_entitled(
        (played, table) in test_gens::play_and_table(10),
        requested in test_gens::unique_cards(6),
    ) {
        let r = resolve(played, &table);
        let s = settle_claims(played, &r, &requested, ClaimPolicy::Lenient).unwrap();
        for c in &s.claimed {
            prop_assert!(r.claimable.contains(c));
        }
        for c in &s.dropped {
            prop_assert!(!r.claimable.contains(c));
        }
        prop_assert_eq!(s.claimed.len() + s.dropped.len(), requested.len());
    }
}
