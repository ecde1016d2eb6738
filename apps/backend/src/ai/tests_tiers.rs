use crate::ai::{
    create_ai, AiConfig, AiDecision, AiError, AiPlayer, EasyPlayer, HardPlayer, MediumPlayer,
};
use crate::domain::fixtures::TableauBuilder;
use crate::domain::{
    Card, Difficulty, GameMode, GameSession, PlayerNo, PlayerView, SessionStatus, Zone,
};

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

/// View for player 2 with the given hand and table; `stock` cards stay in the stock.
fn view(hand: &[&str], table: &[&str], stock: bool) -> PlayerView {
    let mut builder = TableauBuilder::new()
        .hand(PlayerNo::Two, hand)
        .table(table);
    if !stock {
        builder = builder.rest_to(Zone::Captured(PlayerNo::One));
    }
    let tableau = builder.build().unwrap();
    let mut session = GameSession::new_waiting(1, GameMode::HumanComputer, 5);
    session.status = SessionStatus::Active;
    session.current_turn = Some(PlayerNo::Two);
    PlayerView::build(&session, &tableau, None, 0, PlayerNo::Two)
}

#[test]
fn medium_prefers_the_ace_xeri() {
    let v = view(&["AS", "3C"], &["AD"], true);
    let decision = MediumPlayer::new().choose_move(&v).unwrap();
    assert_eq!(
        decision,
        AiDecision::Play {
            card: c("AS"),
            claims: vec![c("AD")]
        }
    );
}

#[test]
fn medium_draws_instead_of_a_weak_discard() {
    // Best is a 3-point discard; stock is available.
    let v = view(&["3C", "4H"], &["KD"], true);
    assert_eq!(MediumPlayer::new().choose_move(&v).unwrap(), AiDecision::Draw);

    // Same hand with an empty stock: it has to play.
    let v = view(&["3C", "4H"], &["KD"], false);
    assert!(matches!(
        MediumPlayer::new().choose_move(&v).unwrap(),
        AiDecision::Play { card, .. } if card == c("3C")
    ));
}

#[test]
fn hard_holds_a_short_hand_but_not_a_long_one() {
    // 3-card hand: discard rates 3 - 10 + 5 = -2 < 30, so draw.
    let short = view(&["3C", "4H", "5S"], &["KD"], true);
    assert_eq!(HardPlayer::new().choose_move(&short).unwrap(), AiDecision::Draw);

    // Jack on a crowded table rates well over the threshold even with a short hand.
    let jack = view(&["JC", "4H"], &["5H", "9C", "KD"], true);
    assert!(matches!(
        HardPlayer::new().choose_move(&jack).unwrap(),
        AiDecision::Play { card, ref claims } if card == c("JC") && claims.len() == 3
    ));
}

#[test]
fn empty_hand_draws_or_reports_no_legal_move() {
    let with_stock = view(&[], &["KD"], true);
    let without = view(&[], &["KD"], false);
    for d in Difficulty::ALL {
        let ai = create_ai(d, &AiConfig::with_seed(1));
        assert_eq!(ai.choose_move(&with_stock).unwrap(), AiDecision::Draw, "{d}");
        assert_eq!(ai.choose_move(&without), Err(AiError::NoLegalMove), "{d}");
    }
}

#[test]
fn easy_is_reproducible_with_a_seed() {
    let v = view(&["3C", "4H", "9D", "KS"], &["9H"], true);
    let decide = |seed| {
        let ai = EasyPlayer::new(&AiConfig::with_seed(seed));
        (0..20).map(|_| ai.choose_move(&v).unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(decide(11), decide(11));
}

#[test]
fn easy_always_plays_at_probability_one() {
    let v = view(&["3C", "4H"], &[], true);
    let json = serde_json::json!({"seed": 3, "play_probability": 1.0});
    let ai = EasyPlayer::new(&AiConfig::from_json(Some(&json)));
    for _ in 0..10 {
        assert!(matches!(ai.choose_move(&v).unwrap(), AiDecision::Play { .. }));
    }

    let json = serde_json::json!({"seed": 3, "play_probability": 0.0});
    let ai = EasyPlayer::new(&AiConfig::from_json(Some(&json)));
    assert_eq!(ai.choose_move(&v).unwrap(), AiDecision::Draw);
}

#[test]
fn easy_passes_when_it_would_draw_from_an_empty_stock() {
    let v = view(&["3C", "4H"], &["KD"], false);
    let json = serde_json::json!({"seed": 3, "play_probability": 0.0});
    let ai = EasyPlayer::new(&AiConfig::from_json(Some(&json)));
    for _ in 0..5 {
        assert_eq!(ai.choose_move(&v).unwrap(), AiDecision::Pass);
    }
}
