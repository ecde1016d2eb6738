use time::OffsetDateTime;

use crate::domain::capture::MoveType;
use crate::domain::moves::NewMove;
use crate::domain::scoring::{determine_outcome, replay_stats, score, GameOutcome, PlayerStats};
use crate::domain::{Card, PlayerNo};

fn stats(captured: u32, xeri: u32) -> PlayerStats {
    let mut s = PlayerStats::default();
    s.record_capture(captured, false);
    for _ in 0..xeri {
        s.record_capture(0, true);
    }
    s
}

#[test]
fn score_adds_ten_per_xeri() {
    assert_eq!(score(0, 0), 0);
    assert_eq!(score(12, 0), 12);
    assert_eq!(score(12, 2), 32);
    assert_eq!(stats(12, 2).total_points, 32);
}

#[test]
fn higher_score_wins() {
    assert_eq!(
        determine_outcome(&[stats(20, 0), stats(15, 0)]),
        GameOutcome::Winner(PlayerNo::One)
    );
    assert_eq!(
        determine_outcome(&[stats(5, 1), stats(16, 0)]),
        GameOutcome::Winner(PlayerNo::Two)
    );
}

#[test]
fn tie_breaks_on_xeri_then_draw() {
    // 20 + 0 vs 10 + 10: equal points, player 2 has the Xeri.
    assert_eq!(
        determine_outcome(&[stats(20, 0), stats(10, 1)]),
        GameOutcome::Winner(PlayerNo::Two)
    );
    assert_eq!(
        determine_outcome(&[stats(14, 1), stats(14, 1)]),
        GameOutcome::Draw
    );
    assert_eq!(GameOutcome::Draw.winner(), None);
}

#[test]
fn replay_matches_incremental_counting() {
    let c = |s: &str| s.parse::<Card>().unwrap();
    let now = OffsetDateTime::now_utc();
    let log = vec![
        NewMove::play(PlayerNo::One, c("7S"), vec![c("7D")], MoveType::Capture, true)
            .sequenced(1, now),
        NewMove::draw(PlayerNo::Two, c("2H")).sequenced(2, now),
        NewMove::play(PlayerNo::One, c("4C"), vec![], MoveType::Discard, false).sequenced(3, now),
        NewMove::play(
            PlayerNo::Two,
            c("JC"),
            vec![c("4C"), c("9H")],
            MoveType::JackCapture,
            false,
        )
        .sequenced(4, now),
        NewMove::pass(PlayerNo::One).sequenced(5, now),
    ];
    let [one, two] = replay_stats(&log);
    assert_eq!(one.captured_count, 2);
    assert_eq!(one.xeri_count, 1);
    assert_eq!(one.total_points, 12);
    assert_eq!(two.captured_count, 3);
    assert_eq!(two.total_points, 3);
}
