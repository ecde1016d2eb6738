//! Integration tests for the turn engine on hand-arranged tableaux.

mod common;
mod support;

use support::card_helpers::{card, cards};
use support::game_setup::{insert_active_game, insert_human_game, service, SeatKind};
use xeri_backend::ai::AiDecision;
use xeri_backend::domain::fixtures::TableauBuilder;
use xeri_backend::domain::game_transition::GameTransition;
use xeri_backend::domain::{
    Difficulty, GameOutcome, MoveAction, MoveType, PlayerNo, SessionStatus, Zone,
};
use xeri_backend::errors::ErrorCode;
use xeri_backend::services::game_flow::AiTurnAction;
use xeri_backend::AppError;

#[test]
fn lone_matching_card_is_a_xeri() -> Result<(), AppError> {
    let service = service();
    let setup = insert_human_game(
        &service,
        TableauBuilder::new()
            .hand(PlayerNo::One, &["7S", "3C"])
            .hand(PlayerNo::Two, &["QH"])
            .table(&["7D"]),
    )?;

    let result = service.play_card(setup.game_id, PlayerNo::One, card("7S"), &cards(&["7D"]), None)?;

    assert_eq!(result.outcome.move_type, MoveType::Capture);
    assert!(result.outcome.is_xeri);
    assert_eq!(result.outcome.claimed, cards(&["7D"]));
    assert_eq!(result.outcome.next_player, Some(PlayerNo::Two));
    assert!(!result.outcome.game_ended);
    assert_eq!(result.old_version, 0);
    assert_eq!(result.final_version(), 1);
    assert!(result
        .transitions
        .contains(&GameTransition::TurnBecame { player: PlayerNo::Two }));

    let stats = result.session.stats[PlayerNo::One.index()];
    assert_eq!(stats.captured_count, 2);
    assert_eq!(stats.xeri_count, 1);
    assert_eq!(stats.total_points, 12);

    let tableau = service.tableau_snapshot(setup.game_id)?;
    assert!(tableau.table().is_empty());
    assert_eq!(
        tableau.zone(Zone::Captured(PlayerNo::One)),
        cards(&["7D", "7S"]).as_slice()
    );
    assert_eq!(tableau.hand(PlayerNo::One), cards(&["3C"]).as_slice());
    Ok(())
}

#[test]
fn jack_sweeps_the_table() -> Result<(), AppError> {
    let service = service();
    let setup = insert_human_game(
        &service,
        TableauBuilder::new()
            .hand(PlayerNo::One, &["JC", "2H"])
            .hand(PlayerNo::Two, &["QH"])
            .table(&["5H", "9C", "KD"]),
    )?;

    let claims = cards(&["5H", "9C", "KD"]);
    let result = service.play_card(setup.game_id, PlayerNo::One, card("JC"), &claims, None)?;

    assert_eq!(result.outcome.move_type, MoveType::JackCapture);
    assert_eq!(result.outcome.claimed_count, 3);
    assert!(!result.outcome.is_xeri);
    assert_eq!(result.session.stats[0].captured_count, 4);
    assert_eq!(result.session.stats[0].total_points, 4);
    assert!(service.tableau_snapshot(setup.game_id)?.table().is_empty());
    Ok(())
}

#[test]
fn jack_on_an_empty_table_captures_itself() -> Result<(), AppError> {
    let service = service();
    let setup = insert_human_game(
        &service,
        TableauBuilder::new()
            .hand(PlayerNo::One, &["JD", "2H"])
            .hand(PlayerNo::Two, &["QH"]),
    )?;

    let result = service.play_card(setup.game_id, PlayerNo::One, card("JD"), &[], None)?;

    assert_eq!(result.outcome.move_type, MoveType::JackCapture);
    assert_eq!(result.outcome.claimed_count, 0);
    assert_eq!(result.session.stats[0].captured_count, 1);
    let tableau = service.tableau_snapshot(setup.game_id)?;
    assert!(tableau.table().is_empty());
    assert_eq!(tableau.zone(Zone::Captured(PlayerNo::One)), cards(&["JD"]).as_slice());
    Ok(())
}

#[test]
fn two_card_table_reduced_by_one_is_not_a_xeri() -> Result<(), AppError> {
    let service = service();
    let setup = insert_human_game(
        &service,
        TableauBuilder::new()
            .hand(PlayerNo::One, &["7S"])
            .hand(PlayerNo::Two, &["QH"])
            .table(&["7D", "2C"]),
    )?;

    let result = service.play_card(setup.game_id, PlayerNo::One, card("7S"), &cards(&["7D"]), None)?;

    assert_eq!(result.outcome.move_type, MoveType::Capture);
    assert!(!result.outcome.is_xeri);
    assert_eq!(service.tableau_snapshot(setup.game_id)?.table(), cards(&["2C"]).as_slice());
    Ok(())
}

#[test]
fn empty_claim_turns_a_match_into_a_discard() -> Result<(), AppError> {
    let service = service();
    let setup = insert_human_game(
        &service,
        TableauBuilder::new()
            .hand(PlayerNo::One, &["7S", "3C"])
            .hand(PlayerNo::Two, &["QH"])
            .table(&["7D"]),
    )?;

    let result = service.play_card(setup.game_id, PlayerNo::One, card("7S"), &[], None)?;

    assert_eq!(result.outcome.move_type, MoveType::Discard);
    assert_eq!(
        service.tableau_snapshot(setup.game_id)?.table(),
        cards(&["7D", "7S"]).as_slice()
    );
    assert_eq!(result.session.stats[0].captured_count, 0);
    Ok(())
}

#[test]
fn game_continues_while_the_opponent_holds_cards() -> Result<(), AppError> {
    let service = service();
    let setup = insert_human_game(
        &service,
        TableauBuilder::new()
            .hand(PlayerNo::One, &["4S"])
            .hand(PlayerNo::Two, &["9H"])
            .table(&["KD"])
            .rest_to(Zone::Captured(PlayerNo::One)),
    )?;

    let first = service.play_card(setup.game_id, PlayerNo::One, card("4S"), &[], None)?;
    assert!(!first.outcome.game_ended);
    assert_eq!(first.session.status, SessionStatus::Active);
    assert_eq!(first.outcome.next_player, Some(PlayerNo::Two));

    let last = service.play_card(setup.game_id, PlayerNo::Two, card("9H"), &[], None)?;
    assert!(last.outcome.game_ended);
    assert_eq!(last.outcome.next_player, None);
    assert_eq!(last.session.status, SessionStatus::Finished);
    assert_eq!(last.session.outcome, Some(GameOutcome::Draw));
    assert!(last.transitions.contains(&GameTransition::GameEnded));

    // The remainder stays on the table.
    let tableau = service.tableau_snapshot(setup.game_id)?;
    assert_eq!(tableau.table(), cards(&["KD", "4S", "9H"]).as_slice());

    let err = service
        .pass_turn(setup.game_id, PlayerNo::One, None)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameAlreadyFinished);
    Ok(())
}

#[test]
fn higher_score_wins_at_the_end() -> Result<(), AppError> {
    let service = service();
    let setup = insert_human_game(
        &service,
        TableauBuilder::new()
            .hand(PlayerNo::One, &["7S"])
            .hand(PlayerNo::Two, &["QH"])
            .table(&["7D"])
            .rest_to(Zone::Captured(PlayerNo::Two)),
    )?;

    service.play_card(setup.game_id, PlayerNo::One, card("7S"), &cards(&["7D"]), None)?;
    let last = service.play_card(setup.game_id, PlayerNo::Two, card("QH"), &[], None)?;

    assert_eq!(last.session.outcome, Some(GameOutcome::Winner(PlayerNo::One)));
    assert_eq!(last.session.winner(), Some(PlayerNo::One));
    Ok(())
}

#[test]
fn draw_takes_the_top_of_the_stock() -> Result<(), AppError> {
    let service = service();
    let setup = insert_human_game(
        &service,
        TableauBuilder::new()
            .hand(PlayerNo::One, &["2C"])
            .hand(PlayerNo::Two, &["QH"])
            .stock(&["8D", "5S"]),
    )?;
    let stock_before = service.tableau_snapshot(setup.game_id)?.stock_len();

    let result = service.draw_card(setup.game_id, PlayerNo::One, None)?;

    assert_eq!(result.outcome.card, card("8D"));
    assert_eq!(result.outcome.next_player, Some(PlayerNo::Two));
    let tableau = service.tableau_snapshot(setup.game_id)?;
    assert_eq!(tableau.stock_len(), stock_before - 1);
    assert_eq!(tableau.hand(PlayerNo::One), cards(&["2C", "8D"]).as_slice());

    // The opponent sees the draw but not the card.
    let theirs = service.move_history(setup.game_id, Some(PlayerNo::Two))?;
    assert_eq!(theirs[0].action, MoveAction::Draw);
    assert_eq!(theirs[0].card, None);
    let mine = service.move_history(setup.game_id, Some(PlayerNo::One))?;
    assert_eq!(mine[0].card, Some(card("8D")));
    Ok(())
}

#[test]
fn medium_ai_takes_the_ace_xeri() -> Result<(), AppError> {
    let service = service();
    let setup = insert_active_game(
        &service,
        TableauBuilder::new()
            .hand(PlayerNo::One, &["QH"])
            .hand(PlayerNo::Two, &["AS", "3C"])
            .table(&["AD"]),
        [SeatKind::Human, SeatKind::Ai(Difficulty::Medium)],
        PlayerNo::Two,
    )?;

    let decision = service.choose_ai_move(setup.game_id, PlayerNo::Two)?;
    assert_eq!(
        decision,
        AiDecision::Play {
            card: card("AS"),
            claims: cards(&["AD"])
        }
    );

    let report = service
        .run_ai_turn(setup.game_id)?
        .expect("AI seat is to move");
    assert_eq!(report.player, PlayerNo::Two);
    assert_eq!(report.attempts, 1);
    match report.action {
        AiTurnAction::Played(outcome) => {
            assert!(outcome.is_xeri);
            assert_eq!(outcome.next_player, Some(PlayerNo::One));
        }
        other => panic!("expected a play, got {other:?}"),
    }

    // Human to move now: nothing more for the coordinator.
    assert!(service.run_ai_turn(setup.game_id)?.is_none());
    Ok(())
}
