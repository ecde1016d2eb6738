use serde::Serialize;
use tracing::{debug, info, warn};

use super::mutation::GameFlowMutationResult;
use crate::domain::capture::settle_claims;
use crate::domain::scoring::determine_outcome;
use crate::domain::{
    is_xeri, resolve, Card, GameId, GameSession, MoveType, NewMove, PlayerNo, SessionStatus, Zone,
};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::{GameStore, GameTxn};
use crate::services::game_flow::GameFlowService;
use crate::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayOutcome {
    pub card: Card,
    pub move_type: MoveType,
    /// Table cards taken, in table order.
    pub claimed: Vec<Card>,
    pub claimed_count: usize,
    /// Requested cards the play was not entitled to.
    pub dropped_claims: Vec<Card>,
    pub is_xeri: bool,
    pub sequence: u32,
    /// `None` once the game has ended.
    pub next_player: Option<PlayerNo>,
    pub game_ended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawOutcome {
    pub card: Card,
    pub sequence: u32,
    pub next_player: Option<PlayerNo>,
    pub game_ended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassOutcome {
    pub sequence: u32,
    pub next_player: Option<PlayerNo>,
    pub game_ended: bool,
}

impl<S: GameStore> GameFlowService<S> {
    /// Play `card` from `player`'s hand, claiming what it is entitled to from `claims`.
    pub fn play_card(
        &self,
        game_id: GameId,
        player: PlayerNo,
        card: Card,
        claims: &[Card],
        expected_version: Option<u32>,
    ) -> Result<GameFlowMutationResult<PlayOutcome>, AppError> {
        let policy = self.config.claim_policy;
        self.run_mutation(game_id, expected_version, |txn, session| {
            session.ensure_turn(player)?;
            if !txn.zone_contents(Zone::Hand(player))?.contains(&card) {
                return Err(DomainError::validation(
                    ValidationKind::CardNotInHand,
                    format!("{card} is not in player {player}'s hand"),
                )
                .into());
            }

            let table_before = txn.zone_contents(Zone::Table)?;
            let resolution = resolve(card, &table_before);
            let settlement = settle_claims(card, &resolution, claims, policy)?;
            if !settlement.dropped.is_empty() {
                warn!(
                    game_id,
                    player = player.number(),
                    card = %card,
                    dropped = settlement.dropped.len(),
                    "Ignoring claims the play is not entitled to"
                );
            }

            let xeri = is_xeri(card, &table_before, &settlement.claimed);
            if settlement.captures() {
                let pile = Zone::Captured(player);
                txn.move_cards(&settlement.claimed, Zone::Table, pile)?;
                txn.move_cards(&[card], Zone::Hand(player), pile)?;
                session.stats[player.index()]
                    .record_capture(settlement.claimed.len() as u32 + 1, xeri);
            } else {
                txn.move_cards(&[card], Zone::Hand(player), Zone::Table)?;
            }

            let sequence = txn.append_move(NewMove::play(
                player,
                card,
                settlement.claimed.clone(),
                settlement.move_type,
                xeri,
            ))?;
            let game_ended = advance_turn(txn, session, player)?;

            debug!(
                game_id,
                player = player.number(),
                card = %card,
                move_type = ?settlement.move_type,
                claimed = settlement.claimed.len(),
                is_xeri = xeri,
                sequence,
                "Card played"
            );

            Ok((
                PlayOutcome {
                    card,
                    move_type: settlement.move_type,
                    claimed_count: settlement.claimed.len(),
                    claimed: settlement.claimed,
                    dropped_claims: settlement.dropped,
                    is_xeri: xeri,
                    sequence,
                    next_player: session.current_turn,
                    game_ended,
                },
                Vec::new(),
            ))
        })
    }

    /// Move the top stock card into `player`'s hand.
    pub fn draw_card(
        &self,
        game_id: GameId,
        player: PlayerNo,
        expected_version: Option<u32>,
    ) -> Result<GameFlowMutationResult<DrawOutcome>, AppError> {
        self.run_mutation(game_id, expected_version, |txn, session| {
            session.ensure_turn(player)?;
            let Some(card) = txn.zone_contents(Zone::Stock)?.first().copied() else {
                return Err(DomainError::validation(
                    ValidationKind::StockEmpty,
                    "the stock is empty",
                )
                .into());
            };
            txn.move_cards(&[card], Zone::Stock, Zone::Hand(player))?;
            let sequence = txn.append_move(NewMove::draw(player, card))?;
            let game_ended = advance_turn(txn, session, player)?;
            debug!(game_id, player = player.number(), sequence, "Card drawn");
            Ok((
                DrawOutcome {
                    card,
                    sequence,
                    next_player: session.current_turn,
                    game_ended,
                },
                Vec::new(),
            ))
        })
    }

    pub fn pass_turn(
        &self,
        game_id: GameId,
        player: PlayerNo,
        expected_version: Option<u32>,
    ) -> Result<GameFlowMutationResult<PassOutcome>, AppError> {
        self.run_mutation(game_id, expected_version, |txn, session| {
            session.ensure_turn(player)?;
            let sequence = txn.append_move(NewMove::pass(player))?;
            let game_ended = advance_turn(txn, session, player)?;
            debug!(game_id, player = player.number(), sequence, "Turn passed");
            Ok((
                PassOutcome {
                    sequence,
                    next_player: session.current_turn,
                    game_ended,
                },
                Vec::new(),
            ))
        })
    }
}

/// Hand the turn to the opponent, then finish the game if stock and hands are empty.
fn advance_turn(
    txn: &mut dyn GameTxn,
    session: &mut GameSession,
    player: PlayerNo,
) -> Result<bool, DomainError> {
    session.current_turn = Some(player.other());

    for zone in [
        Zone::Stock,
        Zone::Hand(PlayerNo::One),
        Zone::Hand(PlayerNo::Two),
    ] {
        if !txn.zone_contents(zone)?.is_empty() {
            return Ok(false);
        }
    }

    let outcome = determine_outcome(&session.stats);
    session.status = SessionStatus::Finished;
    session.current_turn = None;
    session.outcome = Some(outcome);

    // Cards left on the table score for no one and stay where they are.
    let remainder = txn.zone_contents(Zone::Table)?.len();
    info!(
        game_id = txn.game_id(),
        outcome = ?outcome,
        points_1 = session.stats[0].total_points,
        points_2 = session.stats[1].total_points,
        table_remainder = remainder,
        "Game finished"
    );
    Ok(true)
}
