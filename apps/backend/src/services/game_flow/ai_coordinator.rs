//! Drives AI seats through the same turn engine humans use.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::player_actions::{DrawOutcome, PassOutcome, PlayOutcome};
use crate::ai::{create_ai, AiConfig, AiDecision, AiError};
use crate::domain::seed_derivation::derive_ai_seed;
use crate::domain::{
    Difficulty, GameId, GameSession, Participant, PlayerNo, PlayerView, SessionStatus,
};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::repos::GameStore;
use crate::services::game_flow::GameFlowService;
use crate::AppError;

/// What the engine did with an AI decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "outcome", rename_all = "snake_case")]
pub enum AiTurnAction {
    Played(PlayOutcome),
    Drew(DrawOutcome),
    Passed(PassOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiTurnReport {
    pub player: PlayerNo,
    pub difficulty: Difficulty,
    pub decision: AiDecision,
    pub action: AiTurnAction,
    /// 1 when the first decision was accepted.
    pub attempts: u32,
    /// Game version after the move.
    pub version: u32,
}

impl<S: GameStore> GameFlowService<S> {
    /// Ask the AI in `player`'s seat for a decision without applying it.
    pub fn choose_ai_move(&self, game_id: GameId, player: PlayerNo) -> Result<AiDecision, AppError> {
        let session = self.session(game_id)?;
        let (difficulty, config) = ai_seat(&session, player).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!("seat {player} of game {game_id} is not an AI"),
            )
        })?;
        let view = self.player_view(game_id, player)?;
        decide(&session, difficulty, config, &view)
    }

    /// Play one move for the AI whose turn it is. `None` when no AI is to move.
    ///
    /// A rejected decision is retried against a fresh view, up to
    /// `ai_max_retries` attempts in total.
    pub fn run_ai_turn(&self, game_id: GameId) -> Result<Option<AiTurnReport>, AppError> {
        let max_attempts = self.config.ai_max_retries.max(1);
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            let session = self.session(game_id)?;
            if session.status != SessionStatus::Active {
                return Ok(None);
            }
            let Some(player) = session.current_turn else {
                return Ok(None);
            };
            let Some((difficulty, config)) = ai_seat(&session, player) else {
                return Ok(None);
            };

            let view = self.player_view(game_id, player)?;
            let decision = decide(&session, difficulty, config, &view)?;
            debug!(
                game_id,
                player = player.number(),
                difficulty = %difficulty,
                attempt,
                decision = ?decision,
                "AI decided"
            );

            match self.apply_decision(game_id, player, &decision, view.version) {
                Ok((action, version)) => {
                    return Ok(Some(AiTurnReport {
                        player,
                        difficulty,
                        decision,
                        action,
                        attempts: attempt,
                        version,
                    }))
                }
                Err(err) => {
                    warn!(
                        game_id,
                        player = player.number(),
                        attempt,
                        code = %err.code(),
                        error = %err,
                        "AI move rejected"
                    );
                    last_error = Some(err);
                }
            }
        }

        let detail = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempt made".to_string());
        Err(AppError::internal(
            ErrorCode::AiError,
            format!("AI gave up on game {game_id} after {max_attempts} attempts: {detail}"),
        ))
    }

    /// Run AI turns until a human is to move or the game is over.
    pub fn process_game_state(&self, game_id: GameId) -> Result<Vec<AiTurnReport>, AppError> {
        let mut reports = Vec::new();
        while reports.len() < self.config.max_ai_turns as usize {
            match self.run_ai_turn(game_id)? {
                Some(report) => reports.push(report),
                None => return Ok(reports),
            }
        }
        warn!(
            game_id,
            turns = reports.len(),
            "Stopped processing AI turns at the configured limit"
        );
        Ok(reports)
    }

    fn apply_decision(
        &self,
        game_id: GameId,
        player: PlayerNo,
        decision: &AiDecision,
        version: u32,
    ) -> Result<(AiTurnAction, u32), AppError> {
        let expected = Some(version);
        Ok(match decision {
            AiDecision::Play { card, claims } => {
                let r = self.play_card(game_id, player, *card, claims, expected)?;
                let v = r.final_version();
                if r.outcome.game_ended {
                    info!(game_id, player = player.number(), "AI played the last card");
                }
                (AiTurnAction::Played(r.outcome), v)
            }
            AiDecision::Draw => {
                let r = self.draw_card(game_id, player, expected)?;
                let v = r.final_version();
                (AiTurnAction::Drew(r.outcome), v)
            }
            AiDecision::Pass => {
                let r = self.pass_turn(game_id, player, expected)?;
                let v = r.final_version();
                (AiTurnAction::Passed(r.outcome), v)
            }
        })
    }
}

fn ai_seat(session: &GameSession, player: PlayerNo) -> Option<(Difficulty, &AiConfig)> {
    match session.participant(player)? {
        Participant::Ai { difficulty, config } => Some((*difficulty, config)),
        Participant::Human { .. } => None,
    }
}

/// Build the tier with a per-move seed and ask it. No legal move becomes a pass.
fn decide(
    session: &GameSession,
    difficulty: Difficulty,
    config: &AiConfig,
    view: &PlayerView,
) -> Result<AiDecision, AppError> {
    let seed = derive_ai_seed(
        config.seed().unwrap_or(session.seed),
        view.me.number(),
        view.move_count,
    );
    let seeded = AiConfig {
        seed: Some(seed),
        ..config.clone()
    };
    match create_ai(difficulty, &seeded).choose_move(view) {
        Ok(decision) => Ok(decision),
        Err(AiError::NoLegalMove) => Ok(AiDecision::Pass),
        Err(err) => Err(err.into()),
    }
}
