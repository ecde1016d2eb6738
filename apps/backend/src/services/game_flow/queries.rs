use tracing::{error, warn};

use crate::domain::scoring::replay_stats;
use crate::domain::{
    GameId, GameSession, MoveRecord, PlayerNo, PlayerStats, PlayerView, Tableau, UserId,
    ValidMoves,
};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::repos::{GameStore, GameTxn};
use crate::services::game_flow::GameFlowService;
use crate::AppError;

/// Result of checking a game's stored state against its own move log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameAudit {
    pub game_id: GameId,
    pub card_count: usize,
    pub move_count: u32,
    pub replayed: [PlayerStats; 2],
}

impl<S: GameStore> GameFlowService<S> {
    pub fn session(&self, game_id: GameId) -> Result<GameSession, AppError> {
        self.store
            .with_read(game_id, |txn| Ok::<_, AppError>(txn.session_meta()?))
    }

    /// What `player` may see of the game.
    pub fn player_view(&self, game_id: GameId, player: PlayerNo) -> Result<PlayerView, AppError> {
        self.store
            .with_read(game_id, |txn| Ok::<_, AppError>(build_view(txn, player)?))
    }

    /// Like [`Self::player_view`], resolving the seat from a user id.
    pub fn player_view_for_user(
        &self,
        game_id: GameId,
        user: UserId,
    ) -> Result<PlayerView, AppError> {
        self.store.with_read(game_id, |txn| {
            let session = txn.session_meta()?;
            let seat = seat_for(&session, user)?;
            Ok::<_, AppError>(build_view(txn, seat)?)
        })
    }

    pub fn resolve_seat(&self, game_id: GameId, user: UserId) -> Result<PlayerNo, AppError> {
        let session = self.session(game_id)?;
        Ok(seat_for(&session, user)?)
    }

    pub fn valid_moves(&self, game_id: GameId, player: PlayerNo) -> Result<ValidMoves, AppError> {
        Ok(ValidMoves::from_view(&self.player_view(game_id, player)?))
    }

    /// The move log in sequence order. With a viewer, opponent draws are masked.
    pub fn move_history(
        &self,
        game_id: GameId,
        viewer: Option<PlayerNo>,
    ) -> Result<Vec<MoveRecord>, AppError> {
        let moves = self
            .store
            .with_read(game_id, |txn| Ok::<_, AppError>(txn.moves()?))?;
        Ok(match viewer {
            Some(p) => moves.iter().map(|m| m.visible_to(p)).collect(),
            None => moves,
        })
    }

    /// Full card placement, hidden zones included.
    pub fn tableau_snapshot(&self, game_id: GameId) -> Result<Tableau, AppError> {
        self.store
            .with_read(game_id, |txn| Ok::<_, AppError>(txn.tableau()?))
    }

    /// Check card closure and that the stored stats match a replay of the move log.
    pub fn audit_game(&self, game_id: GameId) -> Result<GameAudit, AppError> {
        self.store.with_read(game_id, |txn| {
            let tableau = txn.tableau()?;
            if let Err(err) = tableau.verify_closure() {
                error!(game_id, error = %err, "Card closure violated");
                return Err(err.into());
            }

            let session = txn.session_meta()?;
            let moves = txn.moves()?;
            let replayed = replay_stats(&moves);
            if replayed != session.stats {
                warn!(
                    game_id,
                    stored = ?session.stats,
                    replayed = ?replayed,
                    "Stats disagree with move log"
                );
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("game {game_id}: stored stats do not match the move log"),
                )
                .into());
            }

            Ok::<_, AppError>(GameAudit {
                game_id,
                card_count: tableau.card_count(),
                move_count: moves.len() as u32,
                replayed,
            })
        })
    }
}

fn build_view(txn: &dyn GameTxn, player: PlayerNo) -> Result<PlayerView, DomainError> {
    let session = txn.session_meta()?;
    let tableau = txn.tableau()?;
    let last_move = txn.last_move()?;
    Ok(PlayerView::build(
        &session,
        &tableau,
        last_move.as_ref(),
        txn.move_count()?,
        player,
    ))
}

pub(super) fn seat_for(session: &GameSession, user: UserId) -> Result<PlayerNo, DomainError> {
    session.seat_of(user).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::NoAccess,
            format!("user {user} is not seated at game {}", session.id),
        )
    })
}
