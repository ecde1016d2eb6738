use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::{GameId, GameSession};
use crate::errors::ErrorCode;
use crate::repos::{GameStore, GameTxn};
use crate::services::game_flow::GameFlowService;
use crate::AppError;

/// What a committed mutation produced.
#[derive(Debug, Clone)]
pub struct GameFlowMutationResult<T> {
    /// Session as committed (version already bumped).
    pub session: GameSession,
    pub old_version: u32,
    pub outcome: T,
    pub transitions: Vec<GameTransition>,
}

impl<T> GameFlowMutationResult<T> {
    pub fn final_version(&self) -> u32 {
        self.session.version
    }
}

impl<S: GameStore> GameFlowService<S> {
    /// Run `mutation` against one game under its lock.
    ///
    /// The closure edits the session in place and may return explicit
    /// transitions; lifecycle transitions are derived from before/after.
    pub(super) fn run_mutation<T, F>(
        &self,
        game_id: GameId,
        expected_version: Option<u32>,
        mutation: F,
    ) -> Result<GameFlowMutationResult<T>, AppError>
    where
        F: FnOnce(&mut dyn GameTxn, &mut GameSession) -> Result<(T, Vec<GameTransition>), AppError>,
    {
        self.store.with_txn(game_id, |txn| {
            let mut session = txn.session_meta()?;
            let before = session.lifecycle_view();

            if let Some(expected) = expected_version {
                if before.version != expected {
                    return Err(AppError::conflict(
                        ErrorCode::OptimisticLock,
                        format!(
                            "Game version mismatch: expected {expected}, but game {game_id} has version {}",
                            before.version
                        ),
                    ));
                }
            }

            let (outcome, mut explicit_transitions) = mutation(&mut *txn, &mut session)?;

            session.version += 1;
            txn.update_session_meta(session.clone())?;

            let mut transitions = derive_game_transitions(&before, &session.lifecycle_view());
            transitions.append(&mut explicit_transitions);

            Ok(GameFlowMutationResult {
                session,
                old_version: before.version,
                outcome,
                transitions,
            })
        })
    }
}
