//! Runs AI-vs-AI games through the real turn engine on an in-memory store.

use std::sync::Arc;

use tracing::debug;
use xeri_backend::domain::{Difficulty, GameSession, MoveRecord, SessionStatus};
use xeri_backend::errors::ErrorCode;
use xeri_backend::{AppError, EngineConfig, GameFlowService, InMemoryGameStore};

/// Everything one finished game leaves behind.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    pub seats: [Difficulty; 2],
    pub session: GameSession,
    pub moves: Vec<MoveRecord>,
    pub table_remainder: usize,
}

pub struct Simulator {
    config: EngineConfig,
}

impl Simulator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Play one game to completion. Each game gets its own store.
    pub fn simulate_game(&self, seed: u64, seats: [Difficulty; 2]) -> Result<GameResult, AppError> {
        let service = GameFlowService::new(Arc::new(InMemoryGameStore::new()), self.config.clone());
        let game = service.create_ai_match(seats[0], seats[1], Some(seed))?;

        // The engine caps each processing call; keep going until nothing is left to do.
        let mut turns = 0;
        loop {
            let batch = service.process_game_state(game.id)?;
            if batch.is_empty() {
                break;
            }
            turns += batch.len();
        }
        debug!(game_id = game.id, seed, turns, "Game processed");

        let session = service.session(game.id)?;
        if session.status != SessionStatus::Finished {
            return Err(AppError::internal(
                ErrorCode::AiError,
                format!(
                    "game with seed {seed} still {:?} after {turns} AI turns",
                    session.status
                ),
            ));
        }
        service.audit_game(game.id)?;

        Ok(GameResult {
            seed,
            seats,
            moves: service.move_history(game.id, None)?,
            table_remainder: service.tableau_snapshot(game.id)?.table().len(),
            session,
        })
    }
}
