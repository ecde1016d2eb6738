//! Game flow service: the turn engine on top of a [`GameStore`].
//!
//! Every action runs inside one store transaction: validate, mutate zones,
//! log the move, advance the turn and check for the end of the game. A
//! failed action leaves nothing behind.

mod ai_coordinator;
mod lifecycle;
mod mutation;
mod player_actions;
mod queries;

use std::sync::Arc;

pub use ai_coordinator::{AiTurnAction, AiTurnReport};
pub use lifecycle::SYSTEM_HOST;
pub use mutation::GameFlowMutationResult;
pub use player_actions::{DrawOutcome, PassOutcome, PlayOutcome};
pub use queries::GameAudit;

use crate::config::EngineConfig;
use crate::repos::GameStore;

pub struct GameFlowService<S: GameStore> {
    store: Arc<S>,
    config: EngineConfig,
}

impl<S: GameStore> GameFlowService<S> {
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl<S: GameStore> Clone for GameFlowService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}
