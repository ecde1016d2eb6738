use serde::Serialize;

use super::state::{SessionStatus, UserId};
use super::zones::PlayerNo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub version: u32,
    pub turn: Option<PlayerNo>,
    pub status: SessionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player: PlayerNo },

    /// Edge-triggered: Waiting -> Active
    GameStarted,

    /// Edge-triggered: Active -> Finished
    GameEnded,

    /// Explicit: a user took seat 2
    PlayerJoined { user_id: UserId },

    /// Explicit: a user left or surrendered
    PlayerLeft { user_id: UserId },

    /// Edge-triggered: Waiting/Active -> Abandoned
    GameAbandoned,
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if let Some(player) = after.turn {
        if before.turn != Some(player) {
            transitions.push(GameTransition::TurnBecame { player });
        }
    }

    if before.status == SessionStatus::Waiting && after.status == SessionStatus::Active {
        transitions.push(GameTransition::GameStarted);
    }

    if before.status != SessionStatus::Finished && after.status == SessionStatus::Finished {
        transitions.push(GameTransition::GameEnded);
    }

    if before.status != SessionStatus::Abandoned && after.status == SessionStatus::Abandoned {
        transitions.push(GameTransition::GameAbandoned);
    }

    transitions
}
