use serde::Serialize;

use crate::domain::scoring::GameOutcome;
use crate::domain::{
    Card, MoveRecord, PlayerNo, PlayerStats, PlayerView, SessionStatus, ValidMoves,
};

/// Everything a client needs to render one seat's screen.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub game_id: u64,
    pub version: u32,
    pub status: SessionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_turn: Option<PlayerNo>,
    pub table: Vec<Card>,
    pub stock_count: usize,
    pub stats: [PlayerStats; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GameOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_move: Option<MoveRecord>,
    pub viewer: ViewerState,
}

/// Viewer-relative part of the state.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    pub seat: PlayerNo,
    pub hand: Vec<Card>,
    pub opponent_hand_size: usize,
    pub is_my_turn: bool,
    pub valid_moves: ValidMoves,
}

impl From<PlayerView> for GameStateResponse {
    fn from(view: PlayerView) -> Self {
        let valid_moves = ValidMoves::from_view(&view);
        let is_my_turn = view.is_my_turn();
        Self {
            game_id: view.game_id,
            version: view.version,
            status: view.status,
            current_turn: view.current_turn,
            table: view.table,
            stock_count: view.stock_count,
            stats: view.stats,
            outcome: view.outcome,
            last_move: view.last_move,
            viewer: ViewerState {
                seat: view.me,
                hand: view.hand,
                opponent_hand_size: view.opponent_hand_size,
                is_my_turn,
                valid_moves,
            },
        }
    }
}
