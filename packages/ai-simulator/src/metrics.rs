//! Per-game metrics for simulation output.

use serde::Serialize;
use xeri_backend::domain::{
    Difficulty, GameOutcome, MoveAction, MoveType, PlayerNo, PlayerStats,
};

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_number: u32,
    pub seed: u64,
    pub timestamp: String,
    pub result: GameResultMetrics,
    pub seats: Vec<SeatMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub outcome: Option<GameOutcome>,
    /// Winning seat number, `None` on a draw.
    pub winner: Option<u8>,
    pub moves: usize,
    /// Cards still on the table at the end; they score for no one.
    pub table_remainder: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SeatMetrics {
    pub seat: u8,
    pub difficulty: String,
    pub total_points: u32,
    pub captured_count: u32,
    pub xeri_count: u32,
    pub captures: u32,
    pub jack_captures: u32,
    pub discards: u32,
    pub draws: u32,
    pub passes: u32,
}

impl SeatMetrics {
    fn new(player: PlayerNo, difficulty: Difficulty, stats: PlayerStats) -> Self {
        Self {
            seat: player.number(),
            difficulty: difficulty.to_string(),
            total_points: stats.total_points,
            captured_count: stats.captured_count,
            xeri_count: stats.xeri_count,
            ..Self::default()
        }
    }
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_number: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let mut seats: Vec<SeatMetrics> = PlayerNo::BOTH
        .into_iter()
        .map(|p| SeatMetrics::new(p, result.seats[p.index()], result.session.stats[p.index()]))
        .collect();

    for mv in &result.moves {
        let seat = &mut seats[mv.player.index()];
        match (mv.action, mv.move_type) {
            (MoveAction::Play, Some(MoveType::Capture)) => seat.captures += 1,
            (MoveAction::Play, Some(MoveType::JackCapture)) => seat.jack_captures += 1,
            (MoveAction::Play, _) => seat.discards += 1,
            (MoveAction::Draw, _) => seat.draws += 1,
            (MoveAction::Pass, _) => seat.passes += 1,
        }
    }

    GameMetrics {
        game_number,
        seed: result.seed,
        timestamp,
        result: GameResultMetrics {
            outcome: result.session.outcome,
            winner: result.session.winner().map(PlayerNo::number),
            moves: result.moves.len(),
            table_remainder: result.table_remainder,
            duration_ms,
        },
        seats,
    }
}
