//! Scoring: captured cards plus a bonus per Xeri.

use serde::{Deserialize, Serialize};

use super::capture::MoveType;
use super::moves::{MoveAction, MoveRecord};
use super::zones::PlayerNo;

pub const XERI_BONUS: u32 = 10;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Size of the player's captured pile, played cards included.
    pub captured_count: u32,
    pub xeri_count: u32,
    pub total_points: u32,
}

impl PlayerStats {
    /// Record one capturing play that moved `cards` (played card included) to the pile.
    pub fn record_capture(&mut self, cards: u32, is_xeri: bool) {
        self.captured_count += cards;
        if is_xeri {
            self.xeri_count += 1;
        }
        self.total_points = score(self.captured_count, self.xeri_count);
    }
}

pub fn score(captured_count: u32, xeri_count: u32) -> u32 {
    captured_count + XERI_BONUS * xeri_count
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", content = "player", rename_all = "snake_case")]
pub enum GameOutcome {
    Winner(PlayerNo),
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<PlayerNo> {
        match self {
            GameOutcome::Winner(p) => Some(*p),
            GameOutcome::Draw => None,
        }
    }
}

/// Higher score wins; a tie goes to more Xeris; a full tie is a draw.
pub fn determine_outcome(stats: &[PlayerStats; 2]) -> GameOutcome {
    let [one, two] = stats;
    let key = |s: &PlayerStats| (s.total_points, s.xeri_count);
    match key(one).cmp(&key(two)) {
        std::cmp::Ordering::Greater => GameOutcome::Winner(PlayerNo::One),
        std::cmp::Ordering::Less => GameOutcome::Winner(PlayerNo::Two),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    }
}

/// Recompute both players' stats from the move log alone.
pub fn replay_stats(moves: &[MoveRecord]) -> [PlayerStats; 2] {
    let mut stats = [PlayerStats::default(); 2];
    for mv in moves {
        let captured = mv
            .move_type
            .is_some_and(|t| t != MoveType::Discard);
        if mv.action == MoveAction::Play && captured {
            stats[mv.player.index()].record_capture(mv.claimed.len() as u32 + 1, mv.is_xeri);
        }
    }
    stats
}
