//! Game session metadata: seats, lifecycle status, turn, stats, outcome.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::game_transition::GameLifecycleView;
use super::scoring::{GameOutcome, PlayerStats};
use super::zones::PlayerNo;
use crate::ai::AiConfig;
use crate::errors::domain::{DomainError, ValidationKind};

pub type GameId = u64;
pub type UserId = i64;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    HumanHuman,
    HumanComputer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::Other("INVALID_DIFFICULTY".into()),
                    format!("unknown difficulty: {s}"),
                )
            })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Waiting,
    Active,
    Finished,
    Abandoned,
}

impl SessionStatus {
    /// Waiting or active: the game still counts against its players.
    pub fn is_open(self) -> bool {
        matches!(self, SessionStatus::Waiting | SessionStatus::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Participant {
    Human { user_id: UserId },
    Ai { difficulty: Difficulty, config: AiConfig },
}

impl Participant {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Participant::Human { user_id } => Some(*user_id),
            Participant::Ai { .. } => None,
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Participant::Ai { .. })
    }
}

/// Per-game metadata. Card placement lives in the tableau, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: GameId,
    pub host: UserId,
    pub seats: [Option<Participant>; 2],
    pub mode: GameMode,
    pub ai_difficulty: Option<Difficulty>,
    pub status: SessionStatus,
    /// `None` unless the game is active.
    pub current_turn: Option<PlayerNo>,
    pub stats: [PlayerStats; 2],
    /// Set when the game finishes, or when a player surrenders.
    pub outcome: Option<GameOutcome>,
    pub seed: u64,
    /// Bumped on every committed mutation.
    pub version: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl GameSession {
    /// A fresh waiting session with the host in seat 1. The store assigns `id`.
    pub fn new_waiting(host: UserId, mode: GameMode, seed: u64) -> Self {
        Self {
            id: 0,
            host,
            seats: [Some(Participant::Human { user_id: host }), None],
            mode,
            ai_difficulty: None,
            status: SessionStatus::Waiting,
            current_turn: None,
            stats: [PlayerStats::default(); 2],
            outcome: None,
            seed,
            version: 0,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn participant(&self, player: PlayerNo) -> Option<&Participant> {
        self.seats[player.index()].as_ref()
    }

    /// Seat occupied by a human user, if any.
    pub fn seat_of(&self, user_id: UserId) -> Option<PlayerNo> {
        PlayerNo::BOTH.into_iter().find(|p| {
            self.participant(*p)
                .and_then(Participant::user_id)
                .is_some_and(|u| u == user_id)
        })
    }

    pub fn winner(&self) -> Option<PlayerNo> {
        self.outcome.and_then(|o| o.winner())
    }

    pub fn lifecycle_view(&self) -> GameLifecycleView {
        GameLifecycleView {
            version: self.version,
            turn: self.current_turn,
            status: self.status,
        }
    }

    /// Fail unless the game is active and it is `player`'s turn.
    pub fn ensure_turn(&self, player: PlayerNo) -> Result<(), DomainError> {
        match self.status {
            SessionStatus::Active => {}
            SessionStatus::Waiting => {
                return Err(DomainError::validation(
                    ValidationKind::GameNotActive,
                    format!("game {} is waiting for a second player", self.id),
                ))
            }
            SessionStatus::Finished | SessionStatus::Abandoned => {
                return Err(DomainError::validation(
                    ValidationKind::GameAlreadyFinished,
                    format!("game {} is {:?}", self.id, self.status),
                ))
            }
        }
        if self.current_turn != Some(player) {
            return Err(DomainError::validation(
                ValidationKind::NotPlayersTurn,
                format!("it is not player {player}'s turn"),
            ));
        }
        Ok(())
    }
}
