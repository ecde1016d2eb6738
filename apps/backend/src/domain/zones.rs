//! Players and the closed set of card zones.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// One of the two seats. Serialized as `1` / `2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PlayerNo {
    One,
    Two,
}

impl PlayerNo {
    pub const BOTH: [PlayerNo; 2] = [PlayerNo::One, PlayerNo::Two];

    pub fn other(self) -> PlayerNo {
        match self {
            PlayerNo::One => PlayerNo::Two,
            PlayerNo::Two => PlayerNo::One,
        }
    }

    /// Zero-based index into per-player arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerNo::One => 0,
            PlayerNo::Two => 1,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl From<PlayerNo> for u8 {
    fn from(p: PlayerNo) -> u8 {
        p.number()
    }
}

impl TryFrom<u8> for PlayerNo {
    type Error = DomainError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(PlayerNo::One),
            2 => Ok(PlayerNo::Two),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidPlayer,
                format!("player must be 1 or 2, got {n}"),
            )),
        }
    }
}

impl fmt::Display for PlayerNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Where a card lives. Every card is in exactly one zone at all times.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Ordered; index 0 is the top.
    Stock,
    Hand(PlayerNo),
    /// Ordered by play; visible to both players.
    Table,
    /// Terminal: cards never re-enter play.
    Captured(PlayerNo),
}

impl Zone {
    pub const ALL: [Zone; 6] = [
        Zone::Stock,
        Zone::Hand(PlayerNo::One),
        Zone::Hand(PlayerNo::Two),
        Zone::Table,
        Zone::Captured(PlayerNo::One),
        Zone::Captured(PlayerNo::Two),
    ];
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Stock => write!(f, "stock"),
            Zone::Hand(p) => write!(f, "hand[{p}]"),
            Zone::Table => write!(f, "table"),
            Zone::Captured(p) => write!(f, "captured[{p}]"),
        }
    }
}
