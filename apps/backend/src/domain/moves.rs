//! Append-only move log entries.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::capture::MoveType;
use super::cards_types::Card;
use super::zones::PlayerNo;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    Play,
    Draw,
    Pass,
}

/// A move as submitted to the store, before it is sequenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMove {
    pub player: PlayerNo,
    pub action: MoveAction,
    pub card: Option<Card>,
    pub claimed: Vec<Card>,
    pub move_type: Option<MoveType>,
    pub is_xeri: bool,
}

impl NewMove {
    pub fn play(
        player: PlayerNo,
        card: Card,
        claimed: Vec<Card>,
        move_type: MoveType,
        is_xeri: bool,
    ) -> Self {
        Self {
            player,
            action: MoveAction::Play,
            card: Some(card),
            claimed,
            move_type: Some(move_type),
            is_xeri,
        }
    }

    pub fn draw(player: PlayerNo, card: Card) -> Self {
        Self {
            player,
            action: MoveAction::Draw,
            card: Some(card),
            claimed: Vec::new(),
            move_type: None,
            is_xeri: false,
        }
    }

    pub fn pass(player: PlayerNo) -> Self {
        Self {
            player,
            action: MoveAction::Pass,
            card: None,
            claimed: Vec::new(),
            move_type: None,
            is_xeri: false,
        }
    }

    pub fn sequenced(self, sequence: u32, timestamp: OffsetDateTime) -> MoveRecord {
        MoveRecord {
            sequence,
            player: self.player,
            action: self.action,
            card: self.card,
            claimed: self.claimed,
            move_type: self.move_type,
            is_xeri: self.is_xeri,
            timestamp,
        }
    }
}

/// A logged move. Sequences start at 1 and increase by one per game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub sequence: u32,
    pub player: PlayerNo,
    pub action: MoveAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default)]
    pub claimed: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_type: Option<MoveType>,
    pub is_xeri: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl MoveRecord {
    /// Copy of this move as `viewer` may see it: an opponent's drawn card is hidden.
    pub fn visible_to(&self, viewer: PlayerNo) -> MoveRecord {
        let mut shown = self.clone();
        if self.action == MoveAction::Draw && self.player != viewer {
            shown.card = None;
        }
        shown
    }
}
