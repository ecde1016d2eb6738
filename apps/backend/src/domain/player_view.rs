//! What one player is allowed to see, and the moves open to them.

use serde::Serialize;

use super::capture::{resolve, MoveType, Resolution};
use super::cards_types::Card;
use super::moves::MoveRecord;
use super::scoring::{GameOutcome, PlayerStats};
use super::state::{GameId, GameSession, SessionStatus};
use super::tableau::Tableau;
use super::zones::{PlayerNo, Zone};

/// One hand card resolved against the current table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub card: Card,
    pub move_type: MoveType,
    pub claimable: Vec<Card>,
    pub is_xeri_possible: bool,
}

impl Candidate {
    pub fn new(card: Card, table: &[Card]) -> Self {
        let Resolution {
            move_type,
            claimable,
        } = resolve(card, table);
        let is_xeri_possible =
            move_type == MoveType::Capture && claimable.len() == 1 && table.len() == 1;
        Self {
            card,
            move_type,
            claimable,
            is_xeri_possible,
        }
    }
}

/// A player's view of a game. The opponent's hand is reduced to a count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub game_id: GameId,
    pub me: PlayerNo,
    pub status: SessionStatus,
    pub current_turn: Option<PlayerNo>,
    pub hand: Vec<Card>,
    pub opponent_hand_size: usize,
    pub table: Vec<Card>,
    pub stock_count: usize,
    pub stats: [PlayerStats; 2],
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<MoveRecord>,
    pub move_count: u32,
    pub version: u32,
}

impl PlayerView {
    pub fn build(
        session: &GameSession,
        tableau: &Tableau,
        last_move: Option<&MoveRecord>,
        move_count: u32,
        me: PlayerNo,
    ) -> Self {
        Self {
            game_id: session.id,
            me,
            status: session.status,
            current_turn: session.current_turn,
            hand: tableau.zone(Zone::Hand(me)).to_vec(),
            opponent_hand_size: tableau.zone(Zone::Hand(me.other())).len(),
            table: tableau.table().to_vec(),
            stock_count: tableau.stock_len(),
            stats: session.stats,
            outcome: session.outcome,
            last_move: last_move.map(|m| m.visible_to(me)),
            move_count,
            version: session.version,
        }
    }

    pub fn is_my_turn(&self) -> bool {
        self.status == SessionStatus::Active && self.current_turn == Some(self.me)
    }

    pub fn can_draw(&self) -> bool {
        self.stock_count > 0
    }

    /// Every hand card resolved against the table, in hand order.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.hand
            .iter()
            .map(|card| Candidate::new(*card, &self.table))
            .collect()
    }

    pub fn my_stats(&self) -> PlayerStats {
        self.stats[self.me.index()]
    }
}

/// Actions open to a player right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidMoves {
    pub can_draw: bool,
    pub can_pass: bool,
    pub playable: Vec<Candidate>,
}

impl ValidMoves {
    pub fn from_view(view: &PlayerView) -> Self {
        if !view.is_my_turn() {
            return Self {
                can_draw: false,
                can_pass: false,
                playable: Vec::new(),
            };
        }
        Self {
            can_draw: view.can_draw(),
            can_pass: true,
            playable: view.candidates(),
        }
    }
}
