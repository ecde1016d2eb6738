//! Capture resolution: what a played card can take from the table.

use serde::{Deserialize, Serialize};

use super::cards_logic::same_rank;
use super::cards_types::Card;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    Discard,
    Capture,
    JackCapture,
}

/// What a played card is entitled to, before the player's claim is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub move_type: MoveType,
    /// Table cards the play may take, in table order.
    pub claimable: Vec<Card>,
}

/// Resolve a played card against the current table.
///
/// Precedence: a Jack takes the whole table (even when empty), otherwise
/// every table card of equal rank, otherwise nothing.
pub fn resolve(played: Card, table: &[Card]) -> Resolution {
    if played.is_jack() {
        return Resolution {
            move_type: MoveType::JackCapture,
            claimable: table.to_vec(),
        };
    }
    let matches: Vec<Card> = table
        .iter()
        .copied()
        .filter(|c| same_rank(*c, played))
        .collect();
    if matches.is_empty() {
        Resolution {
            move_type: MoveType::Discard,
            claimable: Vec::new(),
        }
    } else {
        Resolution {
            move_type: MoveType::Capture,
            claimable: matches,
        }
    }
}

/// A rank-match capture that takes the single card of a one-card table.
///
/// Jack captures never count.
pub fn is_xeri(played: Card, table_before: &[Card], claimed: &[Card]) -> bool {
    resolve(played, table_before).move_type == MoveType::Capture
        && claimed.len() == 1
        && table_before.len() == 1
}

/// How requested claim ids that the play is not entitled to are handled.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimPolicy {
    /// Drop them and apply the rest.
    #[default]
    Lenient,
    /// Reject the whole play with `InvalidClaim`.
    Strict,
}

/// The effective outcome of a play once the player's claim is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub move_type: MoveType,
    /// Table cards that move to the player's captured pile.
    pub claimed: Vec<Card>,
    /// Requested cards that were ignored.
    pub dropped: Vec<Card>,
}

impl Settlement {
    /// The played card leaves the table with the claimed cards.
    pub fn captures(&self) -> bool {
        self.move_type != MoveType::Discard
    }
}

/// Intersect the requested claim with what the resolution allows.
///
/// An empty effective claim turns a capture into a discard, except for a
/// Jack played on an empty table, which still captures itself.
pub fn settle_claims(
    played: Card,
    resolution: &Resolution,
    requested: &[Card],
    policy: ClaimPolicy,
) -> Result<Settlement, DomainError> {
    let mut claimed = Vec::new();
    let mut dropped = Vec::new();
    for card in requested {
        if claimed.contains(card) || dropped.contains(card) {
            continue;
        }
        if resolution.claimable.contains(card) {
            claimed.push(*card);
        } else {
            dropped.push(*card);
        }
    }

    if policy == ClaimPolicy::Strict && !dropped.is_empty() {
        let listed: Vec<String> = dropped.iter().map(Card::to_string).collect();
        return Err(DomainError::validation(
            ValidationKind::InvalidClaim,
            format!("{played} cannot claim {}", listed.join(", ")),
        ));
    }

    // Claims are recorded in table order.
    claimed.sort_by_key(|c| resolution.claimable.iter().position(|t| t == c));

    let move_type = match resolution.move_type {
        MoveType::JackCapture if resolution.claimable.is_empty() => MoveType::JackCapture,
        _ if claimed.is_empty() => MoveType::Discard,
        other => other,
    };

    Ok(Settlement {
        move_type,
        claimed,
        dropped,
    })
}
