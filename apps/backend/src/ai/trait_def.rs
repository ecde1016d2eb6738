//! AI player trait definition.

use std::fmt;

use serde::Serialize;

use crate::domain::{Card, PlayerView};
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// Empty hand and empty stock: nothing to play or draw.
    NoLegalMove,
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoLegalMove => write!(f, "AI has no legal move"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::NoLegalMove => AppError::invalid(ErrorCode::NoLegalMove, err.to_string()),
            other => AppError::internal(ErrorCode::AiError, other.to_string()),
        }
    }
}

/// The action an AI wants to take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AiDecision {
    Play { card: Card, claims: Vec<Card> },
    Draw,
    Pass,
}

/// Trait for AI players.
///
/// Implementations receive the view of the seat they play and return one
/// action. They are executed through the same turn engine as humans, so a
/// wrong choice is rejected rather than applied.
pub trait AiPlayer: Send + Sync {
    fn choose_move(&self, view: &PlayerView) -> Result<AiDecision, AiError>;
}

/// Draw when the stock allows it, else pass. Empty hand and stock is `NoLegalMove`.
pub(crate) fn draw_or_pass(view: &PlayerView) -> Result<AiDecision, AiError> {
    if view.can_draw() {
        Ok(AiDecision::Draw)
    } else if view.hand.is_empty() {
        Err(AiError::NoLegalMove)
    } else {
        Ok(AiDecision::Pass)
    }
}
