//! Error codes for the Xeri backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in response envelopes.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn validation
    /// Action submitted out of turn
    NotPlayersTurn,
    /// Played card is not in the player's hand
    CardNotInHand,
    /// Claimed cards the played card cannot take (strict claim policy)
    InvalidClaim,
    /// Draw requested with an empty stock
    StockEmpty,
    /// Game is waiting for a second player
    GameNotActive,
    /// Game is finished or abandoned
    GameAlreadyFinished,
    /// AI has neither cards nor stock to draw from
    NoLegalMove,
    /// Card notation could not be parsed
    ParseCard,
    /// Player number outside 1..=2
    InvalidPlayer,
    /// Hand size outside the dealable range
    InvalidHandSize,
    /// General validation error
    ValidationError,

    // Access
    /// Caller is not seated at this game
    NoAccess,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Card not found in the expected zone
    CardNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// User already has a waiting or active game
    AlreadyInGame,
    /// Game cannot be joined by this user
    GameNotJoinable,
    /// Seat already taken
    SeatTaken,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// AI failed to produce a move
    AiError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
    /// Internal error
    InternalError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotPlayersTurn => "NOT_PLAYERS_TURN",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::InvalidClaim => "INVALID_CLAIM",
            Self::StockEmpty => "STOCK_EMPTY",
            Self::GameNotActive => "GAME_NOT_ACTIVE",
            Self::GameAlreadyFinished => "GAME_ALREADY_FINISHED",
            Self::NoLegalMove => "NO_LEGAL_MOVE",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::InvalidHandSize => "INVALID_HAND_SIZE",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::NoAccess => "NO_ACCESS",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::AlreadyInGame => "ALREADY_IN_GAME",
            Self::GameNotJoinable => "GAME_NOT_JOINABLE",
            Self::SeatTaken => "SEAT_TAKEN",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::AiError => "AI_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 24] = [
        Self::NotPlayersTurn,
        Self::CardNotInHand,
        Self::InvalidClaim,
        Self::StockEmpty,
        Self::GameNotActive,
        Self::GameAlreadyFinished,
        Self::NoLegalMove,
        Self::ParseCard,
        Self::InvalidPlayer,
        Self::InvalidHandSize,
        Self::ValidationError,
        Self::NoAccess,
        Self::GameNotFound,
        Self::CardNotFound,
        Self::NotFound,
        Self::AlreadyInGame,
        Self::GameNotJoinable,
        Self::SeatTaken,
        Self::OptimisticLock,
        Self::Conflict,
        Self::AiError,
        Self::ConfigError,
        Self::DataCorruption,
        Self::InternalError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
