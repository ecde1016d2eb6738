// Unit tests for error mapping - pure domain logic, no store involved
use std::collections::HashSet;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_turn_validation_kinds() {
    let cases = [
        (ValidationKind::NotPlayersTurn, "NOT_PLAYERS_TURN"),
        (ValidationKind::CardNotInHand, "CARD_NOT_IN_HAND"),
        (ValidationKind::InvalidClaim, "INVALID_CLAIM"),
        (ValidationKind::StockEmpty, "STOCK_EMPTY"),
        (ValidationKind::GameAlreadyFinished, "GAME_ALREADY_FINISHED"),
        (ValidationKind::NoLegalMove, "NO_LEGAL_MOVE"),
    ];
    for (kind, expected) in cases {
        let app: AppError = DomainError::validation(kind, "x").into();
        assert_eq!(app.code().as_str(), expected);
        assert!(matches!(app, AppError::Validation { .. }));
    }
}

#[test]
fn no_access_is_forbidden() {
    let app: AppError = DomainError::validation(ValidationKind::NoAccess, "not seated").into();
    assert_eq!(app.code(), ErrorCode::NoAccess);
    assert!(matches!(app, AppError::Forbidden { .. }));
    assert_eq!(app.detail(), "not seated");
}

#[test]
fn maps_conflicts() {
    let lock = DomainError::conflict(ConflictKind::OptimisticLock, "stale");
    let app: AppError = lock.into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");

    let other = DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert!(matches!(app, AppError::Conflict { .. }));
}

#[test]
fn maps_not_found_and_infra() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "game 9").into();
    assert_eq!(app.code(), ErrorCode::GameNotFound);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "51 cards").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert!(matches!(app, AppError::Internal { .. }));
}

#[test]
fn error_codes_are_unique() {
    let seen: HashSet<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    assert_eq!(seen.len(), ErrorCode::ALL.len());
}

#[test]
fn display_carries_the_detail() {
    let app = AppError::invalid(ErrorCode::StockEmpty, "nothing to draw");
    assert_eq!(app.code(), ErrorCode::StockEmpty);
    assert_eq!(app.to_string(), "Validation error: nothing to draw");
}
