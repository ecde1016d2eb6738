//! Game persistence contract.
//!
//! The engine never touches storage directly: every action runs inside
//! [`GameStore::with_txn`], which serializes work per game and commits the
//! transaction's changes only when the closure returns `Ok`.

use crate::domain::{Card, GameId, GameSession, MoveRecord, NewMove, Tableau, Zone};
use crate::errors::domain::DomainError;

/// Operations available inside one game's transaction.
pub trait GameTxn {
    fn game_id(&self) -> GameId;

    /// Cards in `zone`, in zone order (stock: top first; table: play order).
    fn zone_contents(&self, zone: Zone) -> Result<Vec<Card>, DomainError>;

    /// Move cards between zones. All-or-nothing.
    fn move_cards(&mut self, cards: &[Card], from: Zone, to: Zone) -> Result<(), DomainError>;

    /// Append to the move log; returns the assigned sequence (1-based).
    fn append_move(&mut self, mv: NewMove) -> Result<u32, DomainError>;

    fn session_meta(&self) -> Result<GameSession, DomainError>;

    fn update_session_meta(&mut self, session: GameSession) -> Result<(), DomainError>;

    /// The whole move log, oldest first.
    fn moves(&self) -> Result<Vec<MoveRecord>, DomainError>;

    fn last_move(&self) -> Result<Option<MoveRecord>, DomainError> {
        Ok(self.moves()?.pop())
    }

    fn move_count(&self) -> Result<u32, DomainError> {
        Ok(self.moves()?.len() as u32)
    }

    /// Snapshot of every zone.
    fn tableau(&self) -> Result<Tableau, DomainError>;
}

/// Game storage.
pub trait GameStore: Send + Sync {
    /// Persist a new game. The store assigns the id and returns the stored session.
    fn insert_game(&self, session: GameSession, tableau: Tableau)
        -> Result<GameSession, DomainError>;

    /// Run `f` with exclusive access to one game.
    ///
    /// Changes made through the transaction become visible only if `f`
    /// returns `Ok`; on `Err` nothing is written.
    fn with_txn<R, E, F>(&self, game_id: GameId, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut dyn GameTxn) -> Result<R, E>,
        E: From<DomainError>;

    /// Read-only access to one game under the same per-game lock.
    fn with_read<R, E, F>(&self, game_id: GameId, f: F) -> Result<R, E>
    where
        F: FnOnce(&dyn GameTxn) -> Result<R, E>,
        E: From<DomainError>;

    /// Snapshot of every session, ordered by id.
    fn list_sessions(&self) -> Result<Vec<GameSession>, DomainError>;
}
