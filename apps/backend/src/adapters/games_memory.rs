//! In-process `GameStore` backed by a concurrent map of per-game records.
//!
//! Each game sits behind its own mutex, so actions on one game are
//! serialized while different games proceed in parallel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use time::OffsetDateTime;
use tracing::{debug, error};

use crate::domain::{Card, GameId, GameSession, MoveRecord, NewMove, Tableau, Zone};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::repos::{GameStore, GameTxn};

#[derive(Debug, Clone)]
struct GameRecord {
    session: GameSession,
    tableau: Tableau,
    moves: Vec<MoveRecord>,
}

struct MemoryTxn<'a> {
    record: &'a mut GameRecord,
}

impl GameTxn for MemoryTxn<'_> {
    fn game_id(&self) -> GameId {
        self.record.session.id
    }

    fn zone_contents(&self, zone: Zone) -> Result<Vec<Card>, DomainError> {
        Ok(self.record.tableau.zone(zone).to_vec())
    }

    fn move_cards(&mut self, cards: &[Card], from: Zone, to: Zone) -> Result<(), DomainError> {
        self.record.tableau.move_cards(cards, from, to)
    }

    fn append_move(&mut self, mv: NewMove) -> Result<u32, DomainError> {
        let sequence = self.record.moves.len() as u32 + 1;
        self.record
            .moves
            .push(mv.sequenced(sequence, OffsetDateTime::now_utc()));
        Ok(sequence)
    }

    fn session_meta(&self) -> Result<GameSession, DomainError> {
        Ok(self.record.session.clone())
    }

    fn update_session_meta(&mut self, session: GameSession) -> Result<(), DomainError> {
        if session.id != self.record.session.id {
            return Err(DomainError::infra(
                InfraErrorKind::Other("GAME_ID_MISMATCH".into()),
                format!(
                    "session {} written through transaction for game {}",
                    session.id, self.record.session.id
                ),
            ));
        }
        self.record.session = session;
        Ok(())
    }

    fn moves(&self) -> Result<Vec<MoveRecord>, DomainError> {
        Ok(self.record.moves.clone())
    }

    fn last_move(&self) -> Result<Option<MoveRecord>, DomainError> {
        Ok(self.record.moves.last().cloned())
    }

    fn move_count(&self) -> Result<u32, DomainError> {
        Ok(self.record.moves.len() as u32)
    }

    fn tableau(&self) -> Result<Tableau, DomainError> {
        Ok(self.record.tableau.clone())
    }
}

#[derive(Default)]
pub struct InMemoryGameStore {
    games: DashMap<GameId, Arc<Mutex<GameRecord>>>,
    next_id: AtomicU64,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn record(&self, game_id: GameId) -> Result<Arc<Mutex<GameRecord>>, DomainError> {
        // Clone the Arc so the map shard lock is released before the game lock is taken.
        self.games
            .get(&game_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Game, format!("game {game_id} not found"))
            })
    }
}

impl GameStore for InMemoryGameStore {
    fn insert_game(
        &self,
        mut session: GameSession,
        tableau: Tableau,
    ) -> Result<GameSession, DomainError> {
        tableau.verify_closure()?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        session.id = id;
        let record = GameRecord {
            session: session.clone(),
            tableau,
            moves: Vec::new(),
        };
        self.games.insert(id, Arc::new(Mutex::new(record)));
        debug!(game_id = id, "Inserted game");
        Ok(session)
    }

    fn with_txn<R, E, F>(&self, game_id: GameId, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut dyn GameTxn) -> Result<R, E>,
        E: From<DomainError>,
    {
        let record = self.record(game_id)?;
        let mut guard = record.lock();
        let mut working = guard.clone();
        let out = f(&mut MemoryTxn {
            record: &mut working,
        })?;
        if let Err(e) = working.tableau.verify_closure() {
            error!(game_id, error = %e, "Refusing to commit a broken tableau");
            return Err(e.into());
        }
        *guard = working;
        Ok(out)
    }

    fn with_read<R, E, F>(&self, game_id: GameId, f: F) -> Result<R, E>
    where
        F: FnOnce(&dyn GameTxn) -> Result<R, E>,
        E: From<DomainError>,
    {
        let record = self.record(game_id)?;
        let mut guard = record.lock();
        f(&MemoryTxn {
            record: &mut guard,
        })
    }

    fn list_sessions(&self) -> Result<Vec<GameSession>, DomainError> {
        let records: Vec<Arc<Mutex<GameRecord>>> = self
            .games
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        let mut sessions: Vec<GameSession> = records
            .iter()
            .map(|r| r.lock().session.clone())
            .collect();
        sessions.sort_by_key(|s| s.id);
        Ok(sessions)
    }
}
