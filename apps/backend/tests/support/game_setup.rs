//! Game setup helpers for integration tests.
//!
//! Games are inserted directly into an in-memory store so scenarios can
//! start from a hand-arranged tableau instead of a shuffled deal.

use std::sync::Arc;

use xeri_backend::ai::AiConfig;
use xeri_backend::domain::fixtures::TableauBuilder;
use xeri_backend::domain::{
    Difficulty, GameId, GameMode, GameSession, Participant, PlayerNo, SessionStatus, UserId,
};
use xeri_backend::repos::GameStore;
use xeri_backend::{AppError, EngineConfig, GameFlowService, InMemoryGameStore};
use xeri_test_support::unique_helpers::{unique_seed, unique_user_id};

pub type TestService = GameFlowService<InMemoryGameStore>;

pub fn service() -> TestService {
    service_with(EngineConfig::default())
}

pub fn service_with(config: EngineConfig) -> TestService {
    GameFlowService::new(Arc::new(InMemoryGameStore::new()), config)
}

/// Result of a game setup operation
pub struct GameSetup {
    pub game_id: GameId,
    /// Human user per seat; `None` for AI seats.
    pub users: [Option<UserId>; 2],
}

impl GameSetup {
    pub fn user(&self, player: PlayerNo) -> UserId {
        self.users[player.index()].unwrap_or_else(|| panic!("seat {player} is not human"))
    }
}

/// What sits in each seat of a directly inserted game.
#[derive(Debug, Clone)]
pub enum SeatKind {
    Human,
    Ai(Difficulty),
    /// AI seat with tier settings, e.g. `play_probability` for Easy.
    AiWith(Difficulty, AiConfig),
}

/// Insert an active game with `builder`'s tableau and `turn` to move.
pub fn insert_active_game(
    service: &TestService,
    builder: TableauBuilder,
    seats: [SeatKind; 2],
    turn: PlayerNo,
) -> Result<GameSetup, AppError> {
    let tableau = builder.build()?;
    let mut users = [None, None];
    let host = unique_user_id();
    let mode = match seats[1] {
        SeatKind::Human => GameMode::HumanHuman,
        SeatKind::Ai(_) | SeatKind::AiWith(..) => GameMode::HumanComputer,
    };
    let mut session = GameSession::new_waiting(host, mode, unique_seed());
    for (i, kind) in seats.into_iter().enumerate() {
        session.seats[i] = Some(match kind {
            SeatKind::Human => {
                let user_id = if i == 0 { host } else { unique_user_id() };
                users[i] = Some(user_id);
                Participant::Human { user_id }
            }
            SeatKind::Ai(difficulty) => {
                session.ai_difficulty = Some(difficulty);
                Participant::Ai {
                    difficulty,
                    config: AiConfig::default(),
                }
            }
            SeatKind::AiWith(difficulty, config) => {
                session.ai_difficulty = Some(difficulty);
                Participant::Ai { difficulty, config }
            }
        });
    }
    session.status = SessionStatus::Active;
    session.current_turn = Some(turn);

    let stored = service.store().insert_game(session, tableau)?;
    Ok(GameSetup {
        game_id: stored.id,
        users,
    })
}

/// Two humans, player 1 to move.
pub fn insert_human_game(
    service: &TestService,
    builder: TableauBuilder,
) -> Result<GameSetup, AppError> {
    insert_active_game(
        service,
        builder,
        [SeatKind::Human, SeatKind::Human],
        PlayerNo::One,
    )
}

/// A dealt game between two AIs, created through the normal lifecycle.
pub fn start_ai_game(
    service: &TestService,
    seat1: Difficulty,
    seat2: Difficulty,
    seed: u64,
) -> Result<GameId, AppError> {
    Ok(service.create_ai_match(seat1, seat2, Some(seed))?.id)
}
