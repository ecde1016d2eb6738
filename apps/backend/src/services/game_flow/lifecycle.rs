use tracing::{debug, info};

use super::mutation::GameFlowMutationResult;
use super::queries::seat_for;
use crate::ai::AiConfig;
use crate::domain::dealing::{deal_plan, validate_hand_size};
use crate::domain::game_transition::GameTransition;
use crate::domain::scoring::GameOutcome;
use crate::domain::{
    shuffled_deck, Difficulty, GameId, GameMode, GameSession, Participant, PlayerNo,
    SessionStatus, Tableau, UserId, Zone,
};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::{GameStore, GameTxn};
use crate::services::game_flow::GameFlowService;
use crate::AppError;

/// Host recorded for games no human opened.
pub const SYSTEM_HOST: UserId = 0;

impl<S: GameStore> GameFlowService<S> {
    /// Open a new game hosted by `host` in seat 1.
    ///
    /// Human-vs-computer games start immediately with the AI in seat 2.
    /// Without a seed one is drawn from the thread RNG.
    pub fn create_game(
        &self,
        host: UserId,
        mode: GameMode,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
    ) -> Result<GameSession, AppError> {
        validate_hand_size(self.config.hand_size)?;
        self.ensure_not_in_game(host, None)?;

        let seed = seed.unwrap_or_else(rand::random);
        let session = GameSession::new_waiting(host, mode, seed);
        let stored = self
            .store
            .insert_game(session, Tableau::undealt(shuffled_deck(seed)))?;
        info!(game_id = stored.id, host, mode = ?mode, seed, "Game created");

        match mode {
            GameMode::HumanHuman => Ok(stored),
            GameMode::HumanComputer => {
                let difficulty = difficulty.unwrap_or(self.config.default_difficulty);
                Ok(self.attach_ai(stored.id, difficulty)?.session)
            }
        }
    }

    /// Start a game between two AIs with no human seated, as batch simulations run them.
    pub fn create_ai_match(
        &self,
        seat1: Difficulty,
        seat2: Difficulty,
        seed: Option<u64>,
    ) -> Result<GameSession, AppError> {
        validate_hand_size(self.config.hand_size)?;
        let seed = seed.unwrap_or_else(rand::random);
        let mut session = GameSession::new_waiting(SYSTEM_HOST, GameMode::HumanComputer, seed);
        session.seats[PlayerNo::One.index()] = Some(Participant::Ai {
            difficulty: seat1,
            config: AiConfig::default(),
        });
        let stored = self
            .store
            .insert_game(session, Tableau::undealt(shuffled_deck(seed)))?;
        info!(
            game_id = stored.id,
            seat1 = %seat1,
            seat2 = %seat2,
            seed,
            "AI match created"
        );
        Ok(self.attach_ai(stored.id, seat2)?.session)
    }

    /// Seat `user` as player 2 and deal.
    pub fn join_game(
        &self,
        game_id: GameId,
        user: UserId,
    ) -> Result<GameFlowMutationResult<PlayerNo>, AppError> {
        self.ensure_not_in_game(user, Some(game_id))?;
        let hand_size = self.config.hand_size;

        self.run_mutation(game_id, None, |txn, session| {
            if session.mode != GameMode::HumanHuman || session.seat_of(user).is_some() {
                return Err(DomainError::conflict(
                    ConflictKind::GameNotJoinable,
                    format!("user {user} cannot join game {game_id}"),
                )
                .into());
            }
            ensure_seat_two_open(session)?;

            session.seats[PlayerNo::Two.index()] = Some(Participant::Human { user_id: user });
            start_game(txn, session, hand_size)?;
            info!(game_id, user, "Player joined");
            Ok((PlayerNo::Two, vec![GameTransition::PlayerJoined { user_id: user }]))
        })
    }

    /// Seat an AI of `difficulty` as player 2 and deal.
    pub fn attach_ai(
        &self,
        game_id: GameId,
        difficulty: Difficulty,
    ) -> Result<GameFlowMutationResult<PlayerNo>, AppError> {
        self.attach_ai_with_config(game_id, difficulty, AiConfig::default())
    }

    pub fn attach_ai_with_config(
        &self,
        game_id: GameId,
        difficulty: Difficulty,
        config: AiConfig,
    ) -> Result<GameFlowMutationResult<PlayerNo>, AppError> {
        let hand_size = self.config.hand_size;
        self.run_mutation(game_id, None, |txn, session| {
            ensure_seat_two_open(session)?;
            session.seats[PlayerNo::Two.index()] = Some(Participant::Ai { difficulty, config });
            session.ai_difficulty = Some(difficulty);
            start_game(txn, session, hand_size)?;
            info!(game_id, difficulty = %difficulty, "AI attached");
            Ok((PlayerNo::Two, Vec::new()))
        })
    }

    /// Leave a waiting or active game. The game is abandoned with no winner.
    pub fn leave_game(
        &self,
        game_id: GameId,
        user: UserId,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation(game_id, None, |_txn, session| {
            let seat = seat_for(session, user)?;
            ensure_open(session)?;
            session.status = SessionStatus::Abandoned;
            session.current_turn = None;
            info!(game_id, user, seat = seat.number(), "Player left");
            Ok(((), vec![GameTransition::PlayerLeft { user_id: user }]))
        })
    }

    /// Concede an active game. The opponent is recorded as the winner.
    pub fn surrender(
        &self,
        game_id: GameId,
        user: UserId,
    ) -> Result<GameFlowMutationResult<GameOutcome>, AppError> {
        self.run_mutation(game_id, None, |_txn, session| {
            let seat = seat_for(session, user)?;
            ensure_open(session)?;
            if session.status == SessionStatus::Waiting {
                return Err(DomainError::validation(
                    ValidationKind::GameNotActive,
                    format!("game {game_id} has not started"),
                )
                .into());
            }
            let outcome = GameOutcome::Winner(seat.other());
            session.status = SessionStatus::Abandoned;
            session.current_turn = None;
            session.outcome = Some(outcome);
            info!(game_id, user, seat = seat.number(), "Player surrendered");
            Ok((outcome, vec![GameTransition::PlayerLeft { user_id: user }]))
        })
    }

    /// Waiting human-vs-human games `user` could join.
    pub fn available_games(&self, user: UserId) -> Result<Vec<GameSession>, AppError> {
        let games: Vec<GameSession> = self
            .store
            .list_sessions()?
            .into_iter()
            .filter(|s| {
                s.status == SessionStatus::Waiting
                    && s.mode == GameMode::HumanHuman
                    && s.seats[PlayerNo::Two.index()].is_none()
                    && s.seat_of(user).is_none()
            })
            .collect();
        debug!(user, count = games.len(), "Listed available games");
        Ok(games)
    }

    /// A user may hold at most one open game. `joining` is excluded from the check.
    fn ensure_not_in_game(&self, user: UserId, joining: Option<GameId>) -> Result<(), AppError> {
        let busy = self.store.list_sessions()?.into_iter().find(|s| {
            s.status.is_open() && Some(s.id) != joining && s.seat_of(user).is_some()
        });
        match busy {
            Some(existing) => Err(DomainError::conflict(
                ConflictKind::AlreadyInGame,
                format!("user {user} already has open game {}", existing.id),
            )
            .into()),
            None => Ok(()),
        }
    }
}

fn ensure_seat_two_open(session: &GameSession) -> Result<(), DomainError> {
    if session.status != SessionStatus::Waiting {
        return Err(DomainError::conflict(
            ConflictKind::GameNotJoinable,
            format!("game {} is {:?}", session.id, session.status),
        ));
    }
    if session.participant(PlayerNo::Two).is_some() {
        return Err(DomainError::conflict(
            ConflictKind::SeatTaken,
            format!("seat 2 of game {} is taken", session.id),
        ));
    }
    Ok(())
}

fn ensure_open(session: &GameSession) -> Result<(), DomainError> {
    if session.status.is_open() {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::GameAlreadyFinished,
            format!("game {} is {:?}", session.id, session.status),
        ))
    }
}

/// Deal from the top of the stock and hand the first turn to player 1.
fn start_game(
    txn: &mut dyn GameTxn,
    session: &mut GameSession,
    hand_size: u8,
) -> Result<(), DomainError> {
    let stock = txn.zone_contents(Zone::Stock)?;
    let plan = deal_plan(&stock, hand_size)?;
    for (player, cards) in PlayerNo::BOTH.into_iter().zip(plan) {
        txn.move_cards(&cards, Zone::Stock, Zone::Hand(player))?;
    }
    session.status = SessionStatus::Active;
    session.current_turn = Some(PlayerNo::One);
    debug!(game_id = session.id, hand_size, "Dealt opening hands");
    Ok(())
}
