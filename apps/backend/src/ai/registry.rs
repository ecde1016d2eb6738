//! How to register an AI tier
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add an `AiFactory` entry with a stable `name`, `version` and `difficulty`.
//! 3) Keep constructors free of side effects; seeding comes from `AiConfig`.

use super::config::AiConfig;
use super::easy::EasyPlayer;
use super::hard::HardPlayer;
use super::medium::MediumPlayer;
use super::AiPlayer;
use crate::domain::Difficulty;

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub difficulty: Difficulty,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: EasyPlayer::NAME,
        version: EasyPlayer::VERSION,
        difficulty: Difficulty::Easy,
        make: make_easy,
    },
    AiFactory {
        name: MediumPlayer::NAME,
        version: MediumPlayer::VERSION,
        difficulty: Difficulty::Medium,
        make: make_medium,
    },
    AiFactory {
        name: HardPlayer::NAME,
        version: HardPlayer::VERSION,
        difficulty: Difficulty::Hard,
        make: make_hard,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

pub fn by_difficulty(difficulty: Difficulty) -> &'static AiFactory {
    match difficulty {
        Difficulty::Easy => &AI_FACTORIES[0],
        Difficulty::Medium => &AI_FACTORIES[1],
        Difficulty::Hard => &AI_FACTORIES[2],
    }
}

/// Build the AI for a difficulty.
pub fn create_ai(difficulty: Difficulty, config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync> {
    (by_difficulty(difficulty).make)(config)
}

fn make_easy(config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(EasyPlayer::new(config))
}

fn make_medium(_config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(MediumPlayer::new())
}

fn make_hard(_config: &AiConfig) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(HardPlayer::new())
}
