//! Easy tier: a random hand card, played most of the time.

use parking_lot::Mutex;
use rand::prelude::*;

use super::config::AiConfig;
use super::trait_def::{draw_or_pass, AiDecision, AiError, AiPlayer};
use crate::domain::PlayerView;

pub const DEFAULT_PLAY_PROBABILITY: f64 = 0.7;

/// Picks a uniformly random hand card; plays it with `play_probability`,
/// otherwise draws (or passes when the stock is empty).
pub struct EasyPlayer {
    rng: Mutex<StdRng>,
    play_probability: f64,
}

impl EasyPlayer {
    pub const NAME: &'static str = "Easy";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(config: &AiConfig) -> Self {
        let rng = match config.seed() {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
            play_probability: config.probability("play_probability", DEFAULT_PLAY_PROBABILITY),
        }
    }
}

impl AiPlayer for EasyPlayer {
    fn choose_move(&self, view: &PlayerView) -> Result<AiDecision, AiError> {
        let candidates = view.candidates();
        let mut rng = self.rng.lock();
        let Some(choice) = candidates.choose(&mut *rng) else {
            return draw_or_pass(view);
        };
        if rng.random_bool(self.play_probability) {
            Ok(AiDecision::Play {
                card: choice.card,
                claims: choice.claimable.clone(),
            })
        } else {
            draw_or_pass(view)
        }
    }
}
