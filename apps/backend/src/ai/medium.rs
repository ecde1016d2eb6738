//! Medium tier: greedy on the move rating, drawing instead of weak plays.

use super::evaluation::{best_by, medium_score, MEDIUM_DRAW_THRESHOLD};
use super::trait_def::{draw_or_pass, AiDecision, AiError, AiPlayer};
use crate::domain::PlayerView;

/// Deterministic: same view, same decision.
#[derive(Debug, Clone, Default)]
pub struct MediumPlayer;

impl MediumPlayer {
    pub const NAME: &'static str = "Medium";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl AiPlayer for MediumPlayer {
    fn choose_move(&self, view: &PlayerView) -> Result<AiDecision, AiError> {
        let candidates = view.candidates();
        let Some((best, score)) = best_by(&candidates, medium_score) else {
            return draw_or_pass(view);
        };
        if score < MEDIUM_DRAW_THRESHOLD && view.can_draw() {
            return Ok(AiDecision::Draw);
        }
        Ok(AiDecision::Play {
            card: best.card,
            claims: best.claimable.clone(),
        })
    }
}
