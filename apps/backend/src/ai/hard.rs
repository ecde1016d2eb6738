//! Hard tier: Medium's rating with positional adjustments.

use super::evaluation::{best_by, hard_score, HARD_DRAW_THRESHOLD, HARD_SHORT_HAND};
use super::trait_def::{draw_or_pass, AiDecision, AiError, AiPlayer};
use crate::domain::PlayerView;

#[derive(Debug, Clone, Default)]
pub struct HardPlayer;

impl HardPlayer {
    pub const NAME: &'static str = "Hard";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl AiPlayer for HardPlayer {
    fn choose_move(&self, view: &PlayerView) -> Result<AiDecision, AiError> {
        let candidates = view.candidates();
        let hand_len = view.hand.len();
        let table_len = view.table.len();
        let Some((best, score)) = best_by(&candidates, |c| hard_score(c, hand_len, table_len))
        else {
            return draw_or_pass(view);
        };
        // Short hand: hold cards unless the play is clearly good.
        if hand_len <= HARD_SHORT_HAND && score < HARD_DRAW_THRESHOLD && view.can_draw() {
            return Ok(AiDecision::Draw);
        }
        Ok(AiDecision::Play {
            card: best.card,
            claims: best.claimable.clone(),
        })
    }
}
