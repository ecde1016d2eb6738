//! Shared types for the simulator.

use clap::ValueEnum;
use xeri_backend::domain::Difficulty;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per game, written as games finish
    Jsonl,
    /// A single JSON array, written when the run ends
    Json,
}

/// AI tier for a seat.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AiTier {
    Easy,
    Medium,
    Hard,
}

impl From<AiTier> for Difficulty {
    fn from(tier: AiTier) -> Self {
        match tier {
            AiTier::Easy => Difficulty::Easy,
            AiTier::Medium => Difficulty::Medium,
            AiTier::Hard => Difficulty::Hard,
        }
    }
}
