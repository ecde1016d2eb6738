//! AI opponents.
//!
//! Three tiers share one interface: given the seat's [`PlayerView`](crate::domain::PlayerView),
//! return an [`AiDecision`]. Candidates come from the same capture resolver
//! the turn engine uses.

pub mod config;
mod easy;
pub mod evaluation;
mod hard;
mod medium;
pub mod registry;
mod trait_def;

#[cfg(test)]
mod tests_tiers;

pub use config::AiConfig;
pub use easy::EasyPlayer;
pub use hard::HardPlayer;
pub use medium::MediumPlayer;
pub use registry::{by_difficulty, create_ai, registered_ais, AiFactory};
pub use trait_def::{AiDecision, AiError, AiPlayer};
