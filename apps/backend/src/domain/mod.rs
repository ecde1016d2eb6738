//! Domain layer: pure game logic types and helpers.

pub mod capture;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod fixtures;
pub mod game_transition;
pub mod moves;
pub mod player_view;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tableau;
pub mod zones;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_capture;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use capture::{is_xeri, resolve, ClaimPolicy, MoveType, Resolution};
pub use cards_logic::{deck, same_rank};
pub use cards_types::{Card, CardId, Rank, Suit};
pub use dealing::{deal, shuffled_deck};
pub use moves::{MoveAction, MoveRecord, NewMove};
pub use player_view::{Candidate, PlayerView, ValidMoves};
pub use scoring::{GameOutcome, PlayerStats};
pub use state::{Difficulty, GameId, GameMode, GameSession, Participant, SessionStatus, UserId};
pub use tableau::Tableau;
pub use zones::{PlayerNo, Zone};
