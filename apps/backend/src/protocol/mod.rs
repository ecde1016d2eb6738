//! Wire shapes handed to callers.

pub mod envelope;
pub mod game_state;

pub use envelope::ApiEnvelope;
pub use game_state::GameStateResponse;
