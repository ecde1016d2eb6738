//! RNG seed derivation for deterministic game behavior.
//!
//! Every random choice in a game derives from the game's base seed, so a
//! game replays identically given the same seed and the same human inputs.

/// Seed for the deck shuffle.
pub fn derive_dealing_seed(game_seed: u64) -> u64 {
    game_seed ^ 0xD1CE_D1CE_D1CE_D1CE
}

/// Seed for one AI decision.
///
/// Unique per (game, seat, move number), so an AI does not repeat the same
/// random draw every turn while staying reproducible.
pub fn derive_ai_seed(game_seed: u64, seat: u8, move_number: u32) -> u64 {
    game_seed
        .wrapping_add(u64::from(move_number).wrapping_mul(10_000))
        .wrapping_add(u64::from(seat).wrapping_mul(100))
        .wrapping_add(1)
}
