//! Adapters for external dependencies.

pub mod games_memory;

pub use games_memory::InMemoryGameStore;
