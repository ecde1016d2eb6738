#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Xeri card game engine: rules, turn engine, storage seam and AI opponents.

pub mod adapters;
pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use adapters::InMemoryGameStore;
pub use config::EngineConfig;
pub use error::AppError;
pub use errors::ErrorCode;
pub use services::game_flow::GameFlowService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    xeri_test_support::logging::init();
}
