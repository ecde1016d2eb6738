//! Process-wide tracing setup for binaries that embed the engine.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    /// Human-readable lines
    Pretty,
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `default_filter`.
///
/// Fails with a config error when the filter does not parse or a subscriber
/// is already installed.
pub fn init_tracing(default_filter: &str, format: LogFormat) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| AppError::config(format!("invalid log filter {default_filter:?}: {e}")))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(false).with_ansi(false))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
    };
    installed.map_err(|e| AppError::config(format!("tracing already initialized: {e}")))
}
