use std::env;
use std::str::FromStr;

use crate::domain::dealing::validate_hand_size;
use crate::domain::{ClaimPolicy, Difficulty};
use crate::error::AppError;

pub const DEFAULT_HAND_SIZE: u8 = 6;
pub const DEFAULT_AI_MAX_RETRIES: u32 = 3;
pub const DEFAULT_MAX_AI_TURNS: u32 = 200;

/// Engine tunables, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Cards dealt to each player.
    pub hand_size: u8,
    pub claim_policy: ClaimPolicy,
    /// Difficulty used when a human-computer game does not name one.
    pub default_difficulty: Difficulty,
    /// Attempts per AI turn before the error is surfaced.
    pub ai_max_retries: u32,
    /// Upper bound on consecutive AI turns processed in one call.
    pub max_ai_turns: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            claim_policy: ClaimPolicy::Lenient,
            default_difficulty: Difficulty::Medium,
            ai_max_retries: DEFAULT_AI_MAX_RETRIES,
            max_ai_turns: DEFAULT_MAX_AI_TURNS,
        }
    }
}

impl EngineConfig {
    /// Build from `XERI_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let hand_size = parse_var("XERI_HAND_SIZE", defaults.hand_size)?;
        validate_hand_size(hand_size).map_err(|e| AppError::config(e.to_string()))?;

        let claim_policy = match optional_var("XERI_CLAIM_POLICY") {
            None => defaults.claim_policy,
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "lenient" => ClaimPolicy::Lenient,
                "strict" => ClaimPolicy::Strict,
                other => {
                    return Err(AppError::config(format!(
                        "XERI_CLAIM_POLICY must be 'lenient' or 'strict', got '{other}'"
                    )))
                }
            },
        };

        let default_difficulty = match optional_var("XERI_DEFAULT_DIFFICULTY") {
            None => defaults.default_difficulty,
            Some(v) => Difficulty::from_str(&v).map_err(|_| {
                AppError::config(format!(
                    "XERI_DEFAULT_DIFFICULTY must be easy, medium or hard, got '{v}'"
                ))
            })?,
        };

        let ai_max_retries = parse_var("XERI_AI_MAX_RETRIES", defaults.ai_max_retries)?;
        if ai_max_retries == 0 {
            return Err(AppError::config("XERI_AI_MAX_RETRIES must be at least 1"));
        }
        let max_ai_turns = parse_var("XERI_MAX_AI_TURNS", defaults.max_ai_turns)?;
        if max_ai_turns == 0 {
            return Err(AppError::config("XERI_MAX_AI_TURNS must be at least 1"));
        }

        Ok(Self {
            hand_size,
            claim_policy,
            default_difficulty,
            ai_max_retries,
            max_ai_turns,
        })
    }
}

/// Unset or blank variables count as absent.
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match optional_var(name) {
        None => Ok(default),
        Some(v) => v
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{name} has invalid value '{v}'"))),
    }
}
