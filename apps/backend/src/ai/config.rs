//! Per-seat AI configuration.
//!
//! Standard fields are typed; anything else is kept in `custom` for the tier
//! that wants it.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for AI players.
///
/// ```json
/// {"seed": 12345, "play_probability": 0.9}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed. When absent the game seed is used, so games stay replayable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Tier-specific fields.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Parse from optional JSON, falling back to an empty config on malformed input.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// A custom probability in `[0, 1]`, or `default` when absent or out of range.
    pub fn probability(&self, key: &str, default: f64) -> f64 {
        self.get_custom(key)
            .and_then(JsonValue::as_f64)
            .filter(|p| (0.0..=1.0).contains(p))
            .unwrap_or(default)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
