//! Machine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on transition requests honored in one drain.
pub const DEFAULT_MAX_CHAINED_TRANSITIONS: usize = 32;

/// Default number of transitions kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse machine config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_chained_transitions must be at least 1")]
    ZeroChainLimit,
}

/// Tunables for a [`StateMachine`](crate::StateMachine).
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use framestate::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "history_limit": 8 }"#).unwrap();
/// assert_eq!(config.history_limit, 8);
/// assert_eq!(config.max_chained_transitions, 32);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Maximum number of queued transition requests processed after a
    /// single host call before the queue is discarded.
    pub max_chained_transitions: usize,

    /// Number of transitions kept in history. Zero disables recording.
    pub history_limit: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_chained_transitions: DEFAULT_MAX_CHAINED_TRANSITIONS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl MachineConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chained_transitions == 0 {
            return Err(ConfigError::ZeroChainLimit);
        }
        Ok(())
    }

    pub fn with_max_chained_transitions(mut self, limit: usize) -> Self {
        self.max_chained_transitions = limit;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
