//! Build errors for the state machine builder.

use crate::config::ConfigError;
use crate::error::MachineError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states defined. Add at least one state with .state(..)")]
    NoStates,

    #[error("Initial state '{0}' was never added")]
    UnknownInitialState(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Machine(#[from] MachineError),
}
