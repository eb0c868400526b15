//! Errors reported by the state machine.
//!
//! None of these are fatal. The machine is always left in a consistent
//! state and keeps running in whatever state it was in before the call.

use thiserror::Error;

/// Errors that can occur while registering states, changing state or
/// dispatching events.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("No state with name '{name}'. Make sure it was added to the state machine and that its name() matches")]
    StateNotFound { name: String },

    #[error("State machine {operation} called with no state set")]
    NoCurrentState { operation: &'static str },

    #[error("A state named '{name}' is already registered")]
    DuplicateState { name: String },

    #[error("State name must not be empty")]
    EmptyStateName,

    #[error("Transition chain exceeded {limit} queued requests")]
    TransitionLimit { limit: usize },
}

impl MachineError {
    /// Name of the state the error refers to, if any.
    pub fn state_name(&self) -> Option<&str> {
        match self {
            Self::StateNotFound { name } | Self::DuplicateState { name } => Some(name),
            _ => None,
        }
    }
}
