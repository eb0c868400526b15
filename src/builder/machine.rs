//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::State;
use crate::machine::{InputProfile, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// States are registered in the order they were added, so their `setup`
/// hooks run in that order during [`build`](Self::build).
pub struct StateMachineBuilder<D> {
    shared: D,
    config: MachineConfig,
    states: Vec<Box<dyn State<D>>>,
    initial: Option<String>,
    events: Option<InputProfile>,
}

impl<D> StateMachineBuilder<D> {
    /// Create a builder for a machine owning `shared`.
    pub fn new(shared: D) -> Self {
        Self {
            shared,
            config: MachineConfig::default(),
            states: Vec::new(),
            initial: None,
            events: None,
        }
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a state.
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<D> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Add several boxed states at once.
    pub fn states(mut self, states: Vec<Box<dyn State<D>>>) -> Self {
        self.states.extend(states);
        self
    }

    /// State to enter once every state is registered (optional).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Subscribe the built machine to host events for `profile`.
    pub fn enable_events(mut self, profile: InputProfile) -> Self {
        self.events = Some(profile);
        self
    }

    /// Build the state machine.
    /// Returns an error on invalid config, a rejected state or an initial
    /// state that was never added.
    pub fn build(self) -> Result<StateMachine<D>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut machine = StateMachine::with_config(self.shared, self.config)?;
        for state in self.states {
            machine.add_boxed_state(state)?;
        }

        if let Some(profile) = self.events {
            machine.enable_events(profile);
        }

        if let Some(initial) = self.initial {
            if !machine.has_state(&initial) {
                return Err(BuildError::UnknownInitialState(initial));
            }
            machine.change_state(&initial)?;
        }

        Ok(machine)
    }
}

impl<D: Default> Default for StateMachineBuilder<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}
