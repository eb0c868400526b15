//! The state machine: registry, transitions, dispatch and shared data.
//!
//! A [`StateMachine`] owns a set of named states and one value of shared
//! data. Exactly one state is current at a time (none before the first
//! transition); frame and input events go to that state only.
//!
//! # Example
//!
//! ```rust
//! use framestate::{Context, StateMachine, State};
//!
//! struct Menu;
//! struct Playing;
//!
//! impl State<Vec<String>> for Menu {
//!     fn name(&self) -> &str {
//!         "menu"
//!     }
//! }
//!
//! impl State<Vec<String>> for Playing {
//!     fn name(&self) -> &str {
//!         "playing"
//!     }
//!
//!     fn enter(&mut self, ctx: &mut Context<'_, Vec<String>>) {
//!         ctx.shared_mut().push("started".to_string());
//!     }
//! }
//!
//! let mut machine = StateMachine::new(Vec::new());
//! machine.add_state(Menu).unwrap();
//! machine.add_state(Playing).unwrap();
//!
//! machine.change_state("menu").unwrap();
//! machine.change_state("playing").unwrap();
//!
//! assert_eq!(machine.current_state_name(), Some("playing"));
//! assert_eq!(machine.shared_data(), &vec!["started".to_string()]);
//! ```

mod dispatch;
mod registry;
mod subscription;
mod transition;

pub use subscription::{EventMask, InputProfile};
pub use transition::TransitionOutcome;

use crate::config::{ConfigError, MachineConfig};
use crate::core::{Context, State, TransitionHistory};
use crate::error::MachineError;
use registry::StateRegistry;
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// Finite state machine over named states sharing data of type `D`.
pub struct StateMachine<D> {
    // Declared before `shared` so states are dropped first.
    registry: StateRegistry<D>,
    current: Option<usize>,
    current_name: String,
    pending: VecDeque<String>,
    history: TransitionHistory,
    events: EventMask,
    config: MachineConfig,
    shared: D,
}

impl<D> StateMachine<D> {
    /// Create an empty machine owning `shared`, with default config.
    pub fn new(shared: D) -> Self {
        Self::from_parts(shared, MachineConfig::default())
    }

    /// Create an empty machine owning `shared`.
    /// Returns an error if `config` fails [`MachineConfig::validate`].
    pub fn with_config(shared: D, config: MachineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(shared, config))
    }

    fn from_parts(shared: D, config: MachineConfig) -> Self {
        Self {
            registry: StateRegistry::new(),
            current: None,
            current_name: String::new(),
            pending: VecDeque::new(),
            history: TransitionHistory::with_limit(config.history_limit),
            events: EventMask::none(),
            config,
            shared,
        }
    }

    /// Register a state.
    ///
    /// The state's `setup` hook runs once, with the shared data available,
    /// before the state is stored. A state whose name is empty or already
    /// taken is rejected and dropped without `setup` being called.
    ///
    /// Transition requests made from `setup` are queued and processed by
    /// the next [`change_state`](Self::change_state),
    /// [`process_requests`](Self::process_requests) or delivered event.
    pub fn add_state<S>(&mut self, state: S) -> Result<(), MachineError>
    where
        S: State<D> + 'static,
    {
        self.add_boxed_state(Box::new(state))
    }

    pub fn add_boxed_state(&mut self, mut state: Box<dyn State<D>>) -> Result<(), MachineError> {
        let name = state.name().to_string();
        self.registry.check_name(&name)?;

        let current = self.current.map(|_| self.current_name.as_str());
        let mut ctx = Context::new(&mut self.shared, &mut self.pending, current);
        state.setup(&mut ctx);

        debug!(state = %name, "registered state");
        self.registry.insert(name, state);
        Ok(())
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Names of all registered states, in registration order.
    pub fn state_names(&self) -> &[String] {
        self.registry.names()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    pub fn current_state(&self) -> Option<&dyn State<D>> {
        self.current.map(|slot| self.registry.state(slot))
    }

    pub fn current_state_mut(&mut self) -> Option<&mut dyn State<D>> {
        match self.current {
            Some(slot) => Some(self.registry.state_mut(slot)),
            None => None,
        }
    }

    /// Name of the current state, `None` before the first transition.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current.map(|_| self.current_name.as_str())
    }

    pub fn shared_data(&self) -> &D {
        &self.shared
    }

    pub fn shared_data_mut(&mut self) -> &mut D {
        &mut self.shared
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Number of transition requests waiting to be processed.
    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    /// Consume the machine, dropping every state and returning the shared
    /// data.
    pub fn into_shared_data(self) -> D {
        let Self {
            registry, shared, ..
        } = self;
        drop(registry);
        shared
    }
}

impl<D: Default> Default for StateMachine<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: fmt::Debug> fmt::Debug for StateMachine<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("states", &self.registry.names())
            .field("current", &self.current_state_name())
            .field("pending", &self.pending)
            .field("events", &self.events)
            .field("shared", &self.shared)
            .finish()
    }
}
