//! Name-keyed storage for the machine's states.

use crate::core::State;
use crate::error::MachineError;
use std::collections::HashMap;

/// Owns every registered state.
///
/// States live in registration order; the name index maps a name to its
/// slot. Names are unique, so the ordered name list and the index always
/// agree.
pub(crate) struct StateRegistry<D> {
    states: Vec<Box<dyn State<D>>>,
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl<D> StateRegistry<D> {
    pub(crate) fn new() -> Self {
        Self {
            states: Vec::new(),
            names: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Check that `name` can be registered.
    pub(crate) fn check_name(&self, name: &str) -> Result<(), MachineError> {
        if name.is_empty() {
            return Err(MachineError::EmptyStateName);
        }
        if self.index.contains_key(name) {
            return Err(MachineError::DuplicateState {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Store a state whose name already passed [`check_name`](Self::check_name).
    pub(crate) fn insert(&mut self, name: String, state: Box<dyn State<D>>) -> usize {
        let slot = self.states.len();
        self.states.push(state);
        self.index.insert(name.clone(), slot);
        self.names.push(name);
        slot
    }

    pub(crate) fn slot_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn name_at(&self, slot: usize) -> &str {
        &self.names[slot]
    }

    pub(crate) fn state(&self, slot: usize) -> &dyn State<D> {
        self.states[slot].as_ref()
    }

    pub(crate) fn state_mut(&mut self, slot: usize) -> &mut dyn State<D> {
        self.states[slot].as_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}
