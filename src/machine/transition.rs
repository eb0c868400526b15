//! Transition controller.
//!
//! A transition runs `exit` on the outgoing state, moves the current
//! pointer, then runs `enter` on the incoming state. Requests made by
//! hooks while this happens are queued and honored afterwards, oldest
//! first, so every exit/enter pair completes before the next one starts.

use super::StateMachine;
use crate::core::{Context, TransitionRecord};
use crate::error::MachineError;
use chrono::Utc;
use tracing::{debug, error, trace};

/// Result of a transition request that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The target was already the current state; no hooks ran.
    Unchanged,

    /// The machine left `from` (if any) and entered `to`.
    Transitioned { from: Option<String>, to: String },
}

impl TransitionOutcome {
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

impl<D> StateMachine<D> {
    /// Change to the state called `name`.
    ///
    /// - Same name as the current state: no-op, returns
    ///   [`TransitionOutcome::Unchanged`].
    /// - Unknown name: logged, returns [`MachineError::StateNotFound`] and
    ///   leaves the machine where it was.
    /// - Otherwise the current state (if any) exits and the target enters.
    ///
    /// Queued requests, including those made by the exit and enter hooks,
    /// are processed before returning. If one of them fails, its error is
    /// returned even though this transition happened;
    /// [`current_state_name`](Self::current_state_name) tells where the
    /// machine ended up.
    pub fn change_state(&mut self, name: &str) -> Result<TransitionOutcome, MachineError> {
        let outcome = self.transition_to(name)?;
        self.process_requests()?;
        Ok(outcome)
    }

    /// Process queued transition requests in the order they were made.
    ///
    /// At most `max_chained_transitions` requests are honored per call; if
    /// more keep arriving the rest are discarded and
    /// [`MachineError::TransitionLimit`] is returned. Otherwise the first
    /// failed request's error is returned once the queue is empty.
    pub fn process_requests(&mut self) -> Result<(), MachineError> {
        let limit = self.config.max_chained_transitions;
        let mut processed = 0;
        let mut first_error = None;

        while let Some(name) = self.pending.pop_front() {
            if processed == limit {
                let discarded = self.pending.len() + 1;
                self.pending.clear();
                error!(
                    limit,
                    discarded, "Transition chain limit reached, discarding queued requests"
                );
                return Err(MachineError::TransitionLimit { limit });
            }
            processed += 1;

            if let Err(err) = self.transition_to(&name) {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// A single transition, without draining the queue.
    fn transition_to(&mut self, name: &str) -> Result<TransitionOutcome, MachineError> {
        if self.current.is_some() && name == self.current_name {
            trace!(state = name, "already in requested state");
            return Ok(TransitionOutcome::Unchanged);
        }

        let Some(next) = self.registry.slot_of(name) else {
            error!(
                state = name,
                "No state with name: {name}. Make sure you have added it to the state machine and that the state's name() matches"
            );
            return Err(MachineError::StateNotFound {
                name: name.to_string(),
            });
        };

        if self.current == Some(next) {
            return Ok(TransitionOutcome::Unchanged);
        }

        let from = match self.current {
            Some(prev) => {
                let state = self.registry.state_mut(prev);
                let current = Some(self.current_name.as_str());
                let mut ctx = Context::new(&mut self.shared, &mut self.pending, current);
                state.exit(&mut ctx);
                Some(std::mem::take(&mut self.current_name))
            }
            None => None,
        };

        self.current = Some(next);
        self.current_name = self.registry.name_at(next).to_string();

        debug!(from = ?from, to = %self.current_name, "changing state");
        self.history.record(TransitionRecord {
            from: from.clone(),
            to: self.current_name.clone(),
            timestamp: Utc::now(),
        });

        let state = self.registry.state_mut(next);
        let current = Some(self.current_name.as_str());
        let mut ctx = Context::new(&mut self.shared, &mut self.pending, current);
        state.enter(&mut ctx);

        Ok(TransitionOutcome::Transitioned {
            from,
            to: self.current_name.clone(),
        })
    }
}
