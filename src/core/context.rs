//! Per-hook context handed to states.

use std::collections::VecDeque;

/// What a state sees while one of its hooks runs.
///
/// The context lends the machine's shared data for the duration of the
/// hook and collects transition requests. Requests are not acted on while
/// the hook is running; the machine processes them in order once the hook
/// (and any transition in flight) has returned.
///
/// # Example
///
/// ```rust
/// use framestate::{Context, Key, State};
///
/// struct Menu;
///
/// impl State<u32> for Menu {
///     fn name(&self) -> &str {
///         "menu"
///     }
///
///     fn key_pressed(&mut self, ctx: &mut Context<'_, u32>, key: Key) {
///         if key == Key::from(' ') {
///             *ctx.shared_mut() += 1;
///             ctx.change_state("playing");
///         }
///     }
/// }
/// ```
pub struct Context<'a, D> {
    shared: &'a mut D,
    requests: &'a mut VecDeque<String>,
    current: Option<&'a str>,
}

impl<'a, D> Context<'a, D> {
    pub(crate) fn new(
        shared: &'a mut D,
        requests: &'a mut VecDeque<String>,
        current: Option<&'a str>,
    ) -> Self {
        Self {
            shared,
            requests,
            current,
        }
    }

    pub fn shared(&self) -> &D {
        self.shared
    }

    pub fn shared_mut(&mut self) -> &mut D {
        self.shared
    }

    /// Name of the machine's current state when the hook was invoked.
    ///
    /// During `enter` this is already the entering state; during `exit` it
    /// is still the leaving one. `None` only inside `setup` before the
    /// first transition.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current
    }

    /// Ask the machine to change to the state called `name`.
    ///
    /// Several requests from one hook are honored in the order made.
    pub fn change_state(&mut self, name: impl Into<String>) {
        self.requests.push_back(name.into());
    }

    /// Number of requests queued and not yet processed.
    pub fn pending_requests(&self) -> usize {
        self.requests.len()
    }
}
