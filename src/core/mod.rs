//! Core types shared by the machine and its states.
//!
//! - The `State` trait and the per-hook `Context`
//! - Input payloads and host events
//! - Transition history

mod context;
mod event;
mod history;
mod state;

pub use context::Context;
pub use event::{EventCategory, HostEvent, Key, MouseButton, Touch};
pub use history::{TransitionHistory, TransitionRecord};
pub use state::State;
