//! Framestate: a named-state machine for frame-driven applications
//!
//! An application defines states such as "menu", "playing" or "paused",
//! registers them once, and forwards its per-frame update/draw calls and
//! input events to the machine. The machine routes each of them to the
//! current state only, runs exit/enter hooks on transitions, and owns one
//! value of shared data that every state can read and write.
//!
//! # Core Concepts
//!
//! - **State**: a named unit of behavior implementing the `State` trait
//! - **Context**: what a hook sees: the shared data and a way to request
//!   a transition
//! - **StateMachine**: registry, transition controller and dispatcher
//! - **History**: bounded record of transitions
//!
//! # Example
//!
//! ```rust
//! use framestate::{Context, Key, State, StateMachine};
//!
//! #[derive(Default)]
//! struct Game {
//!     frames: u32,
//! }
//!
//! struct Menu;
//! struct Playing;
//!
//! impl State<Game> for Menu {
//!     fn name(&self) -> &str {
//!         "menu"
//!     }
//!
//!     fn key_pressed(&mut self, ctx: &mut Context<'_, Game>, key: Key) {
//!         if key == Key::from(' ') {
//!             ctx.change_state("playing");
//!         }
//!     }
//! }
//!
//! impl State<Game> for Playing {
//!     fn name(&self) -> &str {
//!         "playing"
//!     }
//!
//!     fn update(&mut self, ctx: &mut Context<'_, Game>) {
//!         ctx.shared_mut().frames += 1;
//!     }
//! }
//!
//! let mut machine = StateMachine::new(Game::default());
//! machine.add_state(Menu).unwrap();
//! machine.add_state(Playing).unwrap();
//! machine.change_state("menu").unwrap();
//!
//! machine.key_pressed(Key::from(' ')).unwrap();
//! machine.update().unwrap();
//!
//! assert_eq!(machine.current_state_name(), Some("playing"));
//! assert_eq!(machine.shared_data().frames, 1);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use config::{ConfigError, MachineConfig};
pub use core::{
    Context, EventCategory, HostEvent, Key, MouseButton, State, Touch, TransitionHistory,
    TransitionRecord,
};
pub use error::MachineError;
pub use machine::{EventMask, InputProfile, StateMachine, TransitionOutcome};
