//! Builder API for ergonomic state machine construction.
//!
//! ```
//! use framestate::builder::StateMachineBuilder;
//! use framestate::State;
//!
//! struct Title;
//!
//! impl State<()> for Title {
//!     fn name(&self) -> &str {
//!         "title"
//!     }
//! }
//!
//! let machine = StateMachineBuilder::new(())
//!     .state(Title)
//!     .initial("title")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(machine.current_state_name(), Some("title"));
//! ```

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
