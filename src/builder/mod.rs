//! Construction API for state machines.
//!
//! Three front-ends share one registry and one set of rules:
//! - [`StateMachine::from_transitions`](crate::StateMachine::from_transitions)
//!   ingests a whole table at once
//! - [`StateMachine::on`](crate::StateMachine::on) registers one entry at a time
//! - [`StateMachineBuilder`] collects entries and checks them in `build()`
//!
//! All of them report problems as [`BuildError`].

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
