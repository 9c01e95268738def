//! The runtime half of the engine.
//!
//! A [`StateMachine`] owns its transition table and moves between states
//! one input at a time. Rejected inputs and failing handlers are reported
//! through [`StepError`] and never change the current state.

mod error;
mod state_machine;

pub use error::StepError;
pub use state_machine::StateMachine;
