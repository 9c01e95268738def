//! Core identifier and history types.
//!
//! This module contains the value types every other module builds on:
//! - State and input identifiers via the `State` and `Input` traits
//! - Transition history records

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{Input, State};
