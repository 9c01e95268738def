//! Transition table types.
//!
//! A [`TransitionRegistry`] owns the `(input, current) -> (next, handler)`
//! mapping and enforces that each pair is registered at most once.

mod registry;
mod transition;

pub use registry::{Target, TransitionRegistry};
pub use transition::{Handler, HandlerError, Transition};
