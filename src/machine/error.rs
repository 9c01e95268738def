//! Errors returned while driving a machine.

use std::fmt::{Debug, Display};
use thiserror::Error;

/// Why a call to [`StateMachine::step`](crate::StateMachine::step) did not
/// advance the machine. In both cases the current state is unchanged.
#[derive(Debug, PartialEq, Error)]
pub enum StepError<S: Debug, I: Debug, E: Debug + Display> {
    /// No entry exists for `(input, current)`.
    #[error("unexpected transition, input: {input:?}, current: {current:?}")]
    UnexpectedInput { input: I, current: S },

    /// The transition's handler failed; carries its error as returned.
    #[error("transition handler failed: {0}")]
    Handler(E),
}

impl<S: Debug, I: Debug, E: Debug + Display> StepError<S, I, E> {
    pub fn is_unexpected_input(&self) -> bool {
        matches!(self, Self::UnexpectedInput { .. })
    }

    /// The handler's own error, if that is what failed.
    pub fn into_handler_error(self) -> Option<E> {
        match self {
            Self::Handler(err) => Some(err),
            Self::UnexpectedInput { .. } => None,
        }
    }
}
