//! Construction errors shared by every front-end.

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur while building a transition table.
///
/// Construction is all-or-nothing: when any of these is returned no
/// machine exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<S: Debug, I: Debug> {
    #[error("empty transitions table")]
    EmptyTable,

    /// A second entry was registered for an `(input, current)` pair.
    /// `next` is the target of the rejected entry.
    #[error("nondeterministic transition, input: {input:?}, current: {current:?}, next: {next:?}")]
    Conflict { input: I, current: S, next: S },
}

impl<S: Debug, I: Debug> BuildError<S, I> {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
