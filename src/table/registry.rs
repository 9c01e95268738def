//! Transition registry: the deterministic `(input, current) -> target` table.

use crate::builder::BuildError;
use crate::core::{Input, State};
use crate::table::transition::{Handler, HandlerError, Transition};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Where a registered `(input, current)` pair leads.
pub struct Target<S, E = HandlerError> {
    pub(crate) next: S,
    pub(crate) handler: Option<Handler<E>>,
}

impl<S, E> Target<S, E> {
    pub fn next(&self) -> &S {
        &self.next
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }
}

impl<S: fmt::Debug, E> fmt::Debug for Target<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("next", &self.next)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

/// Append-only table of transitions keyed by input, then by current state.
///
/// At most one entry exists per `(input, current)` pair; a second
/// registration for the same pair is rejected with
/// [`BuildError::Conflict`] and leaves the table untouched.
///
/// # Example
///
/// ```rust
/// use fsm_table::{BuildError, TransitionRegistry};
///
/// let mut registry: TransitionRegistry<&str, &str> = TransitionRegistry::new();
/// registry.register("coin", "locked", "unlocked", None).unwrap();
///
/// let err = registry
///     .register("coin", "locked", "locked", None)
///     .unwrap_err();
/// assert_eq!(
///     err,
///     BuildError::Conflict { input: "coin", current: "locked", next: "locked" }
/// );
/// assert_eq!(registry.lookup(&"coin", &"locked").map(|t| *t.next()), Some("unlocked"));
/// ```
pub struct TransitionRegistry<S, I, E = HandlerError> {
    inputs: HashMap<I, HashMap<S, Target<S, E>>>,
    len: usize,
}

impl<S: State, I: Input, E> Default for TransitionRegistry<S, I, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Input, E> TransitionRegistry<S, I, E> {
    pub fn new() -> Self {
        Self {
            inputs: HashMap::new(),
            len: 0,
        }
    }

    /// Add one entry, rejecting a second entry for the same `(input, current)`.
    pub fn register(
        &mut self,
        input: I,
        current: S,
        next: S,
        handler: Option<Handler<E>>,
    ) -> Result<(), BuildError<S, I>> {
        let row = self.inputs.entry(input.clone()).or_default();
        match row.entry(current) {
            Entry::Occupied(slot) => {
                debug!(
                    input = ?input,
                    current = ?slot.key(),
                    next = ?next,
                    "rejected nondeterministic transition"
                );
                Err(BuildError::Conflict {
                    input,
                    current: slot.key().clone(),
                    next,
                })
            }
            Entry::Vacant(slot) => {
                trace!(
                    input = ?input,
                    current = ?slot.key(),
                    next = ?next,
                    handler = handler.is_some(),
                    "registered transition"
                );
                slot.insert(Target { next, handler });
                self.len += 1;
                Ok(())
            }
        }
    }

    /// Register a prepared [`Transition`].
    pub fn insert(&mut self, transition: Transition<S, I, E>) -> Result<(), BuildError<S, I>> {
        let Transition {
            input,
            current,
            next,
            handler,
        } = transition;
        self.register(input, current, next, handler)
    }

    /// Find the entry for `(input, current)`, if any.
    pub fn lookup(&self, input: &I, current: &S) -> Option<&Target<S, E>> {
        self.inputs.get(input)?.get(current)
    }

    pub(crate) fn lookup_mut(&mut self, input: &I, current: &S) -> Option<&mut Target<S, E>> {
        self.inputs.get_mut(input)?.get_mut(current)
    }

    pub fn contains(&self, input: &I, current: &S) -> bool {
        self.lookup(input, current).is_some()
    }

    /// Inputs with an entry for `current`, in no particular order.
    pub fn accepted_inputs<'a>(&'a self, current: &'a S) -> impl Iterator<Item = &'a I> + 'a {
        self.inputs
            .iter()
            .filter(move |(_, row)| row.contains_key(current))
            .map(|(input, _)| input)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: fmt::Debug, I: fmt::Debug, E> fmt::Debug for TransitionRegistry<S, I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.inputs.iter().flat_map(|(input, row)| {
                row.iter()
                    .map(move |(current, target)| ((input, current), &target.next))
            }))
            .finish()
    }
}
