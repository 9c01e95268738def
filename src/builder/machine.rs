//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{Input, State};
use crate::machine::StateMachine;
use crate::table::{HandlerError, Transition};
use std::collections::HashSet;
use std::fmt::{Debug, Display};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder that collects transitions and validates them once in
/// [`build`](Self::build).
///
/// Unlike fluent registration on [`StateMachine`], adding transitions here
/// never fails; the whole table is checked at the end with the same rules
/// as [`StateMachine::from_transitions`].
pub struct StateMachineBuilder<S, I, E = HandlerError> {
    initial: Option<S>,
    transitions: Vec<Transition<S, I, E>>,
    config: MachineConfig,
}

impl<S: State, I: Input, E: Debug + Display> StateMachineBuilder<S, I, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            config: MachineConfig::default(),
        }
    }

    /// Set the initial state. Without it the first transition's `current`
    /// state is used.
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a transition without a handler.
    pub fn on(self, input: I, current: S, next: S) -> Self {
        self.add_transition(Transition::new(input, current, next))
    }

    /// Add a transition with a handler.
    pub fn on_with<F>(self, input: I, current: S, next: S, handler: F) -> Self
    where
        F: FnMut() -> Result<(), E> + Send + 'static,
    {
        self.add_transition(Transition::new(input, current, next).with_handler(handler))
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, I, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<T>(mut self, transitions: T) -> Self
    where
        T: IntoIterator<Item = Transition<S, I, E>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Check the collected table without building it.
    ///
    /// Reports every problem at once: an empty table, and one
    /// [`BuildError::Conflict`] for each entry that repeats an earlier
    /// `(input, current)` pair, in table order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_table::StateMachineBuilder;
    /// use stillwater::validation::Validation;
    ///
    /// let builder: StateMachineBuilder<u8, char> = StateMachineBuilder::new()
    ///     .on('a', 0, 1)
    ///     .on('a', 0, 2)
    ///     .on('a', 0, 3);
    ///
    /// match builder.validate() {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    ///     Validation::Success(_) => panic!("expected conflicts"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError<S, I>>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError<S, I>>>> = Vec::new();

        if self.transitions.is_empty() {
            checks.push(Validation::fail(BuildError::EmptyTable));
        }

        let mut seen = HashSet::new();
        for transition in &self.transitions {
            let check = if seen.insert((&transition.input, &transition.current)) {
                Validation::success(())
            } else {
                Validation::fail(BuildError::Conflict {
                    input: transition.input.clone(),
                    current: transition.current.clone(),
                    next: transition.next.clone(),
                })
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the state machine.
    /// Returns the empty-table error or the first conflict, in table order.
    pub fn build(self) -> Result<StateMachine<S, I, E>, BuildError<S, I>> {
        StateMachine::from_table(self.initial, self.transitions, self.config)
    }
}

impl<S: State, I: Input, E: Debug + Display> Default for StateMachineBuilder<S, I, E> {
    fn default() -> Self {
        Self::new()
    }
}
