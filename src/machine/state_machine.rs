//! State machine driven by a transition table.

use crate::builder::BuildError;
use crate::config::MachineConfig;
use crate::core::{Input, State, StateHistory, StateTransition};
use crate::machine::error::StepError;
use crate::table::{Handler, HandlerError, Transition, TransitionRegistry};
use chrono::Utc;
use std::fmt::{self, Debug, Display};
use tracing::debug;

/// Deterministic finite state machine.
///
/// Holds the current state and exclusively owns its transition table.
/// The state only ever changes through [`step`](Self::step), and only when
/// the input is registered for the current state and its handler (if any)
/// succeeds.
///
/// `step` takes `&mut self`; drivers on several threads must serialize
/// access themselves, for example by giving each worker its own machine.
pub struct StateMachine<S, I, E = HandlerError> {
    current: S,
    registry: TransitionRegistry<S, I, E>,
    history: StateHistory<S, I>,
    config: MachineConfig,
}

impl<S: State, I: Input, E: Debug + Display> StateMachine<S, I, E> {
    /// Create an empty machine in `initial`, ready for fluent registration
    /// with [`on`](Self::on) and [`on_with`](Self::on_with).
    pub fn new(initial: S) -> Self {
        Self::with_config(initial, MachineConfig::default())
    }

    pub fn with_config(initial: S, config: MachineConfig) -> Self {
        Self {
            current: initial,
            registry: TransitionRegistry::new(),
            history: StateHistory::with_policy(config.history),
            config,
        }
    }

    /// Build a machine from a whole table.
    ///
    /// The initial state is the `current` state of the first entry. Fails
    /// with [`BuildError::EmptyTable`] for an empty table and with the
    /// first [`BuildError::Conflict`] encountered, in which case nothing
    /// is built.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_table::{StateMachine, Transition};
    ///
    /// let machine: StateMachine<&str, &str> = StateMachine::from_transitions(vec![
    ///     Transition::new("coin", "locked", "unlocked"),
    ///     Transition::new("push", "unlocked", "locked"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(machine.current_state(), &"locked");
    /// ```
    pub fn from_transitions<T>(transitions: T) -> Result<Self, BuildError<S, I>>
    where
        T: IntoIterator<Item = Transition<S, I, E>>,
    {
        Self::from_table(None, transitions, MachineConfig::default())
    }

    /// Build a machine from a whole table, starting in `initial` regardless
    /// of the table's order. An empty table is still rejected.
    pub fn with_initial<T>(initial: S, transitions: T) -> Result<Self, BuildError<S, I>>
    where
        T: IntoIterator<Item = Transition<S, I, E>>,
    {
        Self::from_table(Some(initial), transitions, MachineConfig::default())
    }

    pub(crate) fn from_table<T>(
        initial: Option<S>,
        transitions: T,
        config: MachineConfig,
    ) -> Result<Self, BuildError<S, I>>
    where
        T: IntoIterator<Item = Transition<S, I, E>>,
    {
        let mut transitions = transitions.into_iter().peekable();
        let initial = match (initial, transitions.peek()) {
            (_, None) => return Err(BuildError::EmptyTable),
            (Some(initial), Some(_)) => initial,
            (None, Some(first)) => first.current.clone(),
        };

        let mut machine = Self::with_config(initial, config);
        for transition in transitions {
            machine.registry.insert(transition)?;
        }

        debug!(
            machine = %machine.config.name,
            initial = ?machine.current,
            transitions = machine.registry.len(),
            "built state machine"
        );
        Ok(machine)
    }

    /// Register a transition without a handler and hand the machine back.
    ///
    /// A conflicting registration consumes the machine and returns the
    /// conflict; whether that is fatal is the caller's decision.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_table::{BuildError, StateMachine};
    ///
    /// # fn main() -> Result<(), BuildError<u8, char>> {
    /// let mut machine: StateMachine<u8, char> = StateMachine::new(0)
    ///     .on('a', 0, 1)?
    ///     .on('b', 1, 0)?;
    ///
    /// machine.step('a').unwrap();
    /// assert_eq!(machine.current_state(), &1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn on(self, input: I, current: S, next: S) -> Result<Self, BuildError<S, I>> {
        self.register(input, current, next, None)
    }

    /// Register a transition whose handler runs before the state changes.
    pub fn on_with<F>(
        self,
        input: I,
        current: S,
        next: S,
        handler: F,
    ) -> Result<Self, BuildError<S, I>>
    where
        F: FnMut() -> Result<(), E> + Send + 'static,
    {
        self.register(input, current, next, Some(Box::new(handler)))
    }

    fn register(
        mut self,
        input: I,
        current: S,
        next: S,
        handler: Option<Handler<E>>,
    ) -> Result<Self, BuildError<S, I>> {
        self.registry.register(input, current, next, handler)?;
        Ok(self)
    }

    /// Offer `input` to the machine.
    ///
    /// Looks up `(input, current)`, runs the entry's handler if one is
    /// attached, then moves to the entry's next state. An unregistered
    /// pair or a failing handler leaves the state untouched.
    pub fn step(&mut self, input: I) -> Result<(), StepError<S, I, E>> {
        let Some(target) = self.registry.lookup_mut(&input, &self.current) else {
            debug!(
                machine = %self.config.name,
                input = ?input,
                current = ?self.current,
                "unexpected input"
            );
            return Err(StepError::UnexpectedInput {
                input,
                current: self.current.clone(),
            });
        };

        if let Some(handler) = target.handler.as_mut() {
            if let Err(err) = handler() {
                debug!(
                    machine = %self.config.name,
                    input = ?input,
                    current = ?self.current,
                    error = %err,
                    "transition handler failed"
                );
                return Err(StepError::Handler(err));
            }
        }

        let next = target.next.clone();
        let from = std::mem::replace(&mut self.current, next);
        debug!(
            machine = %self.config.name,
            input = ?input,
            from = ?from,
            to = ?self.current,
            "transition applied"
        );

        if self.history.is_enabled() {
            self.history.record(StateTransition {
                from,
                input,
                to: self.current.clone(),
                timestamp: Utc::now(),
            });
        }
        Ok(())
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Whether [`step`](Self::step) would find an entry for `input` now.
    pub fn can(&self, input: &I) -> bool {
        self.registry.contains(input, &self.current)
    }

    /// Inputs legal in the current state, in no particular order.
    pub fn available_inputs(&self) -> impl Iterator<Item = &I> + '_ {
        self.registry.accepted_inputs(&self.current)
    }

    pub fn registry(&self) -> &TransitionRegistry<S, I, E> {
        &self.registry
    }

    pub fn history(&self) -> &StateHistory<S, I> {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}

impl<S: Debug, I: Debug, E> Debug for StateMachine<S, I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.config.name)
            .field("current", &self.current)
            .field("transitions", &self.registry)
            .finish()
    }
}
