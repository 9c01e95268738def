//! Transition history tracking.
//!
//! Records every applied transition, oldest first, subject to the
//! [`HistoryPolicy`] the machine was configured with.

use crate::config::HistoryPolicy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "locked",
///     input: "coin",
///     to: "unlocked",
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "unlocked");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, I> {
    /// The state being transitioned from
    pub from: S,
    /// The input that triggered the transition
    pub input: I,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// A bounded history keeps only the most recent transitions and drops the
/// oldest once full. A disabled history never stores anything.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::unbounded();
///
/// history.record(StateTransition {
///     from: 'a',
///     input: 1,
///     to: 'b',
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: 'b',
///     input: 2,
///     to: 'c',
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![&'a', &'b', &'c']);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, I> {
    transitions: VecDeque<StateTransition<S, I>>,
    capacity: Option<usize>,
}

impl<S, I> Default for StateHistory<S, I> {
    fn default() -> Self {
        Self::disabled()
    }
}

impl<S, I> StateHistory<S, I> {
    /// History that never records.
    pub fn disabled() -> Self {
        Self::bounded(0)
    }

    /// History that keeps at most `capacity` transitions.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    /// History that keeps every transition.
    pub fn unbounded() -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: None,
        }
    }

    pub fn with_policy(policy: HistoryPolicy) -> Self {
        match policy {
            HistoryPolicy::Disabled => Self::disabled(),
            HistoryPolicy::Bounded(capacity) => Self::bounded(capacity),
            HistoryPolicy::Unbounded => Self::unbounded(),
        }
    }

    /// Whether this history stores anything at all.
    pub fn is_enabled(&self) -> bool {
        self.capacity != Some(0)
    }

    /// Append a transition, evicting the oldest one if the history is full.
    pub fn record(&mut self, transition: StateTransition<S, I>) {
        match self.capacity {
            Some(0) => {}
            Some(capacity) => {
                if self.transitions.len() == capacity {
                    self.transitions.pop_front();
                }
                self.transitions.push_back(transition);
            }
            None => self.transitions.push_back(transition),
        }
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Recorded transitions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &StateTransition<S, I>> {
        self.transitions.iter()
    }

    /// The most recently applied transition.
    pub fn last(&self) -> Option<&StateTransition<S, I>> {
        self.transitions.back()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition, then the
    /// `to` state of each transition in order. Empty when nothing is recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the oldest and newest retained transitions.
    ///
    /// Returns `None` if nothing is recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Drop every recorded transition, keeping the capacity.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
