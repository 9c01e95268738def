//! Per-machine configuration.
//!
//! Configuration never changes transition semantics; it only controls
//! how a machine identifies itself in logs and how much history it keeps.

use serde::{Deserialize, Serialize};

/// How many applied transitions a machine remembers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryPolicy {
    /// Keep nothing
    #[default]
    Disabled,

    /// Keep the most recent N transitions
    Bounded(usize),

    /// Keep every transition
    Unbounded,
}

/// Configuration for a [`StateMachine`](crate::StateMachine).
///
/// # Example
///
/// ```rust
/// use fsm_table::config::{HistoryPolicy, MachineConfig};
///
/// let config = MachineConfig::default()
///     .named("turnstile")
///     .with_history(HistoryPolicy::Bounded(16));
///
/// assert_eq!(config.name, "turnstile");
/// assert_eq!(config.history, HistoryPolicy::Bounded(16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Name attached to every log event the machine emits
    pub name: String,

    /// Transition history retention
    pub history: HistoryPolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: "fsm".to_string(),
            history: HistoryPolicy::Disabled,
        }
    }
}

impl MachineConfig {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_history(mut self, history: HistoryPolicy) -> Self {
        self.history = history;
        self
    }
}
