//! fsm-table: a table-driven deterministic finite state machine
//!
//! A machine is a table of `(input, current) -> (next, handler)` entries plus
//! a current state. Offering an input either applies the matching entry,
//! running its handler first, or reports that the input is not legal in the
//! current state. The table is checked for determinism when it is built, so
//! driving the machine never has to choose between entries.
//!
//! # Core Concepts
//!
//! - **State / Input**: any `Clone + Eq + Hash + Debug` value
//! - **Handler**: a fallible side effect; its failure aborts the transition
//! - **Registry**: at most one entry per `(input, current)` pair
//! - **History**: optional record of applied transitions
//!
//! # Example
//!
//! ```rust
//! use fsm_table::{fsm_enum, StateMachine, StepError, Transition};
//!
//! fsm_enum! {
//!     enum Gate {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! fsm_enum! {
//!     enum Signal {
//!         Coin,
//!         Push,
//!     }
//! }
//!
//! let mut turnstile: StateMachine<Gate, Signal> = StateMachine::from_transitions(vec![
//!     Transition::new(Signal::Coin, Gate::Locked, Gate::Unlocked),
//!     Transition::new(Signal::Coin, Gate::Unlocked, Gate::Unlocked),
//!     Transition::new(Signal::Push, Gate::Unlocked, Gate::Locked),
//! ])
//! .unwrap();
//!
//! turnstile.step(Signal::Coin).unwrap();
//! assert_eq!(turnstile.current_state(), &Gate::Unlocked);
//!
//! turnstile.step(Signal::Push).unwrap();
//! let err = turnstile.step(Signal::Push).unwrap_err();
//! assert!(matches!(
//!     err,
//!     StepError::UnexpectedInput { input: Signal::Push, current: Gate::Locked }
//! ));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::config::{HistoryPolicy, MachineConfig};
pub use crate::core::{Input, State, StateHistory, StateTransition};
pub use crate::machine::{StateMachine, StepError};
pub use crate::table::{Handler, HandlerError, Transition, TransitionRegistry};
