//! Identifier traits for machine states and inputs.
//!
//! The machine only ever compares and hashes these values, so both traits
//! are blanket-implemented for any type with the right capabilities.

use std::fmt::Debug;
use std::hash::Hash;

/// A label the machine can currently occupy.
///
/// Implemented automatically for every `Clone + Eq + Hash + Debug` type,
/// so integers, string slices and plain enums work without ceremony.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::State;
///
/// fn assert_state<S: State>(_: S) {}
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// assert_state(Door::Open);
/// assert_state(3u8);
/// assert_state("closed");
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}

/// An external event offered to the machine.
///
/// Same requirements as [`State`]; the two are kept distinct so signatures
/// say which role a type parameter plays.
pub trait Input: Clone + Eq + Hash + Debug {}

impl<T> Input for T where T: Clone + Eq + Hash + Debug {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Busy,
    }

    fn collect<S: State>(states: Vec<S>) -> HashSet<S> {
        states.into_iter().collect()
    }

    #[test]
    fn enums_are_states() {
        let set = collect(vec![TestState::Idle, TestState::Busy, TestState::Idle]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&TestState::Busy));
    }

    #[test]
    fn integers_are_states_and_inputs() {
        fn takes_both<S: State, I: Input>(s: S, i: I) -> (S, I) {
            (s, i)
        }

        assert_eq!(takes_both(1u32, -4i64), (1, -4));
    }

    #[test]
    fn tuples_of_identifiers_are_identifiers() {
        let set = collect(vec![(1u8, 'a'), (1u8, 'a'), (2u8, 'b')]);
        assert_eq!(set.len(), 2);
    }
}
