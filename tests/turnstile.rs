//! End-to-end behaviour of the turnstile machine across every front-end.

use fsm_table::{
    fsm_enum, BuildError, HistoryPolicy, MachineConfig, StateMachine, StateMachineBuilder,
    StepError, Transition,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

fsm_enum! {
    enum Gate {
        Locked,
        Unlocked,
    }
}

fsm_enum! {
    enum Signal {
        Coin,
        Push,
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
enum TurnstileError {
    #[error("invalid coin")]
    InvalidCoin,
}

type Turnstile = StateMachine<Gate, Signal, TurnstileError>;

fn table() -> Vec<Transition<Gate, Signal, TurnstileError>> {
    vec![
        Transition::new(Signal::Coin, Gate::Locked, Gate::Unlocked),
        Transition::new(Signal::Coin, Gate::Unlocked, Gate::Unlocked),
        Transition::new(Signal::Push, Gate::Locked, Gate::Locked),
        Transition::new(Signal::Push, Gate::Unlocked, Gate::Locked),
    ]
}

#[test]
fn nondeterministic_table_is_rejected() {
    let mut transitions = table();
    transitions.insert(3, Transition::new(Signal::Push, Gate::Locked, Gate::Unlocked));

    let result = Turnstile::from_transitions(transitions);

    assert_eq!(
        result.unwrap_err(),
        BuildError::Conflict {
            input: Signal::Push,
            current: Gate::Locked,
            next: Gate::Unlocked,
        }
    );
}

#[test]
fn empty_table_is_rejected() {
    let result = Turnstile::from_transitions(Vec::new());
    assert_eq!(result.unwrap_err(), BuildError::EmptyTable);
}

#[test]
fn scenario_walks_the_turnstile() {
    let mut turnstile = Turnstile::from_transitions(table()).unwrap();
    assert_eq!(turnstile.current_state(), &Gate::Locked);

    turnstile.step(Signal::Coin).unwrap();
    assert_eq!(turnstile.current_state(), &Gate::Unlocked);

    turnstile.step(Signal::Coin).unwrap();
    assert_eq!(turnstile.current_state(), &Gate::Unlocked);

    turnstile.step(Signal::Push).unwrap();
    assert_eq!(turnstile.current_state(), &Gate::Locked);

    turnstile.step(Signal::Push).unwrap();
    assert_eq!(turnstile.current_state(), &Gate::Locked);
}

#[test]
fn unregistered_input_is_unexpected() {
    let transitions = table()
        .into_iter()
        .filter(|t| !(t.input == Signal::Push && t.current == Gate::Locked));
    let mut turnstile = Turnstile::from_transitions(transitions).unwrap();

    let err = turnstile.step(Signal::Push).unwrap_err();

    assert_eq!(
        err,
        StepError::UnexpectedInput {
            input: Signal::Push,
            current: Gate::Locked,
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected transition, input: Push, current: Locked"
    );
    assert_eq!(turnstile.current_state(), &Gate::Locked);
}

#[test]
fn handler_runs_only_on_its_transition() {
    let people = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&people);

    let mut transitions = table();
    transitions[3] = Transition::new(Signal::Push, Gate::Unlocked, Gate::Locked).with_handler(
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        },
    );
    let mut turnstile = Turnstile::from_transitions(transitions).unwrap();

    turnstile.step(Signal::Push).unwrap();
    turnstile.step(Signal::Coin).unwrap();
    turnstile.step(Signal::Push).unwrap();

    assert_eq!(people.load(Ordering::SeqCst), 1);
}

#[test]
fn failing_handler_leaves_state_unchanged() {
    let mut transitions = table();
    transitions[0] = Transition::new(Signal::Coin, Gate::Locked, Gate::Unlocked)
        .with_handler(|| Err(TurnstileError::InvalidCoin));
    let mut turnstile = Turnstile::from_transitions(transitions).unwrap();

    let err = turnstile.step(Signal::Coin).unwrap_err();

    assert_eq!(err.into_handler_error(), Some(TurnstileError::InvalidCoin));
    assert_eq!(turnstile.current_state(), &Gate::Locked);
}

#[test]
fn self_loop_without_handler_is_idempotent() {
    let mut turnstile = Turnstile::from_transitions(table()).unwrap();

    for _ in 0..5 {
        assert!(turnstile.step(Signal::Push).is_ok());
        assert_eq!(turnstile.current_state(), &Gate::Locked);
    }
}

#[test]
fn fluent_and_builder_front_ends_agree_with_batch() {
    let fluent = Turnstile::new(Gate::Locked)
        .on(Signal::Coin, Gate::Locked, Gate::Unlocked)
        .and_then(|m| m.on(Signal::Coin, Gate::Unlocked, Gate::Unlocked))
        .and_then(|m| m.on(Signal::Push, Gate::Locked, Gate::Locked))
        .and_then(|m| m.on(Signal::Push, Gate::Unlocked, Gate::Locked))
        .unwrap();
    let built: Turnstile = StateMachineBuilder::new()
        .transitions(table())
        .build()
        .unwrap();
    let batch = Turnstile::from_transitions(table()).unwrap();

    for mut machine in [fluent, built, batch] {
        assert_eq!(machine.registry().len(), 4);
        for (signal, expected) in [
            (Signal::Coin, Gate::Unlocked),
            (Signal::Push, Gate::Locked),
            (Signal::Push, Gate::Locked),
        ] {
            machine.step(signal).unwrap();
            assert_eq!(machine.current_state(), &expected);
        }
    }
}

#[test]
fn fluent_conflict_can_be_made_fatal_by_the_caller() {
    let result = std::panic::catch_unwind(|| {
        Turnstile::new(Gate::Locked)
            .on(Signal::Push, Gate::Locked, Gate::Locked)
            .and_then(|m| m.on(Signal::Push, Gate::Locked, Gate::Unlocked))
            .expect("turnstile table must be deterministic")
    });

    assert!(result.is_err());
}

#[test]
fn history_serializes_with_fsm_enum_identifiers() {
    let config = MachineConfig::default()
        .named("turnstile")
        .with_history(HistoryPolicy::Unbounded);
    let mut turnstile: Turnstile = StateMachineBuilder::new()
        .config(config)
        .transitions(table())
        .build()
        .unwrap();

    turnstile.step(Signal::Coin).unwrap();
    turnstile.step(Signal::Push).unwrap();
    let _ = turnstile.step(Signal::Coin);

    let json = serde_json::to_value(turnstile.history()).unwrap();
    let entries = json["transitions"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["from"], "Locked");
    assert_eq!(entries[0]["input"], "Coin");
    assert_eq!(entries[0]["to"], "Unlocked");
}
