//! Turnstile State Machine
//!
//! The classic coin-operated turnstile: a coin unlocks it, pushing through
//! locks it again. Handlers print what the hardware would do.
//!
//! Key concepts:
//! - Batch construction from a transition table
//! - Handlers as fallible side effects
//! - Reporting unexpected input without changing state
//!
//! Run with: RUST_LOG=fsm_table=debug cargo run --example turnstile

use fsm_table::{
    fsm_enum, HistoryPolicy, MachineConfig, StateMachine, StateMachineBuilder, Transition,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let mut turnstile: StateMachine<Gate, Signal> = StateMachineBuilder::new()
        .config(
            MachineConfig::default()
                .named("turnstile")
                .with_history(HistoryPolicy::Bounded(8)),
        )
        .transitions(vec![
            Transition::new(Signal::Coin, Gate::Locked, Gate::Unlocked).with_handler(|| {
                println!("Unlocks the turnstile so that the customer can push through.");
                Ok(())
            }),
            Transition::new(Signal::Coin, Gate::Unlocked, Gate::Unlocked),
            Transition::new(Signal::Push, Gate::Unlocked, Gate::Locked).with_handler(|| {
                println!("When the customer has pushed through, locks the turnstile.");
                Ok(())
            }),
        ])
        .build()?;

    println!("Initial state: {}\n", turnstile.current_state());

    for signal in [Signal::Coin, Signal::Coin, Signal::Push, Signal::Push] {
        match turnstile.step(signal) {
            Ok(()) => println!("{signal} -> {}", turnstile.current_state()),
            Err(err) => println!("{signal} rejected: {err}"),
        }
    }

    println!("\nPath taken:");
    for state in turnstile.history().path() {
        println!("  {state}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
