//! Tape Observer
//!
//! This example implements a view collaborator that prints every
//! notification the calculator publishes, like a printing calculator's
//! paper tape.
//!
//! Key concepts:
//! - The `CalculatorObserver` notification sink
//! - Typed events: state, memory, history, error
//! - The core never reads back from the view
//!
//! Run with: cargo run --example tape_observer

use tally::arithmetic::Operator;
use tally::calculator::Calculator;
use tally::engine::{EngineState, InputEvent};
use tally::journal::JournalEntry;
use tally::observe::CalculatorObserver;
use tally::storage::MemoryStore;

struct Tape;

impl CalculatorObserver for Tape {
    fn on_state_changed(&mut self, state: &EngineState) {
        println!("  display  | {:>14}  ({})", state.current_operand, state.mode().name());
    }

    fn on_memory_changed(&mut self, value: f64) {
        println!("  memory   | {value}");
    }

    fn on_history_changed(&mut self, entries: &[JournalEntry]) {
        match entries.first() {
            Some(entry) => println!("  journal  | {} = {}", entry.expression, entry.result),
            None => println!("  journal  | cleared"),
        }
    }

    fn on_error(&mut self, message: &str) {
        println!("  error    | {message}");
    }
}

fn main() {
    println!("=== Paper Tape Observer ===\n");

    let mut calc = Calculator::new(MemoryStore::new());
    calc.subscribe(Box::new(Tape));

    for key in [
        InputEvent::Digit(7),
        InputEvent::Operator(Operator::Divide),
        InputEvent::Digit(2),
        InputEvent::Equals,
    ] {
        let _ = calc.handle(key);
    }

    calc.memory_store(3.5);

    // Division by zero is published as an error; state is unchanged.
    for key in [
        InputEvent::Operator(Operator::Divide),
        InputEvent::Digit(0),
        InputEvent::Equals,
    ] {
        let _ = calc.handle(key);
    }

    println!("\n=== Tape Complete ===");
}
