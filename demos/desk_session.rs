//! Desk Calculator Session
//!
//! This example drives a full calculator session through the public API.
//!
//! Key concepts:
//! - Normalized input events
//! - Chained binary operations and equals
//! - Undo of engine mutations
//! - Memory register operations
//!
//! Run with: cargo run --example desk_session

use tally::arithmetic::{Function, Operator};
use tally::calculator::Calculator;
use tally::engine::InputEvent;
use tally::storage::MemoryStore;

fn main() {
    println!("=== Desk Calculator Session ===\n");

    let mut calc = Calculator::new(MemoryStore::new());

    // 12 + 30 =
    let keys = [
        InputEvent::Digit(1),
        InputEvent::Digit(2),
        InputEvent::Operator(Operator::Add),
        InputEvent::Digit(3),
        InputEvent::Digit(0),
        InputEvent::Equals,
    ];
    for key in keys {
        calc.handle(key).expect("valid key sequence");
        println!("  [{:>16}]  {}", calc.display(), calc.state().history_label);
    }

    // Chain from the result: * 100 =
    println!("\nChaining from the result:");
    let keys = [
        InputEvent::Operator(Operator::Multiply),
        InputEvent::Digit(1),
        InputEvent::Digit(0),
        InputEvent::Digit(0),
        InputEvent::Equals,
    ];
    for key in keys {
        calc.handle(key).expect("valid key sequence");
    }
    println!("  [{:>16}]  {}", calc.display(), calc.state().history_label);

    // A domain error surfaces without touching the display.
    println!("\nApplying sqrt after 1 - 5 = (a negative operand):");
    for key in [
        InputEvent::Clear,
        InputEvent::Digit(1),
        InputEvent::Operator(Operator::Subtract),
        InputEvent::Digit(5),
        InputEvent::Equals,
    ] {
        calc.handle(key).expect("valid key sequence");
    }
    match calc.handle(InputEvent::Function(Function::Sqrt)) {
        Ok(()) => println!("  unexpected success"),
        Err(err) => println!("  error: {err} (display still [{}])", calc.display()),
    }

    // Undo walks back through engine mutations.
    println!("\nUndo:");
    while calc.undo() {
        println!("  [{:>16}]", calc.display());
    }

    // Memory register.
    println!("\nMemory:");
    calc.memory_store(5.0);
    calc.memory_add(3.0);
    println!("  M+ 5, M+ 3 -> recall {}", calc.memory_recall());

    println!("\nJournal (newest first):");
    for entry in calc.journal_entries() {
        println!("  #{:<3} {} = {}", entry.id, entry.expression, entry.result);
    }

    println!("\n=== Session Complete ===");
}
