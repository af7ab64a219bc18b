//! Tally: a calculator input/state engine.
//!
//! Tally is built around a "pure core, imperative shell" split. The core
//! state machine logic is composed of pure functions over immutable
//! snapshots; side effects (undo recording, journaling, persistence,
//! view notification) are isolated in the [`calculator::Calculator`]
//! shell.
//!
//! # Core Concepts
//!
//! - **Engine**: an [`engine::EngineState`] snapshot advanced one
//!   [`engine::InputEvent`] at a time by the pure [`engine::advance`]
//!   transition function
//! - **Undo**: bounded history of pre-operation snapshots, single
//!   direction, no redo
//! - **Collaborators**: persistence ([`storage::StorageBackend`]) and
//!   view ([`observe::CalculatorObserver`]) stay behind narrow traits
//!
//! # Example
//!
//! ```rust
//! use tally::arithmetic::Operator;
//! use tally::calculator::Calculator;
//! use tally::engine::InputEvent;
//! use tally::storage::MemoryStore;
//!
//! let mut calc = Calculator::new(MemoryStore::new());
//!
//! calc.handle(InputEvent::Digit(5)).unwrap();
//! calc.handle(InputEvent::Operator(Operator::Add)).unwrap();
//! calc.handle(InputEvent::Digit(3)).unwrap();
//! calc.handle(InputEvent::Equals).unwrap();
//!
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.journal_entries()[0].expression, "5 + 3");
//!
//! assert!(calc.undo());
//! assert_eq!(calc.display(), "3");
//! ```

pub mod arithmetic;
pub mod calculator;
pub mod display;
pub mod engine;
pub mod journal;
pub mod memory;
pub mod observe;
pub mod storage;
pub mod undo;

// Re-export commonly used types
pub use arithmetic::{ArithmeticError, Constant, Function, Operator};
pub use calculator::Calculator;
pub use display::{format_number, parse_operand, DisplayError};
pub use engine::{advance, EngineError, EngineState, EntryMode, InputEvent};
pub use journal::{CalculationJournal, JournalEntry};
pub use memory::MemoryRegistry;
pub use observe::CalculatorObserver;
pub use storage::{MemoryStore, StorageBackend, StorageError};
pub use undo::UndoStack;
