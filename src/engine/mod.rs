//! Input/state engine: the pure transition core.
//!
//! This module holds the calculator's state machine as data plus pure
//! functions. [`EngineState`] is an immutable snapshot, [`InputEvent`] a
//! normalized input, and [`advance`] the single transition function that
//! maps one to the next. Side effects (undo recording, journaling,
//! persistence, notification) live in the imperative shell
//! ([`crate::calculator`]).

mod error;
mod event;
mod state;
mod transition;

pub use error::EngineError;
pub use event::InputEvent;
pub use state::{EngineState, EntryMode, MAX_OPERAND_LEN};
pub use transition::{advance, JournalRecord, Outcome};
