//! Engine state snapshot and derived input mode.

use crate::arithmetic::Operator;
use serde::{Deserialize, Serialize};

/// Maximum number of characters accepted into an operand being typed.
pub const MAX_OPERAND_LEN: usize = 15;

/// Input mode of the engine, derived from the state fields.
///
/// A single tagged enum replaces the state-object-per-mode pattern: the
/// mode is a pure function of the snapshot, never stored separately, so
/// it can never disagree with the fields it is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryMode {
    /// Nothing entered yet; operator presses are ignored.
    Idle,
    /// An operand is being typed or displayed.
    EnteringOperand,
    /// An operator was chosen and the next digit starts the right operand.
    OperatorPending,
}

impl EntryMode {
    /// The mode's name for display and diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::EnteringOperand => "EnteringOperand",
            Self::OperatorPending => "OperatorPending",
        }
    }
}

/// Complete calculator state: snapshot-able, restorable, comparable.
///
/// Snapshots are the undo unit, so the struct derives `Clone` and
/// `PartialEq`; serde derives support diagnostics and tests, although
/// operand/operator state is never persisted across sessions.
///
/// Invariant: `pending_operator.is_some()` implies
/// `pending_operand.is_some()`. The reverse is not required.
///
/// # Example
///
/// ```rust
/// use tally::engine::{EngineState, EntryMode};
///
/// let state = EngineState::default();
/// assert_eq!(state.current_operand, "0");
/// assert_eq!(state.mode(), EntryMode::Idle);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Operand currently typed or displayed, in canonical text form:
    /// no leading zeros except "0" itself, at most one decimal point,
    /// optional leading "-".
    pub current_operand: String,

    /// Left-hand operand awaiting the second argument of a binary op.
    pub pending_operand: Option<String>,

    /// Operator awaiting its right-hand operand.
    pub pending_operator: Option<Operator>,

    /// When true, the next digit starts a fresh operand instead of
    /// appending to the current one.
    pub awaiting_new_operand: bool,

    /// Human-readable trailing expression fragment, e.g. `"12 +"`.
    pub history_label: String,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current_operand: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_new_operand: false,
            history_label: String::new(),
        }
    }
}

impl EngineState {
    /// Create the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the current input mode from the state fields.
    pub fn mode(&self) -> EntryMode {
        if self.pending_operator.is_some() && self.awaiting_new_operand {
            EntryMode::OperatorPending
        } else if self.pending_operand.is_none()
            && self.pending_operator.is_none()
            && !self.awaiting_new_operand
            && self.current_operand == "0"
        {
            EntryMode::Idle
        } else {
            EntryMode::EnteringOperand
        }
    }

    /// True when nothing has been entered yet.
    pub fn is_idle(&self) -> bool {
        self.mode() == EntryMode::Idle
    }
}
