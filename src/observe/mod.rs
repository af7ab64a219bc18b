//! View collaborator boundary.
//!
//! The calculator publishes typed notifications through this trait after
//! every mutation; it never reads back from the view. All methods default
//! to no-ops so an observer implements only what it renders.

use crate::engine::EngineState;
use crate::journal::JournalEntry;

/// Notification sink for an external view.
///
/// # Example
///
/// ```rust
/// use tally::engine::EngineState;
/// use tally::observe::CalculatorObserver;
///
/// struct DisplayLine(String);
///
/// impl CalculatorObserver for DisplayLine {
///     fn on_state_changed(&mut self, state: &EngineState) {
///         self.0 = state.current_operand.clone();
///     }
/// }
/// ```
pub trait CalculatorObserver {
    /// The engine state changed; redraw the display.
    fn on_state_changed(&mut self, _state: &EngineState) {}

    /// The memory register changed.
    fn on_memory_changed(&mut self, _value: f64) {}

    /// The calculation journal changed (entries newest first).
    fn on_history_changed(&mut self, _entries: &[JournalEntry]) {}

    /// An operation failed; show the message and carry on.
    fn on_error(&mut self, _message: &str) {}
}
