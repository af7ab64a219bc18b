//! Engine error types.

use crate::arithmetic::ArithmeticError;
use crate::display::DisplayError;
use thiserror::Error;

/// Errors raised while advancing the engine by one input event.
///
/// None of these are fatal: a failed transition leaves the previous state
/// fully intact, and the shell surfaces the message to the view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An arithmetic evaluation failed (division by zero, domain error).
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// A result could not be formatted or an operand re-parsed.
    #[error(transparent)]
    Display(#[from] DisplayError),

    /// Digit entry would grow the operand past its limit.
    ///
    /// A local validation rejection rather than a failure; the shell
    /// shows a transient notice and the operand is left unchanged.
    #[error("operand is limited to {limit} characters")]
    InputTooLong { limit: usize },

    /// A digit event carried a value outside 0..=9.
    #[error("not a digit: {0}")]
    InvalidDigit(u8),
}
