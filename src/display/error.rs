//! Formatting error types.

use thiserror::Error;

/// Errors raised when converting between numbers and display text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DisplayError {
    /// The value is NaN or infinite and has no displayable form.
    ///
    /// Typically arises from upstream overflow; callers substitute an
    /// error display such as "Result too large".
    #[error("cannot format a non-finite number: {0}")]
    NonFinite(f64),

    /// The text is not a recognizable operand.
    #[error("not a numeric operand: {0:?}")]
    Unparseable(String),
}
