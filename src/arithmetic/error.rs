//! Arithmetic error types.

use thiserror::Error;

/// Errors raised by arithmetic evaluation.
///
/// Both variants abort the operation that raised them before any state
/// is committed; callers surface them and continue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticError {
    /// Division or modulo with a divisor of exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A function applied outside its mathematical domain.
    #[error("{function} is undefined for {input}")]
    Domain {
        /// Name of the offending function
        function: &'static str,
        /// The out-of-domain input value
        input: f64,
    },
}
