//! Pure arithmetic operations.
//!
//! This module contains the stateless computational core of the calculator:
//! binary operators, scientific unary functions, and named constants. Every
//! function here is pure (deterministic, no side effects) and synchronous;
//! domain violations are reported as [`ArithmeticError`] values rather than
//! panics.

mod error;

pub use error::ArithmeticError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest integer whose factorial is representable as a finite `f64`.
pub const FACTORIAL_MAX: f64 = 170.0;

/// Binary operator over two operands.
///
/// # Example
///
/// ```rust
/// use tally::arithmetic::Operator;
///
/// assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
/// assert_eq!(Operator::Add.symbol(), "+");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Modulo (%)
    Modulo,
}

impl Operator {
    /// The operator's display symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Total over all finite pairs except division and modulo, which fail
    /// with [`ArithmeticError::DivisionByZero`] when the divisor is exactly
    /// zero.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    Err(ArithmeticError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
            Self::Modulo => {
                if b == 0.0 {
                    Err(ArithmeticError::DivisionByZero)
                } else {
                    Ok(a % b)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Scientific unary function.
///
/// Trigonometric functions take their argument in degrees.
///
/// # Example
///
/// ```rust
/// use tally::arithmetic::Function;
///
/// assert_eq!(Function::Square.apply(4.0), Ok(16.0));
/// assert!(Function::Sqrt.apply(-4.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Function {
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    /// Square root
    Sqrt,
    /// x squared
    Square,
    /// n! for integers in [0, 170]
    Factorial,
}

impl Function {
    /// The function's display name, as used in journal expressions.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Square => "sqr",
            Self::Factorial => "fact",
        }
    }

    /// Apply the function to a single operand.
    pub fn apply(&self, x: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Sin => Ok(x.to_radians().sin()),
            Self::Cos => Ok(x.to_radians().cos()),
            Self::Tan => Ok(x.to_radians().tan()),
            Self::Log => {
                if x <= 0.0 {
                    Err(ArithmeticError::Domain {
                        function: self.name(),
                        input: x,
                    })
                } else {
                    Ok(x.log10())
                }
            }
            Self::Ln => {
                if x <= 0.0 {
                    Err(ArithmeticError::Domain {
                        function: self.name(),
                        input: x,
                    })
                } else {
                    Ok(x.ln())
                }
            }
            Self::Sqrt => {
                if x < 0.0 {
                    Err(ArithmeticError::Domain {
                        function: self.name(),
                        input: x,
                    })
                } else {
                    Ok(x.sqrt())
                }
            }
            Self::Square => Ok(x * x),
            Self::Factorial => factorial(x),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named mathematical constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// The constant's display symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
        }
    }

    /// The constant's numeric value.
    pub const fn value(&self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// Iterative factorial over non-negative integers up to [`FACTORIAL_MAX`].
///
/// Fails with [`ArithmeticError::Domain`] when the input is negative,
/// non-integer, or larger than 170 (171! overflows `f64` to infinity).
pub fn factorial(n: f64) -> Result<f64, ArithmeticError> {
    if n < 0.0 || n.fract() != 0.0 || n > FACTORIAL_MAX {
        return Err(ArithmeticError::Domain {
            function: "fact",
            input: n,
        });
    }

    let mut product = 1.0;
    let mut k = 2.0;
    while k <= n {
        product *= k;
        k += 1.0;
    }
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn basic_operators_compute_expected_results() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), Ok(15.0));
        assert_eq!(Operator::Divide.apply(6.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Modulo.apply(7.0, 3.0), Ok(1.0));
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(
            Operator::Divide.apply(7.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Operator::Modulo.apply(7.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn operator_symbols_are_stable() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "*");
        assert_eq!(Operator::Divide.symbol(), "/");
        assert_eq!(Operator::Modulo.symbol(), "%");
    }

    #[test]
    fn trig_functions_take_degrees() {
        assert!(close(Function::Sin.apply(90.0).unwrap(), 1.0));
        assert!(close(Function::Cos.apply(0.0).unwrap(), 1.0));
        assert!(close(Function::Tan.apply(45.0).unwrap(), 1.0));
    }

    #[test]
    fn log_rejects_non_positive_input() {
        assert!(close(Function::Log.apply(100.0).unwrap(), 2.0));
        assert!(matches!(
            Function::Log.apply(0.0),
            Err(ArithmeticError::Domain { function: "log", .. })
        ));
        assert!(Function::Log.apply(-1.0).is_err());
    }

    #[test]
    fn ln_rejects_non_positive_input() {
        assert!(close(Function::Ln.apply(std::f64::consts::E).unwrap(), 1.0));
        assert!(Function::Ln.apply(0.0).is_err());
        assert!(Function::Ln.apply(-3.0).is_err());
    }

    #[test]
    fn sqrt_rejects_negative_input() {
        assert_eq!(Function::Sqrt.apply(16.0), Ok(4.0));
        assert_eq!(Function::Sqrt.apply(0.0), Ok(0.0));
        assert!(matches!(
            Function::Sqrt.apply(-4.0),
            Err(ArithmeticError::Domain { function: "sqrt", .. })
        ));
    }

    #[test]
    fn square_is_total() {
        assert_eq!(Function::Square.apply(-3.0), Ok(9.0));
        assert_eq!(Function::Square.apply(0.0), Ok(0.0));
    }

    #[test]
    fn factorial_of_small_integers() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(5.0), Ok(120.0));
    }

    #[test]
    fn factorial_boundary_at_170() {
        let at_limit = factorial(170.0).unwrap();
        assert!(at_limit.is_finite());
        assert!(factorial(171.0).is_err());
    }

    #[test]
    fn factorial_rejects_negative_and_fractional_input() {
        assert!(factorial(-1.0).is_err());
        assert!(factorial(2.5).is_err());
    }

    #[test]
    fn functions_are_deterministic() {
        let first = Function::Sin.apply(30.0).unwrap();
        let second = Function::Sin.apply(30.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn constants_expose_expected_values() {
        assert_eq!(Constant::Pi.value(), std::f64::consts::PI);
        assert_eq!(Constant::E.value(), std::f64::consts::E);
        assert_eq!(Constant::Pi.symbol(), "π");
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = Operator::Divide.apply(1.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "division by zero");

        let err = Function::Sqrt.apply(-4.0).unwrap_err();
        assert_eq!(err.to_string(), "sqrt is undefined for -4");
    }
}
