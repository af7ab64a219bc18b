//! Normalized input events delivered to the engine.

use crate::arithmetic::{Constant, Function, Operator};

/// A discrete input event from the external input surface.
///
/// Key presses and button clicks are normalized into these variants by
/// the input collaborator before reaching the engine; the engine never
/// sees raw key codes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    DecimalPoint,
    /// A binary operator key.
    Operator(Operator),
    /// A scientific function key.
    Function(Function),
    /// A named constant key (π, e).
    Constant(Constant),
    /// The equals key.
    Equals,
    /// Full reset to the initial state.
    Clear,
    /// Remove the last character of the current operand.
    Backspace,
    /// Divide the current operand by 100 in place.
    Percent,
}
