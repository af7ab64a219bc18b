//! Pure transition logic: one input event advances one state snapshot.
//!
//! All functions here are pure. They borrow the current state, never
//! mutate it, and return a fresh [`Outcome`] on success. A failed
//! transition therefore cannot leave partial mutation behind; the shell
//! simply keeps the old snapshot.

use super::error::EngineError;
use super::event::InputEvent;
use super::state::{EngineState, MAX_OPERAND_LEN};
use crate::arithmetic::{Constant, Function, Operator};
use crate::display::{format_number, parse_operand};

/// Journal record produced by an evaluating transition.
#[derive(Clone, Debug, PartialEq)]
pub struct JournalRecord {
    /// Human-readable expression, e.g. `"5 + 3"` or `"sqrt(16)"`.
    pub expression: String,
    /// The formatted result of the expression.
    pub result: String,
}

/// Result of advancing the engine by one input event.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// The state after the event.
    pub next: EngineState,
    /// A record for the calculation journal, when the event evaluated
    /// something worth logging (equals, function application).
    pub journal: Option<JournalRecord>,
}

impl Outcome {
    fn quiet(next: EngineState) -> Self {
        Self {
            next,
            journal: None,
        }
    }
}

/// Advance `state` by one input event.
///
/// # Example
///
/// ```rust
/// use tally::arithmetic::Operator;
/// use tally::engine::{advance, EngineState, InputEvent};
///
/// let state = EngineState::default();
/// let state = advance(&state, &InputEvent::Digit(5)).unwrap().next;
/// let state = advance(&state, &InputEvent::Operator(Operator::Add)).unwrap().next;
/// let state = advance(&state, &InputEvent::Digit(3)).unwrap().next;
/// let outcome = advance(&state, &InputEvent::Equals).unwrap();
///
/// assert_eq!(outcome.next.current_operand, "8");
/// assert_eq!(outcome.journal.unwrap().expression, "5 + 3");
/// ```
pub fn advance(state: &EngineState, event: &InputEvent) -> Result<Outcome, EngineError> {
    match event {
        InputEvent::Digit(d) => digit(state, *d),
        InputEvent::DecimalPoint => decimal_point(state),
        InputEvent::Operator(op) => operator(state, *op),
        InputEvent::Function(func) => function(state, *func),
        InputEvent::Constant(constant) => write_constant(state, *constant),
        InputEvent::Equals => equals(state),
        InputEvent::Clear => Ok(Outcome::quiet(EngineState::default())),
        InputEvent::Backspace => backspace(state),
        InputEvent::Percent => percent(state),
    }
}

fn digit(state: &EngineState, d: u8) -> Result<Outcome, EngineError> {
    if d > 9 {
        return Err(EngineError::InvalidDigit(d));
    }

    let mut next = state.clone();
    if state.awaiting_new_operand {
        next.current_operand = d.to_string();
        next.awaiting_new_operand = false;
        if next.pending_operator.is_none() {
            // A fresh calculation after a result; the old label is stale.
            next.history_label.clear();
        }
    } else if state.current_operand == "0" {
        next.current_operand = d.to_string();
    } else {
        if state.current_operand.len() >= MAX_OPERAND_LEN {
            return Err(EngineError::InputTooLong {
                limit: MAX_OPERAND_LEN,
            });
        }
        next.current_operand.push((b'0' + d) as char);
    }
    Ok(Outcome::quiet(next))
}

fn decimal_point(state: &EngineState) -> Result<Outcome, EngineError> {
    let mut next = state.clone();
    if state.awaiting_new_operand {
        next.current_operand = "0.".to_string();
        next.awaiting_new_operand = false;
        if next.pending_operator.is_none() {
            next.history_label.clear();
        }
    } else if !state.current_operand.contains('.') {
        if state.current_operand.len() >= MAX_OPERAND_LEN {
            return Err(EngineError::InputTooLong {
                limit: MAX_OPERAND_LEN,
            });
        }
        next.current_operand.push('.');
    }
    Ok(Outcome::quiet(next))
}

fn operator(state: &EngineState, op: Operator) -> Result<Outcome, EngineError> {
    // Nothing entered yet: there is no left operand to bind.
    if state.is_idle() {
        return Ok(Outcome::quiet(state.clone()));
    }

    let mut next = state.clone();
    if let (Some(lhs), Some(pending)) = (&state.pending_operand, state.pending_operator) {
        if state.awaiting_new_operand {
            // No digit since the last operator: replace it, never recompute.
            next.pending_operator = Some(op);
            next.history_label = format!("{} {}", lhs, op.symbol());
            return Ok(Outcome::quiet(next));
        }

        // Chained input: fold the completed pair into the new left operand.
        let folded = evaluate(lhs, pending, &state.current_operand)?;
        next.history_label = format!("{} {}", folded, op.symbol());
        next.current_operand = folded.clone();
        next.pending_operand = Some(folded);
        next.pending_operator = Some(op);
        next.awaiting_new_operand = true;
        return Ok(Outcome::quiet(next));
    }

    next.history_label = format!("{} {}", state.current_operand, op.symbol());
    next.pending_operand = Some(state.current_operand.clone());
    next.pending_operator = Some(op);
    next.awaiting_new_operand = true;
    Ok(Outcome::quiet(next))
}

fn equals(state: &EngineState) -> Result<Outcome, EngineError> {
    let (Some(lhs), Some(op)) = (&state.pending_operand, state.pending_operator) else {
        return Ok(Outcome::quiet(state.clone()));
    };

    // No digit after the operator: degenerate self-operation (e.g. "5 + =").
    let rhs = if state.awaiting_new_operand {
        lhs.clone()
    } else {
        state.current_operand.clone()
    };

    let result = evaluate(lhs, op, &rhs)?;
    let expression = format!("{} {} {}", lhs, op.symbol(), rhs);

    let mut next = state.clone();
    next.history_label = format!("{expression} =");
    next.current_operand = result.clone();
    next.pending_operand = None;
    next.pending_operator = None;
    next.awaiting_new_operand = true;
    Ok(Outcome {
        next,
        journal: Some(JournalRecord { expression, result }),
    })
}

fn function(state: &EngineState, func: Function) -> Result<Outcome, EngineError> {
    let operand = state.current_operand.clone();
    let value = parse_operand(&operand)?;
    let result = format_number(func.apply(value)?)?;
    let expression = format!("{}({})", func.name(), operand);

    let mut next = state.clone();
    next.history_label = format!("{expression} =");
    next.current_operand = result.clone();
    next.awaiting_new_operand = true;
    Ok(Outcome {
        next,
        journal: Some(JournalRecord { expression, result }),
    })
}

fn write_constant(state: &EngineState, constant: Constant) -> Result<Outcome, EngineError> {
    let mut next = state.clone();
    // Constants bypass the formatter: the full-precision decimal form is
    // written directly as the new operand.
    next.current_operand = format!("{}", constant.value());
    next.awaiting_new_operand = true;
    Ok(Outcome::quiet(next))
}

fn backspace(state: &EngineState) -> Result<Outcome, EngineError> {
    let mut next = state.clone();
    if state.awaiting_new_operand || state.current_operand.len() <= 1 {
        next.current_operand = "0".to_string();
        next.awaiting_new_operand = false;
    } else {
        next.current_operand.pop();
        if next.current_operand.is_empty() || next.current_operand == "-" {
            next.current_operand = "0".to_string();
        }
    }
    Ok(Outcome::quiet(next))
}

fn percent(state: &EngineState) -> Result<Outcome, EngineError> {
    let value = parse_operand(&state.current_operand)?;
    let formatted = format_number(value / 100.0)?;

    let mut next = state.clone();
    next.current_operand = formatted;
    next.awaiting_new_operand = true;
    Ok(Outcome::quiet(next))
}

/// Evaluate a completed binary pair, returning the formatted result.
fn evaluate(lhs: &str, op: Operator, rhs: &str) -> Result<String, EngineError> {
    let a = parse_operand(lhs)?;
    let b = parse_operand(rhs)?;
    let result = op.apply(a, b)?;
    Ok(format_number(result)?)
}
