//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tally::arithmetic::{factorial, ArithmeticError, Operator};
use tally::calculator::Calculator;
use tally::display::{format_number, parse_operand};
use tally::engine::{EngineState, InputEvent};
use tally::journal::{CalculationJournal, JOURNAL_CAPACITY};
use tally::storage::MemoryStore;

prop_compose! {
    fn arbitrary_operator()(variant in 0..5u8) -> Operator {
        match variant {
            0 => Operator::Add,
            1 => Operator::Subtract,
            2 => Operator::Multiply,
            3 => Operator::Divide,
            _ => Operator::Modulo,
        }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..8u8, digit in 0..10u8, op in arbitrary_operator()) -> InputEvent {
        match variant {
            0 | 1 | 2 => InputEvent::Digit(digit),
            3 => InputEvent::Operator(op),
            4 => InputEvent::DecimalPoint,
            5 => InputEvent::Equals,
            6 => InputEvent::Backspace,
            _ => InputEvent::Percent,
        }
    }
}

fn finite_operand() -> impl Strategy<Value = f64> {
    -1e12..1e12f64
}

proptest! {
    #[test]
    fn operators_match_the_mathematical_result(
        a in finite_operand(),
        b in finite_operand(),
        op in arbitrary_operator(),
    ) {
        let expected = match op {
            Operator::Add => Some(a + b),
            Operator::Subtract => Some(a - b),
            Operator::Multiply => Some(a * b),
            Operator::Divide if b != 0.0 => Some(a / b),
            Operator::Modulo if b != 0.0 => Some(a % b),
            _ => None,
        };

        match expected {
            Some(value) => {
                let result = op.apply(a, b).unwrap();
                let tolerance = 1e-9f64.max(value.abs() * 1e-12);
                prop_assert!((result - value).abs() <= tolerance);
            }
            None => {
                prop_assert_eq!(op.apply(a, b), Err(ArithmeticError::DivisionByZero));
            }
        }
    }

    #[test]
    fn operators_are_pure(a in finite_operand(), b in finite_operand(), op in arbitrary_operator()) {
        prop_assert_eq!(op.apply(a, b), op.apply(a, b));
    }

    #[test]
    fn division_by_zero_always_fails(a in finite_operand()) {
        prop_assert_eq!(
            Operator::Divide.apply(a, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn undo_round_trips_any_event_sequence(
        events in prop::collection::vec(arbitrary_event(), 1..40)
    ) {
        let mut calc = Calculator::new(MemoryStore::new());
        for event in &events {
            // Failed events mutate nothing and record nothing.
            let _ = calc.handle(*event);
        }

        while calc.undo() {}

        prop_assert_eq!(calc.state(), &EngineState::default());
        prop_assert!(!calc.undo());
    }

    #[test]
    fn journal_never_exceeds_capacity(n in 0..150usize) {
        let mut journal = CalculationJournal::new();
        for i in 0..n {
            journal.append(format!("{i} + 0"), i.to_string());
        }

        prop_assert_eq!(journal.len(), n.min(JOURNAL_CAPACITY));
        if n > 0 {
            // Newest first.
            prop_assert_eq!(
                journal.entries()[0].expression.clone(),
                format!("{} + 0", n - 1)
            );
        }
    }

    #[test]
    fn formatting_any_finite_number_succeeds(value in finite_operand()) {
        let formatted = format_number(value).unwrap();
        prop_assert!(!formatted.is_empty());
    }

    #[test]
    fn long_plain_forms_never_carry_grouping(value in finite_operand()) {
        // The width check takes precedence: exponential output and
        // thousands separators are mutually exclusive.
        let formatted = format_number(value).unwrap();
        if formatted.contains('e') {
            prop_assert!(!formatted.contains(','));
        }
    }

    #[test]
    fn grouped_output_parses_back(value in -999_999_999_999i64..=999_999_999_999i64) {
        let formatted = format_number(value as f64).unwrap();
        if !formatted.contains('e') {
            prop_assert_eq!(parse_operand(&formatted), Ok(value as f64));
        }
    }

    #[test]
    fn factorial_is_total_exactly_on_integers_up_to_170(n in 0..400u32) {
        let result = factorial(f64::from(n));
        if n <= 170 {
            let value = result.unwrap();
            prop_assert!(value.is_finite());
            prop_assert!(value >= 1.0);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn factorial_rejects_fractions(n in 0..170u32, fraction in 0.001..0.999f64) {
        prop_assert!(factorial(f64::from(n) + fraction).is_err());
    }
}
