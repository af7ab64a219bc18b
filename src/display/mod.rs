//! Canonical display formatting for results.
//!
//! Converts numeric results to the string form shown on the calculator
//! display. The precedence of the three output shapes is load-bearing and
//! covered by golden tests:
//!
//! 1. Plain form longer than [`MAX_PLAIN_WIDTH`] characters switches to
//!    exponential notation, even when the value would also qualify for
//!    thousands grouping.
//! 2. Otherwise, integral values with magnitude >= 1000 are grouped with
//!    `,` separators.
//! 3. Otherwise the plain decimal form is returned unchanged.

mod error;

pub use error::DisplayError;

/// Widest plain decimal form shown before switching to exponential notation.
pub const MAX_PLAIN_WIDTH: usize = 12;

/// Format a numeric result for display.
///
/// Fails with [`DisplayError::NonFinite`] when the value is NaN or
/// infinite; callers catch this and substitute an error display.
///
/// # Example
///
/// ```rust
/// use tally::display::format_number;
///
/// assert_eq!(format_number(8.0), Ok("8".to_string()));
/// assert_eq!(format_number(1234567.0), Ok("1,234,567".to_string()));
/// assert_eq!(format_number(1234567890123.0), Ok("1.23457e12".to_string()));
/// assert!(format_number(f64::NAN).is_err());
/// ```
pub fn format_number(value: f64) -> Result<String, DisplayError> {
    if !value.is_finite() {
        return Err(DisplayError::NonFinite(value));
    }

    let plain = plain_form(value);
    if plain.len() > MAX_PLAIN_WIDTH {
        return Ok(format!("{value:.5e}"));
    }
    if value.abs() >= 1000.0 && value.fract() == 0.0 {
        return Ok(group_thousands(value));
    }
    Ok(plain)
}

/// Parse an operand string produced by this module or typed by the user.
///
/// Accepts grouped (`"1,000"`), plain (`"0.5"`), and exponential
/// (`"1.23457e12"`) forms, so formatted results remain usable as operands
/// in subsequent calculations.
pub fn parse_operand(text: &str) -> Result<f64, DisplayError> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|_| DisplayError::Unparseable(text.to_string()))
}

/// Shortest round-trippable decimal form. Negative zero renders as "0".
fn plain_form(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Insert thousands separators into an integral value.
///
/// Only called for integral values whose plain form fits
/// [`MAX_PLAIN_WIDTH`], so the digit string is at most 12 characters.
fn group_thousands(value: f64) -> String {
    let digits = format!("{}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
