//! The memory register.
//!
//! A single accumulator mutated by four total operations. Non-finite
//! inputs are coerced to zero so the register can never hold a value the
//! formatter would reject; persistence and change notification are the
//! shell's responsibility.

use crate::display::format_number;

/// Single persisted accumulator value, default 0.
///
/// # Example
///
/// ```rust
/// use tally::memory::MemoryRegistry;
///
/// let mut memory = MemoryRegistry::new();
/// memory.store(5.0);
/// memory.add(3.0);
/// assert_eq!(memory.recall(), "8");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryRegistry {
    value: f64,
}

impl MemoryRegistry {
    /// Create an empty register.
    pub fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Rebuild a register from a persisted value.
    pub fn restore(value: f64) -> Self {
        Self {
            value: sanitize(value),
        }
    }

    /// Set the register to `value`; non-finite input stores 0.
    pub fn store(&mut self, value: f64) {
        self.value = sanitize(value);
    }

    /// Add `delta` to the register; non-finite deltas count as 0.
    pub fn add(&mut self, delta: f64) {
        self.value = sanitize(self.value + sanitize(delta));
    }

    /// Subtract `delta` from the register; non-finite deltas count as 0.
    pub fn subtract(&mut self, delta: f64) {
        self.value = sanitize(self.value - sanitize(delta));
    }

    /// Reset the register to 0.
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// The raw register value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The register value as a formatted display string.
    pub fn recall(&self) -> String {
        // The value is kept finite by construction, so formatting cannot
        // fail; fall back to "0" rather than propagate.
        format_number(self.value).unwrap_or_else(|_| "0".to_string())
    }
}

/// Non-finite values are treated as zero; the register stays total.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
