//! Append-only, capacity-bounded calculation journal.
//!
//! Entries are kept newest first and capped at [`JOURNAL_CAPACITY`]; the
//! oldest entry is evicted first. The journal serializes to JSON for the
//! persistence collaborator and can be rebuilt from a persisted value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of journal entries retained.
pub const JOURNAL_CAPACITY: usize = 100;

/// One recorded calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Monotonically increasing identifier.
    pub id: u64,
    /// Human-readable expression, e.g. `"5 + 3"`.
    pub expression: String,
    /// Formatted result of the expression.
    pub result: String,
    /// When the calculation completed.
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of calculations, newest first.
///
/// # Example
///
/// ```rust
/// use tally::journal::CalculationJournal;
///
/// let mut journal = CalculationJournal::new();
/// journal.append("5 + 3", "8");
/// journal.append("sqrt(16)", "4");
///
/// assert_eq!(journal.entries()[0].expression, "sqrt(16)");
/// assert_eq!(journal.entries()[1].expression, "5 + 3");
/// ```
#[derive(Clone, Debug)]
pub struct CalculationJournal {
    entries: Vec<JournalEntry>,
    next_id: u64,
}

impl Default for CalculationJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a journal from persisted entries (newest first).
    ///
    /// The id counter resumes past the largest restored id so identifiers
    /// stay unique across sessions.
    pub fn restore(mut entries: Vec<JournalEntry>) -> Self {
        entries.truncate(JOURNAL_CAPACITY);
        let next_id = entries.iter().map(|e| e.id).max().map_or(1, |max| max + 1);
        Self { entries, next_id }
    }

    /// Record a calculation at the front of the journal.
    ///
    /// Evicts the oldest entry when the journal is at capacity.
    pub fn append(
        &mut self,
        expression: impl Into<String>,
        result: impl Into<String>,
    ) -> &JournalEntry {
        let entry = JournalEntry {
            id: self.next_id,
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.entries.insert(0, entry);
        self.entries.truncate(JOURNAL_CAPACITY);
        &self.entries[0]
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&JournalEntry> {
        self.entries.first()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
