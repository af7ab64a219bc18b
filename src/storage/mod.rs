//! Persistence collaborator boundary.
//!
//! The calculator persists only the memory register and the calculation
//! journal; engine operand/operator state never crosses this boundary.
//! Values travel as opaque JSON, so any key-value store (browser local
//! storage, a file, an in-process map) can implement [`StorageBackend`].

mod error;

pub use error::StorageError;

use serde_json::Value;
use std::collections::HashMap;

/// Keys under which the calculator shell persists its registries.
pub mod keys {
    /// The memory register value (a JSON number).
    pub const MEMORY: &str = "memory_value";
    /// The calculation journal (a JSON array of entries).
    pub const JOURNAL: &str = "calculation_history";
}

/// Narrow contract the calculator requires from a key-value store.
///
/// Implementations may fail freely; every failure is caught and logged by
/// the caller, never treated as fatal.
pub trait StorageBackend {
    /// Persist `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &Value) -> Result<(), StorageError>;

    /// Load the value stored under `key`, or `None` when absent.
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Remove any value stored under `key`.
    fn clear(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process backend backed by a `HashMap`.
///
/// The default store for tests and embedding; it never fails.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tally::storage::{MemoryStore, StorageBackend};
///
/// let mut store = MemoryStore::new();
/// store.save("memory_value", &json!(8.0)).unwrap();
/// assert_eq!(store.load("memory_value").unwrap(), Some(json!(8.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl StorageBackend for MemoryStore {
    fn save(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_load_round_trip() {
        let mut store = MemoryStore::new();
        store.save(keys::MEMORY, &json!(8.0)).unwrap();
        assert_eq!(store.load(keys::MEMORY).unwrap(), Some(json!(8.0)));
    }

    #[test]
    fn load_of_absent_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("missing").unwrap(), None);
    }

    #[test]
    fn save_replaces_the_previous_value() {
        let mut store = MemoryStore::new();
        store.save(keys::MEMORY, &json!(1.0)).unwrap();
        store.save(keys::MEMORY, &json!(2.0)).unwrap();
        assert_eq!(store.load(keys::MEMORY).unwrap(), Some(json!(2.0)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_the_key() {
        let mut store = MemoryStore::new();
        store.save(keys::JOURNAL, &json!([])).unwrap();
        store.clear(keys::JOURNAL).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.load(keys::JOURNAL).unwrap(), None);
    }
}
