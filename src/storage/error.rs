//! Storage error types.

use thiserror::Error;

/// Errors reported by persistence backends.
///
/// Always caught at the persistence boundary and logged; a failed save
/// degrades to session-only behavior and is never propagated.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The backend could not complete the operation.
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// The value could not be serialized or deserialized.
    #[error("storage serialization failure: {0}")]
    Serialization(String),
}
