//! Error types for the editor core.

use thiserror::Error;

/// Errors surfaced by the editor core.
///
/// The core performs no I/O; the only fallible surface is JSON
/// (de)serialization of task documents. Malformed wire records are not
/// errors: parsing them yields `None` and callers skip the record.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
