//! Cross-cutting error types for Trek.
//!
//! Validation failures are not errors: the pipeline returns them as data so a
//! caller can show every message at once. `CoreError` covers the few places
//! where a caller's request itself cannot be honoured.

use thiserror::Error;

/// Errors raised when a request addresses the collection incorrectly.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record index does not address a record in the collection.
    #[error("Record not found: index {index} (collection has {len} records)")]
    NotFound { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_index_and_size() {
        let err = CoreError::NotFound { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Record not found: index 7 (collection has 3 records)"
        );
    }
}
