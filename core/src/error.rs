//! Error types for ISO 20022 validation operations

use thiserror::Error;

/// Main error type for validation engine operations.
///
/// These are programmer or resource errors raised on the call itself.
/// Constraint violations found in message data are never reported through
/// this type; they accumulate in a `ValidationReport` instead.
#[derive(Error, Debug)]
pub enum Iso20022Error {
    /// A field name was requested that does not exist on the record type
    #[error("Field '{field}' not found in record type '{record}'")]
    UnknownField {
        /// Record type that was inspected
        record: String,
        /// Field name that was requested
        field: String,
    },

    /// Recursive traversal exceeded the configured depth limit
    #[error("Record graph exceeds maximum validation depth of {limit}")]
    DepthExceeded {
        /// The depth limit in effect
        limit: usize,
    },

    /// Serialization of a report failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for validation engine operations
pub type Result<T> = std::result::Result<T, Iso20022Error>;

impl Iso20022Error {
    /// Create an unknown-field error
    #[must_use]
    pub fn unknown_field(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            record: record.into(),
            field: field.into(),
        }
    }
}
