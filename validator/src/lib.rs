//! Generic constraint-validation engine for ISO 20022 record graphs
//!
//! One algorithm walks an arbitrarily deep, heterogeneous tree of typed
//! records (scalars, optional fields, nested records, ordered collections)
//! and produces a path-qualified report of every constraint violation,
//! without being specialized per message type. It supports:
//!
//! - Facet constraints (pattern, length, numeric ranges, digit counts,
//!   required-ness, collection cardinality)
//! - Enumeration membership implied by a field's declared code-set type
//! - Strict (fail-fast) and exhaustive error-collection modes
//! - Full and condensed YAML report shapes
//! - Read-only constraint introspection per record type
//!
//! The engine consumes the descriptor tables and value views defined in
//! `iso20022-core`; the record definitions themselves live in message-set
//! crates such as `iso20022-messages`.

mod checks;
pub mod context;
pub mod engine;
pub mod introspect;
pub mod report;

pub use context::{ValidationContext, DEFAULT_MAX_DEPTH};
pub use engine::ValidationEngine;
pub use introspect::{field_constraints, FieldConstraints};
pub use report::{ValidationError, ValidationReport};

use iso20022_core::{FieldView, Record, RecordDescriptor, Result};

/// Validate the fields of one record without recursing into nested records.
///
/// Strict mode stops at the first field with an error; exhaustive mode
/// visits every field.
#[must_use]
pub fn validate_record(record: &dyn Record, strict: bool) -> ValidationReport {
    ValidationEngine::new().validate_record(record, strict)
}

/// Validate a complete message graph, recursing through nested records and
/// collections.
///
/// # Errors
///
/// Returns an error for pathologically deep graphs; constraint violations
/// accumulate in the returned report instead.
pub fn validate_message(root: &dyn Record, strict: bool) -> Result<ValidationReport> {
    ValidationEngine::new().validate_message(root, strict)
}

/// Validate a homogeneous collection of message graphs as one pass, with
/// index-qualified error paths.
///
/// # Errors
///
/// Returns an error for pathologically deep graphs; constraint violations
/// accumulate in the returned report instead.
pub fn validate_batch(roots: &[&dyn Record], strict: bool) -> Result<ValidationReport> {
    ValidationEngine::new().validate_batch(roots, strict)
}

/// Validate a single value against one field's declared constraints.
///
/// # Errors
///
/// Returns an error when the record type has no field of that name.
pub fn validate_field(
    descriptor: &'static RecordDescriptor,
    field_name: &str,
    value: &FieldView<'_>,
) -> Result<ValidationReport> {
    ValidationEngine::new().validate_field(descriptor, field_name, value)
}
