//! Read-only constraint introspection
//!
//! Exposes, for any record type, the full constraint-metadata map for all of
//! its fields plus each field's declared type and default. Used by tooling
//! to see what rules exist without running a validation.

use indexmap::IndexMap;
use iso20022_core::{RecordDescriptor, TypeTag};
use serde::Serialize;

/// The declared rules of one field, in serializable form.
#[derive(Debug, Clone, Serialize)]
pub struct FieldConstraints {
    /// Declared type name (`text`, `decimal`, a code set name, ...)
    pub field_type: String,
    /// Whether the field holds an ordered collection
    pub multivalued: bool,
    /// XML element or attribute name, if the schema declares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml_name: Option<&'static str>,
    /// Textual default value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    /// Constraint-kind wire name mapped to its parameter, declared order
    pub constraints: IndexMap<&'static str, serde_json::Value>,
    /// Valid member codes when the declared type is a code set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_members: Option<&'static [&'static str]>,
}

/// Constraint-metadata map for every field of a record type, declared order.
#[must_use]
pub fn field_constraints(
    descriptor: &'static RecordDescriptor,
) -> IndexMap<&'static str, FieldConstraints> {
    descriptor
        .fields
        .iter()
        .map(|fd| {
            let constraints = fd
                .constraints
                .iter()
                .map(|c| (c.kind().as_str(), c.parameter()))
                .collect();
            let enum_members = match fd.type_tag {
                TypeTag::Enum(desc) => Some(desc.members),
                _ => None,
            };
            (
                fd.name,
                FieldConstraints {
                    field_type: fd.type_tag.name().to_string(),
                    multivalued: fd.multivalued,
                    xml_name: fd.xml_name,
                    default: fd.default,
                    constraints,
                    enum_members,
                },
            )
        })
        .collect()
}
