//! Static schema descriptors for record types
//!
//! The schema is explicit: every record type carries an enumerable table of
//! `(field name, declared type, constraints)` entries that the engine and
//! introspection tooling query directly. Descriptor tables are plain statics
//! built by the message crates, one per record type.

use crate::constraint::Constraint;

/// Declared type of a field, independent of any runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// Text value
    Text,
    /// Whole number
    Integer,
    /// Exact decimal (amounts, rates)
    Decimal,
    /// Boolean indicator
    Boolean,
    /// Calendar date
    Date,
    /// Date with time of day
    DateTime,
    /// Member of the referenced code set
    Enum(&'static EnumDescriptor),
    /// Nested record of the named type
    Record(&'static str),
}

impl TypeTag {
    /// Human-readable name of the declared type
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Text => "text",
            TypeTag::Integer => "integer",
            TypeTag::Decimal => "decimal",
            TypeTag::Boolean => "boolean",
            TypeTag::Date => "date",
            TypeTag::DateTime => "datetime",
            TypeTag::Enum(desc) => desc.name,
            TypeTag::Record(name) => name,
        }
    }
}

/// Static description of one field of a record type.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Logical (Rust) field name, used in validation paths
    pub name: &'static str,
    /// XML element or attribute name from the message schema, if any
    pub xml_name: Option<&'static str>,
    /// Declared type of the field (of each element, when multivalued)
    pub type_tag: TypeTag,
    /// Whether the field holds an ordered collection
    pub multivalued: bool,
    /// Declared constraints, checked in order
    pub constraints: &'static [Constraint],
    /// Textual default value, if the schema declares one
    pub default: Option<&'static str>,
}

impl FieldDescriptor {
    /// Whether the field's metadata marks it required
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| matches!(c, Constraint::Required(true)))
    }
}

/// Static description of a record type: name plus ordered field table.
#[derive(Debug)]
pub struct RecordDescriptor {
    /// Record type name as declared by the message schema
    pub name: &'static str,
    /// Fields in declared order
    pub fields: &'static [FieldDescriptor],
}

impl RecordDescriptor {
    /// Look up a field by logical name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldDescriptor)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, fd)| fd.name == name)
    }
}

/// Static description of an enumerated code set.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Code set type name
    pub name: &'static str,
    /// Valid member codes, in declared order
    pub members: &'static [&'static str],
}

impl EnumDescriptor {
    /// Fallible lookup of a raw code in the member set.
    ///
    /// Returns the canonical member on success. This replaces
    /// exception-driven "construct and catch" enum coercion.
    #[must_use]
    pub fn try_from_code(&self, code: &str) -> Option<&'static str> {
        self.members.iter().copied().find(|m| *m == code)
    }

    /// Whether a raw code is a member of the set
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.try_from_code(code).is_some()
    }
}

/// Implemented by message enums so field views can expose their code and set.
pub trait EnumCode {
    /// The code set this enum belongs to
    fn descriptor() -> &'static EnumDescriptor;

    /// The wire code of this member
    fn code(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    static CURRENCIES: EnumDescriptor = EnumDescriptor {
        name: "TestCurrencyCode",
        members: &["EUR", "GBP", "USD"],
    };

    #[test]
    fn enum_lookup_is_exact() {
        assert_eq!(CURRENCIES.try_from_code("GBP"), Some("GBP"));
        assert_eq!(CURRENCIES.try_from_code("gbp"), None);
        assert!(!CURRENCIES.contains("XXX"));
    }

    #[test]
    fn required_flag_reads_from_constraints() {
        static FIELDS: [FieldDescriptor; 2] = [
            FieldDescriptor {
                name: "msg_id",
                xml_name: Some("MsgId"),
                type_tag: TypeTag::Text,
                multivalued: false,
                constraints: &[Constraint::Required(true), Constraint::MaxLength(35)],
                default: None,
            },
            FieldDescriptor {
                name: "instr_id",
                xml_name: Some("InstrId"),
                type_tag: TypeTag::Text,
                multivalued: false,
                constraints: &[Constraint::MaxLength(35)],
                default: None,
            },
        ];
        assert!(FIELDS[0].is_required());
        assert!(!FIELDS[1].is_required());
    }
}
