//! Declarative constraint metadata attached to record fields
//!
//! Constraints are the XSD facets the schema declares for a field, carried
//! as static data on the field descriptor. Each constraint is a tagged
//! variant so the checking side can dispatch with an exhaustive `match`
//! instead of probing an untyped parameter at runtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single declared constraint: kind plus parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Regex the value must match, anchored at the start (XSD `pattern` facet)
    Pattern(&'static str),
    /// Minimum length of a text value, or of each element of a collection
    MinLength(usize),
    /// Maximum length of a text value, or of each element of a collection
    MaxLength(usize),
    /// Minimum numeric value, inclusive
    MinInclusive(Decimal),
    /// Maximum numeric value, inclusive
    MaxInclusive(Decimal),
    /// Minimum numeric value, exclusive
    MinExclusive(Decimal),
    /// Maximum numeric value, exclusive
    MaxExclusive(Decimal),
    /// Maximum total digits of a decimal value, sign and point ignored
    TotalDigits(u32),
    /// Maximum digits after the decimal point
    FractionDigits(u32),
    /// Whether an absent value is a violation
    Required(bool),
    /// Minimum element count of a collection
    MinOccurs(usize),
    /// Maximum element count of a collection
    MaxOccurs(usize),
}

impl Constraint {
    /// The taxonomy kind of this constraint
    #[must_use]
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Pattern(_) => ConstraintKind::Pattern,
            Constraint::MinLength(_) => ConstraintKind::MinLength,
            Constraint::MaxLength(_) => ConstraintKind::MaxLength,
            Constraint::MinInclusive(_) => ConstraintKind::MinInclusive,
            Constraint::MaxInclusive(_) => ConstraintKind::MaxInclusive,
            Constraint::MinExclusive(_) => ConstraintKind::MinExclusive,
            Constraint::MaxExclusive(_) => ConstraintKind::MaxExclusive,
            Constraint::TotalDigits(_) => ConstraintKind::TotalDigits,
            Constraint::FractionDigits(_) => ConstraintKind::FractionDigits,
            Constraint::Required(_) => ConstraintKind::Required,
            Constraint::MinOccurs(_) => ConstraintKind::MinOccurs,
            Constraint::MaxOccurs(_) => ConstraintKind::MaxOccurs,
        }
    }

    /// The constraint parameter as a JSON value, for introspection output
    #[must_use]
    pub fn parameter(&self) -> serde_json::Value {
        match self {
            Constraint::Pattern(p) => serde_json::Value::String((*p).to_string()),
            Constraint::MinLength(n) | Constraint::MaxLength(n) => (*n).into(),
            Constraint::MinOccurs(n) | Constraint::MaxOccurs(n) => (*n).into(),
            Constraint::MinInclusive(d)
            | Constraint::MaxInclusive(d)
            | Constraint::MinExclusive(d)
            | Constraint::MaxExclusive(d) => serde_json::Value::String(d.to_string()),
            Constraint::TotalDigits(n) | Constraint::FractionDigits(n) => (*n).into(),
            Constraint::Required(b) => (*b).into(),
        }
    }
}

/// Constraint kinds, doubling as the error taxonomy.
///
/// `Enum` has no `Constraint` counterpart: enumeration membership is implied
/// by a field's declared type rather than stored as metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Pattern,
    MinLength,
    MaxLength,
    MinInclusive,
    MaxInclusive,
    MinExclusive,
    MaxExclusive,
    TotalDigits,
    FractionDigits,
    Required,
    MinOccurs,
    MaxOccurs,
    Enum,
}

impl ConstraintKind {
    /// The wire name of the kind, as it appears in schema metadata and reports
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::Pattern => "pattern",
            ConstraintKind::MinLength => "min_length",
            ConstraintKind::MaxLength => "max_length",
            ConstraintKind::MinInclusive => "min_inclusive",
            ConstraintKind::MaxInclusive => "max_inclusive",
            ConstraintKind::MinExclusive => "min_exclusive",
            ConstraintKind::MaxExclusive => "max_exclusive",
            ConstraintKind::TotalDigits => "total_digits",
            ConstraintKind::FractionDigits => "fraction_digits",
            ConstraintKind::Required => "required",
            ConstraintKind::MinOccurs => "min_occurs",
            ConstraintKind::MaxOccurs => "max_occurs",
            ConstraintKind::Enum => "enum",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn kind_wire_names_are_snake_case() {
        assert_eq!(ConstraintKind::MinInclusive.as_str(), "min_inclusive");
        assert_eq!(ConstraintKind::Pattern.to_string(), "pattern");
        assert_eq!(
            serde_json::to_string(&ConstraintKind::FractionDigits).expect("serializes"),
            "\"fraction_digits\""
        );
    }

    #[test]
    fn constraint_maps_to_its_kind() {
        assert_eq!(
            Constraint::MinInclusive(dec!(0)).kind(),
            ConstraintKind::MinInclusive
        );
        assert_eq!(Constraint::MaxOccurs(7).kind(), ConstraintKind::MaxOccurs);
    }

    #[test]
    fn parameter_renders_for_introspection() {
        assert_eq!(
            Constraint::Pattern("[A-Z]{3,3}").parameter(),
            serde_json::json!("[A-Z]{3,3}")
        );
        assert_eq!(Constraint::MaxLength(35).parameter(), serde_json::json!(35));
        assert_eq!(
            Constraint::MinInclusive(dec!(0)).parameter(),
            serde_json::json!("0")
        );
    }
}
