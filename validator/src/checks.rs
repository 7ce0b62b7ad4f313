//! Constraint checkers
//!
//! One checker per constraint kind, dispatched through an exhaustive match
//! on the tagged [`Constraint`] variant. Checkers append violations to the
//! report instead of raising, so exhaustive validation can collect several
//! violations per field. Every checker is a structural no-op for values its
//! kind does not apply to: a field's metadata may carry constraints that are
//! only relevant when the value has the expected shape, and type mismatches
//! are out of scope here.

use iso20022_core::{Constraint, ConstraintKind, EnumDescriptor, Scalar};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::report::ValidationReport;

/// Process-wide cache of compiled patterns. Message schemas reuse a small
/// set of facet patterns across thousands of fields.
static PATTERN_CACHE: Lazy<RwLock<HashMap<&'static str, Result<Regex, regex::Error>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Whether a constraint applies to each element of a collection rather than
/// to the collection as a whole.
pub(crate) fn applies_per_element(constraint: &Constraint) -> bool {
    matches!(
        constraint,
        Constraint::Pattern(_) | Constraint::MinLength(_) | Constraint::MaxLength(_)
    )
}

/// Check one constraint against a present scalar value.
pub(crate) fn check_scalar(
    constraint: &Constraint,
    field: &str,
    value: &Scalar<'_>,
    report: &mut ValidationReport,
) {
    match constraint {
        Constraint::Pattern(pattern) => check_pattern(field, value, pattern, report),
        Constraint::MinLength(min) => {
            if let Scalar::Text(s) = value {
                let len = s.chars().count();
                if len < *min {
                    report.push_error(
                        field,
                        Some(value.to_string()),
                        ConstraintKind::MinLength,
                        format!("Length {len} is less than minimum required length {min}"),
                    );
                }
            }
        }
        Constraint::MaxLength(max) => {
            if let Scalar::Text(s) = value {
                let len = s.chars().count();
                if len > *max {
                    report.push_error(
                        field,
                        Some(value.to_string()),
                        ConstraintKind::MaxLength,
                        format!("Length {len} exceeds maximum allowed length {max}"),
                    );
                }
            }
        }
        Constraint::MinInclusive(min) => {
            if let Some(n) = as_decimal(value) {
                if n < *min {
                    report.push_error(
                        field,
                        Some(value.to_string()),
                        ConstraintKind::MinInclusive,
                        format!("Value {n} is less than minimum allowed value {min}"),
                    );
                }
            }
        }
        Constraint::MaxInclusive(max) => {
            if let Some(n) = as_decimal(value) {
                if n > *max {
                    report.push_error(
                        field,
                        Some(value.to_string()),
                        ConstraintKind::MaxInclusive,
                        format!("Value {n} exceeds maximum allowed value {max}"),
                    );
                }
            }
        }
        Constraint::MinExclusive(min) => {
            if let Some(n) = as_decimal(value) {
                if n <= *min {
                    report.push_error(
                        field,
                        Some(value.to_string()),
                        ConstraintKind::MinExclusive,
                        format!("Value {n} must be greater than {min}"),
                    );
                }
            }
        }
        Constraint::MaxExclusive(max) => {
            if let Some(n) = as_decimal(value) {
                if n >= *max {
                    report.push_error(
                        field,
                        Some(value.to_string()),
                        ConstraintKind::MaxExclusive,
                        format!("Value {n} must be less than {max}"),
                    );
                }
            }
        }
        Constraint::TotalDigits(max) => {
            if let Scalar::Decimal(d) = value {
                // Digits of the absolute value, decimal point and sign ignored
                let digits = d
                    .abs()
                    .to_string()
                    .chars()
                    .filter(char::is_ascii_digit)
                    .count();
                if digits > *max as usize {
                    report.push_error(
                        field,
                        Some(value.to_string()),
                        ConstraintKind::TotalDigits,
                        format!("Total digits {digits} exceeds maximum allowed {max}"),
                    );
                }
            }
        }
        Constraint::FractionDigits(max) => {
            if let Scalar::Decimal(d) = value {
                // Scale comes from the value's exponent, not its formatting
                let places = d.scale();
                if places > *max {
                    report.push_error(
                        field,
                        Some(value.to_string()),
                        ConstraintKind::FractionDigits,
                        format!("Fraction digits {places} exceeds maximum allowed {max}"),
                    );
                }
            }
        }
        // Absence is decided before dispatch; a present value satisfies it
        Constraint::Required(_) => {}
        // Cardinality never applies to scalars
        Constraint::MinOccurs(_) | Constraint::MaxOccurs(_) => {}
    }
}

/// Check collection cardinality constraints against an element count.
pub(crate) fn check_occurs(
    constraint: &Constraint,
    field: &str,
    len: usize,
    report: &mut ValidationReport,
) {
    match constraint {
        Constraint::MinOccurs(min) => {
            if len < *min {
                report.push_error(
                    field,
                    None,
                    ConstraintKind::MinOccurs,
                    format!("Collection has {len} items but minimum required is {min}"),
                );
            }
        }
        Constraint::MaxOccurs(max) => {
            if len > *max {
                report.push_error(
                    field,
                    None,
                    ConstraintKind::MaxOccurs,
                    format!("Collection has {len} items but maximum allowed is {max}"),
                );
            }
        }
        _ => {}
    }
}

/// Check enumeration membership for a field whose declared type is a code
/// set. An enum scalar is accepted when its code is a member; a text scalar
/// is accepted when it converts into the set. Everything else is an `enum`
/// error listing the valid members.
pub(crate) fn check_enum(
    field: &str,
    value: &Scalar<'_>,
    expected: &'static EnumDescriptor,
    report: &mut ValidationReport,
) {
    let code = match value {
        Scalar::Enum { code, .. } | Scalar::Text(code) => *code,
        other => {
            report.push_error(
                field,
                Some(other.to_string()),
                ConstraintKind::Enum,
                format!(
                    "Value '{other}' is not a valid {} value. Valid values: {:?}",
                    expected.name, expected.members
                ),
            );
            return;
        }
    };
    if expected.try_from_code(code).is_none() {
        report.push_error(
            field,
            Some(code.to_string()),
            ConstraintKind::Enum,
            format!(
                "Value '{code}' is not a valid {} value. Valid values: {:?}",
                expected.name, expected.members
            ),
        );
    }
}

fn check_pattern(field: &str, value: &Scalar<'_>, pattern: &'static str, report: &mut ValidationReport) {
    let Scalar::Text(s) = value else {
        return; // patterns only apply to text
    };
    match matches_pattern(s, pattern) {
        Ok(true) => {}
        Ok(false) => report.push_error(
            field,
            Some((*s).to_string()),
            ConstraintKind::Pattern,
            format!("Value '{s}' does not match required pattern '{pattern}'"),
        ),
        // A malformed pattern is itself a pattern violation, never a panic
        // or an Err to the caller
        Err(e) => report.push_error(
            field,
            Some((*s).to_string()),
            ConstraintKind::Pattern,
            format!("Invalid regex pattern '{pattern}': {e}"),
        ),
    }
}

/// Match with the schema `pattern` facet convention: anchored at the start
/// only, unless the pattern itself anchors the end.
fn matches_pattern(value: &str, pattern: &'static str) -> Result<bool, regex::Error> {
    if let Some(cached) = PATTERN_CACHE
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .get(pattern)
    {
        return cached.as_ref().map(|re| re.is_match(value)).map_err(Clone::clone);
    }
    let compiled = Regex::new(&format!("\\A(?:{pattern})"));
    let result = compiled.as_ref().map(|re| re.is_match(value)).map_err(Clone::clone);
    PATTERN_CACHE
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .insert(pattern, compiled);
    result
}

fn as_decimal(value: &Scalar<'_>) -> Option<Decimal> {
    match value {
        Scalar::Integer(i) => Some(Decimal::from(*i)),
        Scalar::Decimal(d) => Some(*d),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn run(constraint: Constraint, value: Scalar<'_>) -> ValidationReport {
        let mut report = ValidationReport::new();
        check_scalar(&constraint, "f", &value, &mut report);
        report
    }

    #[test]
    fn pattern_is_start_anchored_prefix_match() {
        assert!(run(Constraint::Pattern("[A-Z]{3,3}"), Scalar::Text("USD")).is_valid());
        // Prefix-match convention: trailing input does not fail the facet
        assert!(run(Constraint::Pattern("[A-Z]{3,3}"), Scalar::Text("USDX")).is_valid());
        // But a non-matching start does
        let report = run(Constraint::Pattern("[A-Z]{3,3}"), Scalar::Text("usd"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].constraint, ConstraintKind::Pattern);
        assert!(report.errors[0]
            .message
            .contains("does not match required pattern"));
    }

    #[test]
    fn pattern_honours_explicit_end_anchor() {
        let report = run(Constraint::Pattern("[0-9]{1,15}$"), Scalar::Text("123abc"));
        assert!(!report.is_valid());
        assert!(run(Constraint::Pattern("[0-9]{1,15}$"), Scalar::Text("123")).is_valid());
    }

    #[test]
    fn malformed_pattern_reports_instead_of_raising() {
        let report = run(Constraint::Pattern("[unclosed"), Scalar::Text("abc"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].constraint, ConstraintKind::Pattern);
        assert!(report.errors[0].message.contains("Invalid regex pattern"));
    }

    #[test]
    fn pattern_skips_non_text_values() {
        assert!(run(Constraint::Pattern("[0-9]+"), Scalar::Decimal(dec!(12))).is_valid());
    }

    #[test]
    fn length_bounds_count_chars() {
        let report = run(Constraint::MinLength(1), Scalar::Text(""));
        assert_eq!(report.errors[0].constraint, ConstraintKind::MinLength);

        let long = "a".repeat(50);
        let report = run(Constraint::MaxLength(35), Scalar::Text(&long));
        assert_eq!(report.errors[0].constraint, ConstraintKind::MaxLength);
        assert!(report.errors[0].message.contains("Length 50"));

        // Multi-byte text is measured in characters, not bytes
        assert!(run(Constraint::MaxLength(3), Scalar::Text("äöü")).is_valid());
    }

    #[test]
    fn numeric_bounds_cover_integers_and_decimals() {
        let report = run(Constraint::MinInclusive(dec!(0)), Scalar::Decimal(dec!(-10.00)));
        assert_eq!(report.errors[0].constraint, ConstraintKind::MinInclusive);

        assert!(run(Constraint::MinInclusive(dec!(0)), Scalar::Decimal(dec!(0))).is_valid());
        assert!(!run(Constraint::MinExclusive(dec!(0)), Scalar::Integer(0)).is_valid());
        assert!(!run(Constraint::MaxExclusive(dec!(100)), Scalar::Integer(100)).is_valid());
        assert!(run(Constraint::MaxInclusive(dec!(100)), Scalar::Integer(100)).is_valid());
        // Structurally inapplicable: silently skipped
        assert!(run(Constraint::MinInclusive(dec!(0)), Scalar::Text("-10")).is_valid());
    }

    #[test]
    fn digit_facets_ignore_sign_and_point() {
        assert!(run(Constraint::TotalDigits(5), Scalar::Decimal(dec!(-123.45))).is_valid());
        let report = run(Constraint::TotalDigits(4), Scalar::Decimal(dec!(-123.45)));
        assert_eq!(report.errors[0].constraint, ConstraintKind::TotalDigits);

        assert!(run(Constraint::FractionDigits(2), Scalar::Decimal(dec!(0.25))).is_valid());
        let report = run(Constraint::FractionDigits(2), Scalar::Decimal(dec!(0.125)));
        assert_eq!(report.errors[0].constraint, ConstraintKind::FractionDigits);
        // Scale counts declared places, so 1.10 has two fraction digits
        assert!(!run(Constraint::FractionDigits(1), Scalar::Decimal(dec!(1.10))).is_valid());
    }

    #[test]
    fn occurs_checks_apply_to_lengths_only() {
        let mut report = ValidationReport::new();
        check_occurs(&Constraint::MinOccurs(1), "tx", 0, &mut report);
        assert_eq!(report.errors[0].constraint, ConstraintKind::MinOccurs);
        assert!(report.errors[0].field == "tx");

        let mut report = ValidationReport::new();
        check_occurs(&Constraint::MaxOccurs(7), "adr_line", 8, &mut report);
        assert_eq!(report.errors[0].constraint, ConstraintKind::MaxOccurs);

        // Cardinality never fires through the scalar dispatch
        assert!(run(Constraint::MinOccurs(1), Scalar::Text("x")).is_valid());
    }

    #[test]
    fn enum_membership_accepts_convertible_text() {
        static METHODS: EnumDescriptor = EnumDescriptor {
            name: "SettlementMethod1Code",
            members: &["INDA", "INGA", "COVE", "CLRG"],
        };
        let mut report = ValidationReport::new();
        check_enum("sttlm_mtd", &Scalar::Text("INDA"), &METHODS, &mut report);
        assert!(report.is_valid());

        let mut report = ValidationReport::new();
        check_enum("sttlm_mtd", &Scalar::Text("WIRE"), &METHODS, &mut report);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].constraint, ConstraintKind::Enum);
        assert!(report.errors[0].message.contains("Valid values"));
        assert!(report.errors[0].message.contains("INDA"));
    }
}
