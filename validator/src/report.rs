//! Validation report structures
//!
//! A report accumulates errors and warnings during one validation pass and
//! is read-only once handed back to the caller. Two serialized shapes are
//! offered for human or log consumption: the full report and a condensed
//! summary with an error-kind histogram.

use indexmap::IndexMap;
use iso20022_core::{ConstraintKind, Iso20022Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single constraint violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Full dotted/bracketed path of the offending field, e.g. `grp_hdr.msg_id`
    /// or `cdt_trf_tx_inf[1].pmt_id.end_to_end_id`
    pub field: String,
    /// Display form of the offending value, `None` when the value was absent
    pub value: Option<String>,
    /// The violated constraint kind
    pub constraint: ConstraintKind,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field '{}': {}", self.field, self.message)
    }
}

/// Accumulated outcome of one validation pass.
///
/// Append-only while the engine runs; callers only read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Violations in the order they were found
    pub errors: Vec<ValidationError>,
    /// Warnings in the order they were raised
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pass found no errors
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a violation
    pub fn push_error(
        &mut self,
        field: impl Into<String>,
        value: Option<String>,
        constraint: ConstraintKind,
        message: impl Into<String>,
    ) {
        self.errors.push(ValidationError {
            field: field.into(),
            value,
            constraint,
            message: message.into(),
        });
    }

    /// Record a warning
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append everything from another report, paths untouched.
    ///
    /// Sub-results are produced with fully-qualified paths, so merging is a
    /// plain concatenation and can never double-prefix.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Histogram of error counts by constraint kind, first-seen order
    #[must_use]
    pub fn error_breakdown(&self) -> IndexMap<&'static str, usize> {
        let mut breakdown: IndexMap<&'static str, usize> = IndexMap::new();
        for error in &self.errors {
            *breakdown.entry(error.constraint.as_str()).or_insert(0) += 1;
        }
        breakdown
    }

    /// Full YAML report: status, counts and every error with its
    /// field, constraint, value and message.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML serialization fails.
    pub fn to_yaml(&self) -> iso20022_core::Result<String> {
        serde_yaml::to_string(&FullReport::from(self))
            .map_err(|e| Iso20022Error::Serialization(e.to_string()))
    }

    /// Condensed YAML summary: pass/fail, counts and, on failure, the
    /// error-kind histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML serialization fails.
    pub fn to_summary_yaml(&self) -> iso20022_core::Result<String> {
        serde_yaml::to_string(&SummaryReport::from(self))
            .map_err(|e| Iso20022Error::Serialization(e.to_string()))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "Validation passed");
        }
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  - {error}")?;
        }
        if !self.warnings.is_empty() {
            writeln!(f, "\nWarnings ({}):", self.warnings.len())?;
            for warning in &self.warnings {
                writeln!(f, "  - {warning}")?;
            }
        }
        Ok(())
    }
}

/// Serialized shape of the full report
#[derive(Serialize)]
struct FullReport<'a> {
    validation_status: &'static str,
    error_count: usize,
    warning_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FullReportError<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<&'a [String]>,
}

#[derive(Serialize)]
struct FullReportError<'a> {
    field: &'a str,
    constraint: &'static str,
    value: Option<&'a str>,
    message: &'a str,
}

impl<'a> From<&'a ValidationReport> for FullReport<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        let errors = (!report.errors.is_empty()).then(|| {
            report
                .errors
                .iter()
                .map(|e| FullReportError {
                    field: &e.field,
                    constraint: e.constraint.as_str(),
                    value: e.value.as_deref(),
                    message: &e.message,
                })
                .collect()
        });
        Self {
            validation_status: if report.is_valid() { "PASSED" } else { "FAILED" },
            error_count: report.errors.len(),
            warning_count: report.warnings.len(),
            errors,
            warnings: (!report.warnings.is_empty()).then_some(report.warnings.as_slice()),
        }
    }
}

/// Serialized shape of the condensed summary
#[derive(Serialize)]
struct SummaryReport {
    status: &'static str,
    errors: usize,
    warnings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_breakdown: Option<IndexMap<&'static str, usize>>,
}

impl From<&ValidationReport> for SummaryReport {
    fn from(report: &ValidationReport) -> Self {
        let error_breakdown = (!report.is_valid()).then(|| report.error_breakdown());
        Self {
            status: if report.is_valid() { "PASSED" } else { "FAILED" },
            errors: report.errors.len(),
            warnings: report.warnings.len(),
            error_breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failing_report() -> ValidationReport {
        let mut report = ValidationReport::new();
        report.push_error(
            "grp_hdr.msg_id",
            Some(String::new()),
            ConstraintKind::MinLength,
            "Length 0 is less than minimum required length 1",
        );
        report.push_error(
            "ccy",
            Some("usd".to_string()),
            ConstraintKind::Pattern,
            "Value 'usd' does not match required pattern '[A-Z]{3,3}'",
        );
        report.push_error(
            "instr_id",
            Some("x".repeat(40)),
            ConstraintKind::Pattern,
            "Value does not match required pattern",
        );
        report
    }

    #[test]
    fn validity_is_derived_from_errors() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid());
        report.push_warning("deprecated element");
        assert!(report.is_valid());
        report.push_error("msg_id", None, ConstraintKind::Required, "missing");
        assert!(!report.is_valid());
    }

    #[test]
    fn merge_concatenates_in_order_without_touching_paths() {
        let mut report = failing_report();
        let mut sub = ValidationReport::new();
        sub.push_error(
            "grp_hdr.sttlm_inf.sttlm_mtd",
            None,
            ConstraintKind::Required,
            "Field is required but value is absent",
        );
        sub.push_warning("grp_hdr: unknown element ignored");
        report.merge(sub);

        assert_eq!(report.errors.len(), 4);
        // sub-results arrive fully qualified, so the path is appended verbatim
        assert_eq!(report.errors[3].field, "grp_hdr.sttlm_inf.sttlm_mtd");
        assert_eq!(report.errors[0].field, "grp_hdr.msg_id");
        assert_eq!(report.warnings, vec!["grp_hdr: unknown element ignored"]);
    }

    #[test]
    fn breakdown_counts_by_kind_in_first_seen_order() {
        let breakdown = failing_report().error_breakdown();
        let entries: Vec<_> = breakdown.into_iter().collect();
        assert_eq!(entries, vec![("min_length", 1), ("pattern", 2)]);
    }

    #[test]
    fn full_yaml_reports_status_and_errors() {
        let yaml = failing_report().to_yaml().expect("serializes");
        assert!(yaml.contains("validation_status: FAILED"));
        assert!(yaml.contains("error_count: 3"));
        assert!(yaml.contains("field: grp_hdr.msg_id"));
        assert!(yaml.contains("constraint: min_length"));
    }

    #[test]
    fn summary_yaml_omits_breakdown_when_passing() {
        let report = ValidationReport::new();
        let yaml = report.to_summary_yaml().expect("serializes");
        assert!(yaml.contains("status: PASSED"));
        assert!(!yaml.contains("error_breakdown"));

        let yaml = failing_report().to_summary_yaml().expect("serializes");
        assert!(yaml.contains("status: FAILED"));
        assert!(yaml.contains("error_breakdown"));
        assert!(yaml.contains("pattern: 2"));
    }

    #[test]
    fn display_lists_errors_and_warnings() {
        let mut report = failing_report();
        report.push_warning("grp_hdr: unknown element ignored");
        let rendered = report.to_string();
        assert!(rendered.starts_with("Validation failed with 3 error(s):"));
        assert!(rendered.contains("Field 'grp_hdr.msg_id':"));
        assert!(rendered.contains("Warnings (1):"));
    }
}
