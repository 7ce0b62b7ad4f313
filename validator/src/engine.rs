//! Validation engine: shallow record pass and recursive tree walker
//!
//! The two concerns stay decoupled: [`ValidationEngine::validate_record`]
//! checks the fields of exactly one record against their declared
//! constraints and never recurses; [`ValidationEngine::validate_message`]
//! layers graph traversal on top, applying the shallow pass to every record
//! it reaches and qualifying each error with the path to its node.

use iso20022_core::{Constraint, FieldDescriptor, FieldView, Record, Result, TypeTag};
use tracing::{debug, trace};

use crate::checks;
use crate::context::{ValidationContext, DEFAULT_MAX_DEPTH};
use crate::report::ValidationReport;

/// The constraint-validation engine.
///
/// Stateless across calls: every top-level validation owns its own
/// [`ValidationContext`], so one engine instance may serve concurrent
/// validations of independent record graphs.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    max_depth: usize,
}

impl ValidationEngine {
    /// Create an engine with the default recursion bound
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create an engine with a custom recursion bound
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Validate the fields of one record, without recursing into nested
    /// records or collection elements that are themselves records.
    ///
    /// In strict mode the pass stops at the first field that produced an
    /// error; otherwise every field is visited.
    #[must_use]
    pub fn validate_record(&self, record: &dyn Record, strict: bool) -> ValidationReport {
        let mut report = ValidationReport::new();
        let ctx = ValidationContext::new(self.max_depth);
        self.record_pass(record, strict, &ctx, &mut report);
        report
    }

    /// Validate a complete record graph, recursing through nested records
    /// and collections and qualifying every error with its full path.
    ///
    /// # Errors
    ///
    /// Returns [`iso20022_core::Iso20022Error::DepthExceeded`] when the
    /// graph is deeper than the engine's recursion bound. Constraint
    /// violations never surface here; they accumulate in the report.
    pub fn validate_message(&self, root: &dyn Record, strict: bool) -> Result<ValidationReport> {
        debug!(
            record = root.descriptor().name,
            strict, "validating message tree"
        );
        let mut ctx = ValidationContext::new(self.max_depth);
        let mut report = ValidationReport::new();
        self.walk_record(root, strict, &mut ctx, &mut report)?;
        debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "message validation finished"
        );
        Ok(report)
    }

    /// Validate a homogeneous collection of record graphs as one pass.
    ///
    /// Errors are qualified with the element's index (`[i]...`); in strict
    /// mode the pass stops at the first invalid element.
    ///
    /// # Errors
    ///
    /// Returns [`iso20022_core::Iso20022Error::DepthExceeded`] when any
    /// graph is deeper than the engine's recursion bound.
    pub fn validate_batch(
        &self,
        roots: &[&dyn Record],
        strict: bool,
    ) -> Result<ValidationReport> {
        let mut ctx = ValidationContext::new(self.max_depth);
        let mut report = ValidationReport::new();
        for (i, root) in roots.iter().enumerate() {
            ctx.push_index(i);
            let walked = self.walk_record(*root, strict, &mut ctx, &mut report);
            ctx.pop();
            walked?;
            if strict && !report.is_valid() {
                break;
            }
        }
        Ok(report)
    }

    /// Validate a single value against one field's declared constraints,
    /// in exhaustive mode.
    ///
    /// # Errors
    ///
    /// Returns [`iso20022_core::Iso20022Error::UnknownField`] when the
    /// record type has no field of that name.
    pub fn validate_field(
        &self,
        descriptor: &'static iso20022_core::RecordDescriptor,
        field_name: &str,
        value: &FieldView<'_>,
    ) -> Result<ValidationReport> {
        let Some((_, fd)) = descriptor.field(field_name) else {
            return Err(iso20022_core::Iso20022Error::unknown_field(
                descriptor.name,
                field_name,
            ));
        };
        let mut report = ValidationReport::new();
        let ctx = ValidationContext::new(self.max_depth);
        self.check_field(fd, value, false, &ctx, &mut report);
        Ok(report)
    }

    fn walk_record(
        &self,
        record: &dyn Record,
        strict: bool,
        ctx: &mut ValidationContext,
        report: &mut ValidationReport,
    ) -> Result<()> {
        ctx.enter()?;
        trace!(record = record.descriptor().name, path = %ctx.prefix(), "descending");

        // Field-shape errors for this node, attributed at the node's path
        self.record_pass(record, strict, ctx, report);

        // Then descend into every present nested value
        if !strict || report.is_valid() {
            for (index, fd) in record.descriptor().fields.iter().enumerate() {
                match record.field(index) {
                    FieldView::Record(child) => {
                        ctx.push(fd.name);
                        let walked = self.walk_record(child, strict, ctx, report);
                        ctx.pop();
                        walked?;
                    }
                    FieldView::List(items) => {
                        ctx.push(fd.name);
                        let walked = self.walk_list(&items, strict, ctx, report);
                        ctx.pop();
                        walked?;
                    }
                    // Scalars were covered by the shallow pass above
                    FieldView::Absent | FieldView::Scalar(_) => {}
                }
                if strict && !report.is_valid() {
                    break;
                }
            }
        }

        ctx.leave();
        Ok(())
    }

    fn walk_list(
        &self,
        items: &[FieldView<'_>],
        strict: bool,
        ctx: &mut ValidationContext,
        report: &mut ValidationReport,
    ) -> Result<()> {
        for (i, item) in items.iter().enumerate() {
            if let FieldView::Record(child) = item {
                ctx.push_index(i);
                let walked = self.walk_record(*child, strict, ctx, report);
                ctx.pop();
                walked?;
            }
            if strict && !report.is_valid() {
                break;
            }
        }
        Ok(())
    }

    /// Shallow pass over one record's fields in declared order.
    fn record_pass(
        &self,
        record: &dyn Record,
        strict: bool,
        ctx: &ValidationContext,
        report: &mut ValidationReport,
    ) {
        for (index, fd) in record.descriptor().fields.iter().enumerate() {
            let view = record.field(index);
            self.check_field(fd, &view, strict, ctx, report);
            if strict && !report.is_valid() {
                break;
            }
        }
    }

    /// Apply every structurally relevant declared constraint to one field's
    /// current value.
    fn check_field(
        &self,
        fd: &FieldDescriptor,
        view: &FieldView<'_>,
        strict: bool,
        ctx: &ValidationContext,
        report: &mut ValidationReport,
    ) {
        let field = ctx.qualify(fd.name);
        match view {
            // An absent optional value is never faulted for anything else
            FieldView::Absent => {
                if fd.is_required() {
                    report.push_error(
                        field,
                        None,
                        iso20022_core::ConstraintKind::Required,
                        "Field is required but value is absent",
                    );
                }
            }
            FieldView::List(items) => {
                // Cardinality applies to the collection as a whole
                for constraint in fd.constraints {
                    checks::check_occurs(constraint, &field, items.len(), report);
                    if strict && !report.is_valid() {
                        return;
                    }
                }
                // Per-element constraints apply to each element, with
                // index-qualified naming, never to the collection itself
                let element_constraints: Vec<&Constraint> = fd
                    .constraints
                    .iter()
                    .filter(|c| checks::applies_per_element(c))
                    .collect();
                if element_constraints.is_empty() {
                    return;
                }
                for (i, item) in items.iter().enumerate() {
                    let Some(scalar) = item.as_scalar() else {
                        continue;
                    };
                    let element = format!("{field}[{i}]");
                    for &constraint in &element_constraints {
                        checks::check_scalar(constraint, &element, scalar, report);
                        if strict && !report.is_valid() {
                            return;
                        }
                    }
                }
            }
            FieldView::Scalar(scalar) => {
                for constraint in fd.constraints {
                    checks::check_scalar(constraint, &field, scalar, report);
                    if strict && !report.is_valid() {
                        return;
                    }
                }
                if let TypeTag::Enum(expected) = fd.type_tag {
                    checks::check_enum(&field, scalar, expected, report);
                }
            }
            // Nested records are the tree walker's job
            FieldView::Record(_) => {}
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
