//! Runtime value views over record fields
//!
//! The engine never owns message data. A record exposes each of its fields
//! as a borrowed [`FieldView`], and the engine dispatches on that runtime
//! shape: absent, scalar, nested record, or ordered collection.

use crate::descriptor::{EnumCode, EnumDescriptor, RecordDescriptor};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;

/// A borrowed scalar value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    /// Text value
    Text(&'a str),
    /// Whole number
    Integer(i64),
    /// Exact decimal
    Decimal(Decimal),
    /// Boolean indicator
    Boolean(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Date with time of day
    DateTime(NaiveDateTime),
    /// Enumerated code together with its code set
    Enum {
        /// Wire code of the value
        code: &'a str,
        /// Code set the value claims membership of
        descriptor: &'static EnumDescriptor,
    },
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Decimal(d) => write!(f, "{d}"),
            Scalar::Boolean(b) => write!(f, "{b}"),
            Scalar::Date(d) => write!(f, "{d}"),
            Scalar::DateTime(dt) => write!(f, "{dt}"),
            Scalar::Enum { code, .. } => f.write_str(code),
        }
    }
}

/// The runtime shape of one field of a record.
pub enum FieldView<'a> {
    /// No value present
    Absent,
    /// A single scalar value
    Scalar(Scalar<'a>),
    /// A nested record
    Record(&'a dyn Record),
    /// An ordered collection of scalars or records
    List(Vec<FieldView<'a>>),
}

impl<'a> FieldView<'a> {
    /// View over an optional text field
    #[must_use]
    pub fn opt_text(value: &'a Option<String>) -> Self {
        match value {
            Some(s) => FieldView::Scalar(Scalar::Text(s)),
            None => FieldView::Absent,
        }
    }

    /// View over an optional decimal field
    #[must_use]
    pub fn opt_decimal(value: &Option<Decimal>) -> Self {
        match value {
            Some(d) => FieldView::Scalar(Scalar::Decimal(*d)),
            None => FieldView::Absent,
        }
    }

    /// View over an optional integer field
    #[must_use]
    pub fn opt_integer(value: &Option<i64>) -> Self {
        match value {
            Some(i) => FieldView::Scalar(Scalar::Integer(*i)),
            None => FieldView::Absent,
        }
    }

    /// View over an optional boolean field
    #[must_use]
    pub fn opt_boolean(value: &Option<bool>) -> Self {
        match value {
            Some(b) => FieldView::Scalar(Scalar::Boolean(*b)),
            None => FieldView::Absent,
        }
    }

    /// View over an optional date field
    #[must_use]
    pub fn opt_date(value: &Option<NaiveDate>) -> Self {
        match value {
            Some(d) => FieldView::Scalar(Scalar::Date(*d)),
            None => FieldView::Absent,
        }
    }

    /// View over an optional datetime field
    #[must_use]
    pub fn opt_datetime(value: &Option<NaiveDateTime>) -> Self {
        match value {
            Some(dt) => FieldView::Scalar(Scalar::DateTime(*dt)),
            None => FieldView::Absent,
        }
    }

    /// View over an optional enumerated code field
    #[must_use]
    pub fn opt_code<E: EnumCode>(value: &Option<E>) -> Self {
        match value {
            Some(e) => FieldView::Scalar(Scalar::Enum {
                code: e.code(),
                descriptor: E::descriptor(),
            }),
            None => FieldView::Absent,
        }
    }

    /// View over an optional nested record field
    #[must_use]
    pub fn opt_record<R: Record>(value: &'a Option<R>) -> Self {
        match value {
            Some(r) => FieldView::Record(r),
            None => FieldView::Absent,
        }
    }

    /// View over a collection of text values
    #[must_use]
    pub fn text_list(values: &'a [String]) -> Self {
        FieldView::List(
            values
                .iter()
                .map(|s| FieldView::Scalar(Scalar::Text(s)))
                .collect(),
        )
    }

    /// View over a collection of nested records
    #[must_use]
    pub fn record_list<R: Record>(values: &'a [R]) -> Self {
        FieldView::List(
            values
                .iter()
                .map(|r| FieldView::Record(r as &dyn Record))
                .collect(),
        )
    }

    /// The scalar inside this view, if it holds one
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar<'a>> {
        match self {
            FieldView::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

/// A typed message record the engine can traverse.
///
/// Every message struct implements this: a pointer to its static descriptor
/// table plus positional access to its field values. Field indices follow
/// the descriptor's declared order.
pub trait Record {
    /// The static schema of this record type
    fn descriptor(&self) -> &'static RecordDescriptor;

    /// Borrowed view of the field at `index` in declared order.
    ///
    /// Implementations may panic on an out-of-range index; the engine only
    /// asks for indices taken from the descriptor table.
    fn field(&self, index: usize) -> FieldView<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn optional_views_collapse_to_absent() {
        assert!(matches!(FieldView::opt_text(&None), FieldView::Absent));
        let value = Some("NOTPROVIDED".to_string());
        assert!(matches!(
            FieldView::opt_text(&value),
            FieldView::Scalar(Scalar::Text("NOTPROVIDED"))
        ));
    }

    #[test]
    fn scalar_display_matches_wire_form() {
        assert_eq!(Scalar::Decimal(dec!(100.50)).to_string(), "100.50");
        assert_eq!(Scalar::Text("USD").to_string(), "USD");
        assert_eq!(Scalar::Integer(-3).to_string(), "-3");
    }

    #[test]
    fn text_list_views_each_element() {
        let lines = vec!["line one".to_string(), "line two".to_string()];
        match FieldView::text_list(&lines) {
            FieldView::List(items) => {
                assert_eq!(items.len(), 2);
                assert!(matches!(
                    items[1],
                    FieldView::Scalar(Scalar::Text("line two"))
                ));
            }
            _ => panic!("expected a list view"),
        }
    }
}
