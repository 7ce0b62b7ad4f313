//! Core types for ISO 20022 message validation
//!
//! This crate carries everything the validation engine and the message-set
//! bindings share: the constraint metadata model, static record/enum
//! descriptors, the borrowed runtime value views, and the error types.
//! The engine itself lives in `iso20022-validator`; the per-message-set
//! record definitions live in `iso20022-messages`.

pub mod constraint;
pub mod descriptor;
pub mod error;
pub mod value;

pub use constraint::{Constraint, ConstraintKind};
pub use descriptor::{EnumCode, EnumDescriptor, FieldDescriptor, RecordDescriptor, TypeTag};
pub use error::{Iso20022Error, Result};
pub use value::{FieldView, Record, Scalar};
