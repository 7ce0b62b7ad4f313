//! ISO 20022 message-set record definitions
//!
//! Hand-declared bindings for representative message sets: plain structs
//! with `Option`/`Vec` fields, a static descriptor table per record type,
//! and a [`iso20022_core::Record`] implementation so the generic validation
//! engine can traverse instances. The constraint metadata (lengths,
//! patterns, digit facets, occurrence counts, code sets) carries the facet
//! values of the published schemas.

pub mod pacs008;
