//! # iron-schema
//!
//! JSON Schema generation, validation, and registry for Ironclad.
//!
//! Input and report types are defined in `iron-core` with
//! `#[derive(JsonSchema)]`. This crate collects those schemas in a
//! [`SchemaRegistry`] so callers can validate an audit snapshot before
//! deserializing it, and export schemas for external tooling (`iron schema`).

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{AUDIT_INPUT, AUDIT_REPORT, SchemaRegistry};
