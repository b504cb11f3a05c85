//! # iron-core
//!
//! Core types shared across all Ironclad crates.
//!
//! This crate provides:
//! - Typed identifiers for every record kind
//! - Entity structs for the reference data an audit consumes (courses,
//!   programs, requirements, students, enrollments, substitutions)
//! - The closed requirement-kind and eligibility types
//! - Derived report types (`RequirementProgress`, `AuditReport`)
//! - The audit policy knobs and the engine error type
//!
//! Nothing in here performs I/O. Loading data is the caller's job; computing
//! the audit lives in `iron-engine`.

pub mod eligibility;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod input;
pub mod policy;
pub mod report;
