//! Requirement kinds, audit status, and warning classifications.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for display and table rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RequirementKind
// ---------------------------------------------------------------------------

/// Category a requirement belongs to within a degree program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    Core,
    Elective,
    GeneralEd,
    Major,
}

impl RequirementKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Elective => "elective",
            Self::GeneralEd => "general_ed",
            Self::Major => "major",
        }
    }

    /// Whether an unmet requirement of this kind blocks progress outright.
    ///
    /// Electives can be satisfied by many interchangeable courses; core and
    /// major requirements name specific coursework.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Core | Self::Major)
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditStatus
// ---------------------------------------------------------------------------

/// Overall standing of a student against their program.
///
/// `Completed` takes precedence over both other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    OnTrack,
    AtRisk,
    Completed,
}

impl AuditStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "on_track",
            Self::AtRisk => "at_risk",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WarningKind
// ---------------------------------------------------------------------------

/// Why a record was excluded from the audit computation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The record points at a course id that is not in the catalog.
    UnknownCourseReference,
    /// The record belongs to a different student than the one being audited.
    ForeignRecord,
    /// The same course was completed more than once; only one completion counts.
    DuplicateEnrollment,
}

impl WarningKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownCourseReference => "unknown_course_reference",
            Self::ForeignRecord => "foreign_record",
            Self::DuplicateEnrollment => "duplicate_enrollment",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecordSource
// ---------------------------------------------------------------------------

/// The kind of input record a warning refers to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    Enrollment,
    Substitution,
    Requirement,
}

impl RecordSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enrollment => "enrollment",
            Self::Substitution => "substitution",
            Self::Requirement => "requirement",
        }
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
