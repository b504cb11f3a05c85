//! The bundle of already-loaded data a caller hands to the engine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Course, Enrollment, Program, Student, Substitution};

/// Everything an audit needs, loaded by the caller.
///
/// `substitutions` should include unapproved records too; the engine ignores
/// them itself.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AuditInput {
    pub student: Student,
    pub program: Program,
    /// Full course catalog, used to resolve credits and suggest missing courses.
    pub catalog: Vec<Course>,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
}
