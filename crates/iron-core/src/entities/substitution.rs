use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{CourseId, StudentId, SubstitutionId};

/// A request to let `substitute_course_id` count wherever
/// `original_course_id` is expected.
///
/// Unapproved substitutions are pending data and have no effect on an audit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Substitution {
    pub id: SubstitutionId,
    pub student_id: StudentId,
    pub original_course_id: CourseId,
    pub substitute_course_id: CourseId,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
