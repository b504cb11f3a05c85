use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{CourseId, EnrollmentId, StudentId};

const fn default_completed() -> bool {
    true
}

/// A student's enrollment in a course. Append-only history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: StudentId,
    pub course_id: CourseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// Term label, e.g. `Fall`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Only completed enrollments earn credit.
    #[serde(default = "default_completed")]
    pub completed: bool,
}
