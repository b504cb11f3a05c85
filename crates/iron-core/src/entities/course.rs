use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::CourseId;

/// A catalog course. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Course {
    pub id: CourseId,
    /// Unique human key, e.g. `CS31`.
    pub course_code: String,
    pub name: String,
    pub credits: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
