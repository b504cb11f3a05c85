use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{ProgramId, StudentId};

/// The student being audited.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// External student number printed on transcripts.
    pub student_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub program_id: ProgramId,
}
