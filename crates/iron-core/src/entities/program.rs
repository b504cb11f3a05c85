use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Requirement;
use crate::ids::ProgramId;

/// A degree program and its requirements, in audit priority order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Program {
    pub id: ProgramId,
    pub code: String,
    pub name: String,
    pub total_credits_required: f64,
    /// Evaluated in this order; a course counts toward the first requirement
    /// that claims it.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}
