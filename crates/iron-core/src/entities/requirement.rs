use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::eligibility::Eligibility;
use crate::enums::RequirementKind;
use crate::ids::RequirementId;

/// A named rule: earn `credits_required` from courses the eligibility accepts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Requirement {
    pub id: RequirementId,
    pub name: String,
    pub kind: RequirementKind,
    pub credits_required: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub eligibility: Eligibility,
}
