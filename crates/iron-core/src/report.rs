//! Derived audit output.
//!
//! These types are never stored. The engine builds them fresh on every run and
//! the caller serializes them as JSON (or renders them elsewhere).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Course, Program, Student};
use crate::enums::{AuditStatus, RecordSource, RequirementKind, WarningKind};
use crate::ids::{CourseId, ProgramId, RequirementId, StudentId};

/// A course as it appears in a report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CourseSummary {
    pub course_id: CourseId,
    pub course_code: String,
    pub name: String,
    pub credits: f64,
    /// Code of the original course this one stands in for, when it was counted
    /// through an approved substitution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitutes_for: Option<String>,
}

impl CourseSummary {
    #[must_use]
    pub fn of(course: &Course) -> Self {
        Self {
            course_id: course.id,
            course_code: course.course_code.clone(),
            name: course.name.clone(),
            credits: course.credits,
            substitutes_for: None,
        }
    }

    #[must_use]
    pub fn substituting(course: &Course, original: &Course) -> Self {
        Self {
            substitutes_for: Some(original.course_code.clone()),
            ..Self::of(course)
        }
    }
}

/// Progress against a single requirement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RequirementProgress {
    pub requirement_id: RequirementId,
    pub requirement_name: String,
    pub requirement_type: RequirementKind,
    pub credits_required: f64,
    pub credits_completed: f64,
    /// `credits_completed / credits_required * 100`, uncapped so over-completion
    /// shows as e.g. `133.3`.
    pub percentage: f64,
    pub is_met: bool,
    pub completed_courses: Vec<CourseSummary>,
    /// A minimal set of eligible courses that would close the remaining gap.
    pub missing_courses: Vec<CourseSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudentSnapshot {
    pub id: StudentId,
    pub name: String,
    pub student_code: String,
}

impl From<&Student> for StudentSnapshot {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            student_code: student.student_code.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProgramSnapshot {
    pub id: ProgramId,
    pub code: String,
    pub name: String,
    pub total_credits_required: f64,
}

impl From<&Program> for ProgramSnapshot {
    fn from(program: &Program) -> Self {
        Self {
            id: program.id,
            code: program.code.clone(),
            name: program.name.clone(),
            total_credits_required: program.total_credits_required,
        }
    }
}

/// A record the engine excluded from computation, for the caller to surface
/// as a data-integrity problem.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditWarning {
    pub kind: WarningKind,
    pub source: RecordSource,
    /// Id of the enrollment, substitution, or requirement at fault.
    pub reference_id: u64,
    /// The course id that triggered the warning.
    pub course_id: CourseId,
    pub message: String,
}

/// Complete audit of one student against one program.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AuditReport {
    pub student: StudentSnapshot,
    pub program: ProgramSnapshot,
    pub total_credits_required: f64,
    /// Sum of `credits_completed` over all requirements.
    pub total_credits_completed: f64,
    pub overall_percentage: f64,
    pub status: AuditStatus,
    pub requirements: Vec<RequirementProgress>,
    pub graduation_eligible: bool,
    #[serde(default)]
    pub warnings: Vec<AuditWarning>,
}

impl AuditReport {
    /// Requirements that are not yet met, in program order.
    pub fn unmet(&self) -> impl Iterator<Item = &RequirementProgress> {
        self.requirements.iter().filter(|r| !r.is_met)
    }

    /// Look up one requirement's progress by id.
    #[must_use]
    pub fn requirement(&self, id: RequirementId) -> Option<&RequirementProgress> {
        self.requirements.iter().find(|r| r.requirement_id == id)
    }
}
