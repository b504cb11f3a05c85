//! Fail-fast input validation.
//!
//! Runs before any computation. A rejection names the exact field so the
//! caller can point at the bad record.

use std::collections::BTreeSet;

use iron_core::errors::AuditError;
use iron_core::input::AuditInput;
use iron_core::policy::AuditPolicy;

/// Reject input that cannot be audited.
///
/// # Errors
///
/// Returns [`AuditError::InvalidInput`] when:
/// - the policy is out of range,
/// - the program's total credits are not a positive number,
/// - a requirement's credits are negative or not finite,
/// - two requirements share an id,
/// - two catalog courses share an id or a course code,
/// - a catalog course has non-positive credits.
pub fn validate(input: &AuditInput, policy: &AuditPolicy) -> Result<(), AuditError> {
    policy.validate()?;

    let program = &input.program;
    let total = program.total_credits_required;
    if !total.is_finite() || total <= 0.0 {
        return Err(AuditError::invalid(
            "program.total_credits_required",
            format!("must be a positive number, got {total}"),
        ));
    }

    let mut requirement_ids = BTreeSet::new();
    for (index, requirement) in program.requirements.iter().enumerate() {
        let credits = requirement.credits_required;
        if !credits.is_finite() || credits < 0.0 {
            return Err(AuditError::invalid(
                format!("program.requirements[{index}].credits_required"),
                format!("must be zero or more, got {credits}"),
            ));
        }
        if !requirement_ids.insert(requirement.id) {
            return Err(AuditError::invalid(
                format!("program.requirements[{index}].id"),
                format!("duplicate requirement id {}", requirement.id),
            ));
        }
    }

    let mut course_ids = BTreeSet::new();
    let mut course_codes = BTreeSet::new();
    for (index, course) in input.catalog.iter().enumerate() {
        if !course.credits.is_finite() || course.credits <= 0.0 {
            return Err(AuditError::invalid(
                format!("catalog[{index}].credits"),
                format!(
                    "course {} must carry positive credits, got {}",
                    course.course_code, course.credits
                ),
            ));
        }
        if !course_ids.insert(course.id) {
            return Err(AuditError::invalid(
                format!("catalog[{index}].id"),
                format!("duplicate course id {}", course.id),
            ));
        }
        if !course_codes.insert(course.course_code.as_str()) {
            return Err(AuditError::invalid(
                format!("catalog[{index}].course_code"),
                format!("duplicate course code {}", course.course_code),
            ));
        }
    }

    Ok(())
}
