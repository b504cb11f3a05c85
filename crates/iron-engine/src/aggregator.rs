//! Audit aggregation.
//!
//! Folds the evaluator over a program's requirements in declared order,
//! threading one [`CreditPool`] through the run, then derives totals, status,
//! and graduation eligibility.

use iron_core::entities::Program;
use iron_core::enums::{AuditStatus, RecordSource};
use iron_core::errors::AuditError;
use iron_core::input::AuditInput;
use iron_core::policy::AuditPolicy;
use iron_core::report::{AuditReport, ProgramSnapshot, RequirementProgress, StudentSnapshot};

use crate::catalog::Catalog;
use crate::evaluator::{CreditPool, evaluate};
use crate::integrity::IntegrityLog;
use crate::numeric::percentage;
use crate::resolver::resolve;
use crate::validate::validate;

/// Stateless audit runner bound to a policy.
///
/// Cheap to copy and safe to share across threads: each [`run`](Self::run)
/// allocates its own credit pool.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AuditEngine {
    policy: AuditPolicy,
}

impl AuditEngine {
    #[must_use]
    pub const fn new(policy: AuditPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &AuditPolicy {
        &self.policy
    }

    /// Audit `input` and build its report.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidInput`] if validation rejects the input
    /// or the policy.
    pub fn run(&self, input: &AuditInput) -> Result<AuditReport, AuditError> {
        let _span = tracing::debug_span!(
            "audit",
            student = %input.student.id,
            program = %input.program.code
        )
        .entered();

        validate(input, &self.policy)?;

        let catalog = Catalog::new(&input.catalog);
        let mut integrity = IntegrityLog::new();
        check_requirement_references(&input.program, &catalog, &mut integrity);

        let completions = resolve(
            &input.student,
            &catalog,
            &input.enrollments,
            &input.substitutions,
            &mut integrity,
        );

        let mut pool = CreditPool::new();
        let requirements: Vec<RequirementProgress> = input
            .program
            .requirements
            .iter()
            .map(|requirement| {
                evaluate(requirement, &completions, &catalog, &mut pool, &self.policy)
            })
            .collect();

        let total_credits_required = input.program.total_credits_required;
        let total_credits_completed: f64 =
            requirements.iter().map(|r| r.credits_completed).sum();
        let overall_percentage = percentage(
            total_credits_completed,
            total_credits_required,
            self.policy.percentage_decimals,
        );

        let graduation_eligible =
            requirements.iter().all(|r| r.is_met) && total_credits_completed >= total_credits_required;
        let status = classify(
            &requirements,
            graduation_eligible,
            overall_percentage,
            &self.policy,
        );

        let report = AuditReport {
            student: StudentSnapshot::from(&input.student),
            program: ProgramSnapshot::from(&input.program),
            total_credits_required,
            total_credits_completed,
            overall_percentage,
            status,
            requirements,
            graduation_eligible,
            warnings: integrity.into_sorted(),
        };

        tracing::info!(
            %status,
            total_credits_completed,
            total_credits_required,
            overall_percentage,
            graduation_eligible,
            unmet = report.unmet().count(),
            warnings = report.warnings.len(),
            "audit complete"
        );

        Ok(report)
    }
}

/// Derive the overall status.
///
/// `completed` wins when every requirement is met and the program total is
/// reached. Otherwise the student is `at_risk` below the policy threshold, or,
/// with `flag_stalled_required`, when a core or major requirement has no
/// credit at all. Everything else is `on_track`.
#[must_use]
pub fn classify(
    requirements: &[RequirementProgress],
    all_satisfied: bool,
    overall_percentage: f64,
    policy: &AuditPolicy,
) -> AuditStatus {
    if all_satisfied {
        return AuditStatus::Completed;
    }
    if overall_percentage < policy.at_risk_threshold_percent {
        return AuditStatus::AtRisk;
    }
    let stalled = requirements.iter().any(|r| {
        r.requirement_type.is_required() && !r.is_met && r.credits_completed <= 0.0
    });
    if policy.flag_stalled_required && stalled {
        return AuditStatus::AtRisk;
    }
    AuditStatus::OnTrack
}

fn check_requirement_references(
    program: &Program,
    catalog: &Catalog<'_>,
    integrity: &mut IntegrityLog,
) {
    for requirement in &program.requirements {
        let Some(named) = requirement.eligibility.named_courses() else {
            continue;
        };
        for course in named {
            if !catalog.contains(*course) {
                integrity.unknown_course(RecordSource::Requirement, requirement.id.get(), *course);
            }
        }
    }
}
