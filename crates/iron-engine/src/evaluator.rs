//! Requirement evaluation.
//!
//! Scores one requirement against the effective completed set. Physical
//! courses are claimed first-come in program order: once a completion counts
//! toward a requirement it is consumed from the [`CreditPool`] and no later
//! requirement can use it, even if the first requirement was over-satisfied.
//!
//! A course is claimed through the first of its identities the requirement
//! accepts. Whether it is claimed depends only on its own identities and on
//! the pool, never on which other courses the student took, so approving a
//! substitution can only move a course earlier or into a requirement it
//! previously missed.

use std::collections::BTreeSet;

use iron_core::eligibility::CoursePredicate;
use iron_core::entities::{Course, Requirement};
use iron_core::ids::CourseId;
use iron_core::policy::AuditPolicy;
use iron_core::report::{CourseSummary, RequirementProgress};

use crate::catalog::Catalog;
use crate::numeric::percentage;
use crate::resolver::{EffectiveCompletions, EffectiveCourse};

/// Physical completions already attributed during one audit run.
#[derive(Debug, Clone, Default)]
pub struct CreditPool {
    consumed: BTreeSet<CourseId>,
}

impl CreditPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_consumed(&self, course: CourseId) -> bool {
        self.consumed.contains(&course)
    }

    /// Mark `course` as used. Returns `false` if it already was.
    pub fn consume(&mut self, course: CourseId) -> bool {
        self.consumed.insert(course)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}

/// Evaluate `requirement`, consuming the completions it counts from `pool`.
///
/// Completions are visited in ascending course id. Every unconsumed course
/// with an accepted identity is claimed even past the threshold; surplus
/// credit stays with this requirement. `credits_completed` is the exact sum
/// of the claimed courses' credits and `is_met` compares it directly with
/// `credits_required`.
#[must_use]
pub fn evaluate(
    requirement: &Requirement,
    completions: &EffectiveCompletions,
    catalog: &Catalog<'_>,
    pool: &mut CreditPool,
    policy: &AuditPolicy,
) -> RequirementProgress {
    let mut completed_courses = Vec::new();
    let mut credits_completed = 0.0;

    for course_id in completions.completed_courses() {
        if pool.is_consumed(course_id) {
            continue;
        }
        let Some(taken) = catalog.get(course_id) else {
            continue;
        };
        let Some((identity, slot)) = accepted_identity(requirement, completions, catalog, course_id)
        else {
            continue;
        };

        pool.consume(course_id);
        credits_completed += taken.credits;
        completed_courses.push(if identity.is_substitution() {
            CourseSummary::substituting(taken, slot)
        } else {
            CourseSummary::of(taken)
        });
    }

    let credits_required = requirement.credits_required;
    let is_met = credits_completed >= credits_required;

    let missing_courses = if is_met {
        Vec::new()
    } else {
        suggest_missing(
            requirement,
            completions,
            catalog,
            credits_required - credits_completed,
        )
    };

    tracing::debug!(
        requirement = %requirement.id,
        name = %requirement.name,
        credits_completed,
        credits_required,
        is_met,
        "evaluated requirement"
    );

    RequirementProgress {
        requirement_id: requirement.id,
        requirement_name: requirement.name.clone(),
        requirement_type: requirement.kind,
        credits_required,
        credits_completed,
        percentage: percentage(credits_completed, credits_required, policy.percentage_decimals),
        is_met,
        completed_courses,
        missing_courses,
    }
}

/// First identity of `course_id` the requirement accepts, with the catalog
/// course it stands for.
fn accepted_identity<'c>(
    requirement: &Requirement,
    completions: &EffectiveCompletions,
    catalog: &Catalog<'c>,
    course_id: CourseId,
) -> Option<(EffectiveCourse, &'c Course)> {
    completions.identities(course_id).find_map(|identity| {
        catalog
            .get(identity.counts_as)
            .filter(|slot| requirement.eligibility.accepts(slot))
            .map(|slot| (*identity, slot))
    })
}

/// Smallest id-ordered prefix of eligible courses the student has neither
/// taken nor had substituted whose credits cover `gap`. A course an earlier
/// requirement consumed is still taken and is never suggested, so the gap can
/// stay open when the catalog runs out.
fn suggest_missing(
    requirement: &Requirement,
    completions: &EffectiveCompletions,
    catalog: &Catalog<'_>,
    gap: f64,
) -> Vec<CourseSummary> {
    let mut suggested = Vec::new();
    let mut covered = 0.0;

    for course in catalog.iter() {
        if covered >= gap {
            break;
        }
        if completions.completed(course.id)
            || completions.covers(course.id)
            || !requirement.eligibility.accepts(course)
        {
            continue;
        }
        covered += course.credits;
        suggested.push(CourseSummary::of(course));
    }

    suggested
}
