//! Substitution resolution.
//!
//! Produces the effective completed set: every course the student physically
//! completed, plus one entry for each approved substitution whose substitute
//! was completed. A substitution entry lets the substitute count wherever the
//! original course is accepted, while the credit it carries is always the
//! credit of the course actually taken.
//!
//! Each physical course therefore carries one or more identities: its own id
//! plus the original of every approved substitution it satisfies.

use std::collections::{BTreeMap, BTreeSet};

use iron_core::entities::{Enrollment, Student, Substitution};
use iron_core::enums::RecordSource;
use iron_core::ids::CourseId;

use crate::catalog::Catalog;
use crate::integrity::IntegrityLog;

/// One way a physical completion can count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EffectiveCourse {
    /// The course identity requirements match against.
    pub counts_as: CourseId,
    /// The course the student actually completed. Credit and exhaustion are
    /// tracked against this id.
    pub earned_by: CourseId,
}

impl EffectiveCourse {
    #[must_use]
    pub const fn literal(course: CourseId) -> Self {
        Self {
            counts_as: course,
            earned_by: course,
        }
    }

    #[must_use]
    pub fn is_substitution(&self) -> bool {
        self.counts_as != self.earned_by
    }

    fn sort_key(&self) -> (CourseId, bool, CourseId) {
        (self.earned_by, self.is_substitution(), self.counts_as)
    }
}

/// The effective completed set for one audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveCompletions {
    entries: Vec<EffectiveCourse>,
    completed: BTreeSet<CourseId>,
    covered: BTreeSet<CourseId>,
}

impl EffectiveCompletions {
    /// Entries ordered by `earned_by`, the literal identity first, then
    /// substitution identities by `counts_as`.
    #[must_use]
    pub fn entries(&self) -> &[EffectiveCourse] {
        &self.entries
    }

    /// Every identity the physical course `earned_by` can count as, literal
    /// first.
    pub fn identities(&self, earned_by: CourseId) -> impl Iterator<Item = &EffectiveCourse> + '_ {
        let start = self.entries.partition_point(|entry| entry.earned_by < earned_by);
        self.entries[start..]
            .iter()
            .take_while(move |entry| entry.earned_by == earned_by)
    }

    /// Whether the student physically completed `course`.
    #[must_use]
    pub fn completed(&self, course: CourseId) -> bool {
        self.completed.contains(&course)
    }

    /// Whether `course` is satisfied either literally or through a substitution.
    #[must_use]
    pub fn covers(&self, course: CourseId) -> bool {
        self.covered.contains(&course)
    }

    /// Physically completed courses in ascending id order.
    pub fn completed_courses(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.completed.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the effective completed set for `student`.
///
/// Enrollments that are not completed are skipped. Records for another
/// student, records naming courses missing from the catalog, and repeat
/// completions of the same course are excluded and logged to `integrity`.
/// Unapproved substitutions are ignored without inspection.
pub fn resolve(
    student: &Student,
    catalog: &Catalog<'_>,
    enrollments: &[Enrollment],
    substitutions: &[Substitution],
    integrity: &mut IntegrityLog,
) -> EffectiveCompletions {
    let completed = completed_courses(student, catalog, enrollments, integrity);

    let mut entries: BTreeSet<EffectiveCourse> =
        completed.iter().copied().map(EffectiveCourse::literal).collect();

    let mut ordered: Vec<&Substitution> = substitutions.iter().filter(|s| s.approved).collect();
    ordered.sort_by_key(|s| s.id);

    for substitution in ordered {
        let reference = substitution.id.get();
        if substitution.student_id != student.id {
            integrity.foreign_record(
                RecordSource::Substitution,
                reference,
                substitution.substitute_course_id,
            );
            continue;
        }

        let mut known = true;
        for course in [substitution.original_course_id, substitution.substitute_course_id] {
            if !catalog.contains(course) {
                integrity.unknown_course(RecordSource::Substitution, reference, course);
                known = false;
            }
        }
        if !known {
            continue;
        }

        if substitution.original_course_id == substitution.substitute_course_id {
            continue;
        }

        if !completed.contains(&substitution.substitute_course_id) {
            tracing::debug!(
                substitution = reference,
                substitute = %substitution.substitute_course_id,
                "substitute course not completed; substitution contributes nothing"
            );
            continue;
        }

        entries.insert(EffectiveCourse {
            counts_as: substitution.original_course_id,
            earned_by: substitution.substitute_course_id,
        });
    }

    let mut entries: Vec<EffectiveCourse> = entries.into_iter().collect();
    entries.sort_by_key(EffectiveCourse::sort_key);

    let covered = entries.iter().map(|entry| entry.counts_as).collect();

    tracing::debug!(
        completed = completed.len(),
        effective = entries.len(),
        "resolved effective completed set"
    );

    EffectiveCompletions {
        entries,
        completed,
        covered,
    }
}

fn completed_courses(
    student: &Student,
    catalog: &Catalog<'_>,
    enrollments: &[Enrollment],
    integrity: &mut IntegrityLog,
) -> BTreeSet<CourseId> {
    let mut ordered: Vec<&Enrollment> = enrollments.iter().filter(|e| e.completed).collect();
    ordered.sort_by_key(|e| e.id);

    let mut first_completion: BTreeMap<CourseId, u64> = BTreeMap::new();
    for enrollment in ordered {
        let reference = enrollment.id.get();
        if enrollment.student_id != student.id {
            integrity.foreign_record(RecordSource::Enrollment, reference, enrollment.course_id);
            continue;
        }
        if !catalog.contains(enrollment.course_id) {
            integrity.unknown_course(RecordSource::Enrollment, reference, enrollment.course_id);
            continue;
        }
        if first_completion.contains_key(&enrollment.course_id) {
            integrity.duplicate_enrollment(reference, enrollment.course_id);
            continue;
        }
        first_completion.insert(enrollment.course_id, reference);
    }

    first_completion.into_keys().collect()
}
