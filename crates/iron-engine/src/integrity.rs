//! Collection of non-fatal data-integrity warnings.
//!
//! Records that reference unknown courses, belong to another student, or
//! duplicate an earlier completion are dropped from the computation. Each drop
//! is logged and kept here so the caller can surface it.

use iron_core::enums::{RecordSource, WarningKind};
use iron_core::ids::CourseId;
use iron_core::report::AuditWarning;

#[derive(Debug, Default)]
pub struct IntegrityLog {
    warnings: Vec<AuditWarning>,
}

impl IntegrityLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unknown_course(&mut self, source: RecordSource, reference_id: u64, course_id: CourseId) {
        self.push(
            WarningKind::UnknownCourseReference,
            source,
            reference_id,
            course_id,
            format!("{source} {reference_id} references course {course_id}, which is not in the catalog"),
        );
    }

    pub fn foreign_record(&mut self, source: RecordSource, reference_id: u64, course_id: CourseId) {
        self.push(
            WarningKind::ForeignRecord,
            source,
            reference_id,
            course_id,
            format!("{source} {reference_id} belongs to a different student"),
        );
    }

    pub fn duplicate_enrollment(&mut self, reference_id: u64, course_id: CourseId) {
        self.push(
            WarningKind::DuplicateEnrollment,
            RecordSource::Enrollment,
            reference_id,
            course_id,
            format!("enrollment {reference_id} repeats an earlier completion of course {course_id}"),
        );
    }

    fn push(
        &mut self,
        kind: WarningKind,
        source: RecordSource,
        reference_id: u64,
        course_id: CourseId,
        message: String,
    ) {
        tracing::warn!(%kind, %source, reference_id, %course_id, "{message}");
        self.warnings.push(AuditWarning {
            kind,
            source,
            reference_id,
            course_id,
            message,
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Warnings ordered by source, then reference id, then kind.
    #[must_use]
    pub fn into_sorted(mut self) -> Vec<AuditWarning> {
        self.warnings.sort_by(|a, b| {
            a.source
                .cmp(&b.source)
                .then(a.reference_id.cmp(&b.reference_id))
                .then(a.kind.cmp(&b.kind))
                .then(a.course_id.cmp(&b.course_id))
        });
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_source_then_reference() {
        let mut log = IntegrityLog::new();
        log.unknown_course(RecordSource::Substitution, 2, CourseId(9));
        log.duplicate_enrollment(7, CourseId(1));
        log.foreign_record(RecordSource::Enrollment, 3, CourseId(4));

        let warnings = log.into_sorted();
        let order: Vec<(RecordSource, u64)> =
            warnings.iter().map(|w| (w.source, w.reference_id)).collect();
        assert_eq!(
            order,
            vec![
                (RecordSource::Enrollment, 3),
                (RecordSource::Enrollment, 7),
                (RecordSource::Substitution, 2),
            ]
        );
    }

    #[test]
    fn messages_name_the_record() {
        let mut log = IntegrityLog::new();
        log.unknown_course(RecordSource::Enrollment, 11, CourseId(404));
        let warnings = log.into_sorted();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("enrollment 11"));
        assert!(warnings[0].message.contains("404"));
    }
}
