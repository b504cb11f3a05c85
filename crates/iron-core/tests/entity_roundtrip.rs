//! Serde roundtrip and JsonSchema validation tests for input and report types.

use iron_core::eligibility::Eligibility;
use iron_core::entities::*;
use iron_core::enums::*;
use iron_core::ids::*;
use iron_core::input::AuditInput;
use iron_core::policy::AuditPolicy;
use iron_core::report::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            pretty_assertions::assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_course() -> Course {
    Course {
        id: CourseId(31),
        course_code: "CS31".into(),
        name: "Introduction to Computer Science I".into(),
        credits: 4.0,
        description: Some("Problem solving with C++".into()),
    }
}

fn sample_requirement() -> Requirement {
    Requirement {
        id: RequirementId(1),
        name: "Lower Division Core".into(),
        kind: RequirementKind::Core,
        credits_required: 48.0,
        description: None,
        eligibility: Eligibility::course_set([CourseId(31), CourseId(32)]),
    }
}

fn sample_student() -> Student {
    Student {
        id: StudentId(1),
        name: "Alice Bruin".into(),
        student_code: "UID-000001".into(),
        email: Some("alice@example.edu".into()),
        program_id: ProgramId(1),
    }
}

roundtrip_and_validate!(course_roundtrip, Course, sample_course());

roundtrip_and_validate!(requirement_roundtrip, Requirement, sample_requirement());

roundtrip_and_validate!(
    prefix_requirement_roundtrip,
    Requirement,
    Requirement {
        id: RequirementId(2),
        name: "Mathematics".into(),
        kind: RequirementKind::Major,
        credits_required: 24.0,
        description: Some("Any MATH course".into()),
        eligibility: Eligibility::SubjectPrefix {
            prefix: "MATH".into(),
        },
    }
);

roundtrip_and_validate!(
    program_roundtrip,
    Program,
    Program {
        id: ProgramId(1),
        code: "CS-BS".into(),
        name: "Computer Science B.S.".into(),
        total_credits_required: 180.0,
        requirements: vec![sample_requirement()],
    }
);

roundtrip_and_validate!(student_roundtrip, Student, sample_student());

roundtrip_and_validate!(
    enrollment_roundtrip,
    Enrollment,
    Enrollment {
        id: EnrollmentId(5),
        student_id: StudentId(1),
        course_id: CourseId(31),
        grade: Some("A-".into()),
        semester: Some("Fall".into()),
        year: Some(2023),
        completed: true,
    }
);

roundtrip_and_validate!(
    substitution_roundtrip,
    Substitution,
    Substitution {
        id: SubstitutionId(3),
        student_id: StudentId(1),
        original_course_id: CourseId(33),
        substitute_course_id: CourseId(35),
        approved: false,
        reason: Some("Transfer credit".into()),
    }
);

roundtrip_and_validate!(policy_roundtrip, AuditPolicy, AuditPolicy::default());

roundtrip_and_validate!(
    input_roundtrip,
    AuditInput,
    AuditInput {
        student: sample_student(),
        program: Program {
            id: ProgramId(1),
            code: "CS-BS".into(),
            name: "Computer Science B.S.".into(),
            total_credits_required: 180.0,
            requirements: vec![sample_requirement()],
        },
        catalog: vec![sample_course()],
        enrollments: vec![],
        substitutions: vec![],
    }
);

roundtrip_and_validate!(
    report_roundtrip,
    AuditReport,
    AuditReport {
        student: StudentSnapshot::from(&sample_student()),
        program: ProgramSnapshot {
            id: ProgramId(1),
            code: "CS-BS".into(),
            name: "Computer Science B.S.".into(),
            total_credits_required: 180.0,
        },
        total_credits_required: 180.0,
        total_credits_completed: 4.0,
        overall_percentage: 2.2,
        status: AuditStatus::AtRisk,
        requirements: vec![RequirementProgress {
            requirement_id: RequirementId(1),
            requirement_name: "Lower Division Core".into(),
            requirement_type: RequirementKind::Core,
            credits_required: 48.0,
            credits_completed: 4.0,
            percentage: 8.3,
            is_met: false,
            completed_courses: vec![CourseSummary::of(&sample_course())],
            missing_courses: vec![],
        }],
        graduation_eligible: false,
        warnings: vec![AuditWarning {
            kind: WarningKind::UnknownCourseReference,
            source: RecordSource::Enrollment,
            reference_id: 9,
            course_id: CourseId(404),
            message: "enrollment 9 references course 404, which is not in the catalog".into(),
        }],
    }
);

#[test]
fn enrollment_defaults_to_completed() {
    let enrollment: Enrollment =
        serde_json::from_str(r#"{"id": 1, "student_id": 1, "course_id": 31}"#).unwrap();
    assert!(enrollment.completed);
    assert!(enrollment.grade.is_none());
}

#[test]
fn substitution_defaults_to_pending() {
    let substitution: Substitution = serde_json::from_str(
        r#"{"id": 1, "student_id": 1, "original_course_id": 33, "substitute_course_id": 35}"#,
    )
    .unwrap();
    assert!(!substitution.approved);
}

#[test]
fn report_status_serializes_snake_case() {
    let json = serde_json::to_value(AuditStatus::OnTrack).unwrap();
    assert_eq!(json, serde_json::json!("on_track"));
}
