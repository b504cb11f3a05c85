//! Shared fixture builders for engine integration tests.

#![allow(dead_code)]

use iron_core::eligibility::Eligibility;
use iron_core::entities::{Course, Enrollment, Program, Requirement, Student, Substitution};
use iron_core::enums::RequirementKind;
use iron_core::ids::{CourseId, EnrollmentId, ProgramId, RequirementId, StudentId, SubstitutionId};
use iron_core::input::AuditInput;

pub const STUDENT: StudentId = StudentId(1);

pub fn course(id: u64, code: &str, credits: f64) -> Course {
    Course {
        id: CourseId(id),
        course_code: code.into(),
        name: format!("{code} title"),
        credits,
        description: None,
    }
}

pub fn requirement(
    id: u64,
    name: &str,
    kind: RequirementKind,
    credits: f64,
    eligibility: Eligibility,
) -> Requirement {
    Requirement {
        id: RequirementId(id),
        name: name.into(),
        kind,
        credits_required: credits,
        description: None,
        eligibility,
    }
}

pub fn student() -> Student {
    Student {
        id: STUDENT,
        name: "Alice Bruin".into(),
        student_code: "UID-000001".into(),
        email: Some("alice@example.edu".into()),
        program_id: ProgramId(1),
    }
}

pub fn program(total: f64, requirements: Vec<Requirement>) -> Program {
    Program {
        id: ProgramId(1),
        code: "CS-BS".into(),
        name: "Computer Science B.S.".into(),
        total_credits_required: total,
        requirements,
    }
}

pub fn enrollments(courses: &[u64]) -> Vec<Enrollment> {
    courses
        .iter()
        .zip(1_u64..)
        .map(|(course, id)| Enrollment {
            id: EnrollmentId(id),
            student_id: STUDENT,
            course_id: CourseId(*course),
            grade: Some("A".into()),
            semester: Some("Fall".into()),
            year: Some(2024),
            completed: true,
        })
        .collect()
}

pub fn substitution(id: u64, original: u64, substitute: u64, approved: bool) -> Substitution {
    Substitution {
        id: SubstitutionId(id),
        student_id: STUDENT,
        original_course_id: CourseId(original),
        substitute_course_id: CourseId(substitute),
        approved,
        reason: Some("Equivalent coursework".into()),
    }
}

/// Catalog for the single-requirement scenarios.
pub fn scenario_catalog() -> Vec<Course> {
    vec![
        course(101, "C101", 3.0),
        course(102, "C102", 3.0),
        course(103, "C103", 24.0),
        course(999, "C999", 24.0),
    ]
}

/// 120-credit program with one 30-credit "Core" requirement over C101-C103.
pub fn scenario_input(completed: &[u64], substitutions: Vec<Substitution>) -> AuditInput {
    AuditInput {
        student: student(),
        program: program(
            120.0,
            vec![requirement(
                1,
                "Core",
                RequirementKind::Core,
                30.0,
                Eligibility::course_set([CourseId(101), CourseId(102), CourseId(103)]),
            )],
        ),
        catalog: scenario_catalog(),
        enrollments: enrollments(completed),
        substitutions,
    }
}

/// A four-requirement program with 4-credit courses across four subjects.
pub fn degree_catalog() -> Vec<Course> {
    let mut courses = Vec::new();
    let subjects = [("CS", 100), ("MATH", 200), ("ENGL", 300), ("HIST", 400)];
    for (prefix, base) in subjects {
        for n in 1..=10_u64 {
            courses.push(course(base + n, &format!("{prefix}{n}"), 4.0));
        }
    }
    courses
}

pub fn degree_program() -> Program {
    program(
        120.0,
        vec![
            requirement(
                1,
                "Computer Science Core",
                RequirementKind::Core,
                40.0,
                Eligibility::SubjectPrefix {
                    prefix: "CS".into(),
                },
            ),
            requirement(
                2,
                "Mathematics",
                RequirementKind::Major,
                24.0,
                Eligibility::SubjectPrefix {
                    prefix: "MATH".into(),
                },
            ),
            requirement(
                3,
                "Writing",
                RequirementKind::GeneralEd,
                16.0,
                Eligibility::course_set([CourseId(301), CourseId(302), CourseId(303), CourseId(304)]),
            ),
            requirement(
                4,
                "Free Electives",
                RequirementKind::Elective,
                40.0,
                Eligibility::AnyCourse,
            ),
        ],
    )
}

pub fn degree_input(completed: &[u64], substitutions: Vec<Substitution>) -> AuditInput {
    AuditInput {
        student: student(),
        program: degree_program(),
        catalog: degree_catalog(),
        enrollments: enrollments(completed),
        substitutions,
    }
}
