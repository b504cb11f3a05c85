//! Property tests: credit attribution, verdict consistency, determinism, and
//! substitution monotonicity over generated programs and transcripts.

#[path = "../common/mod.rs"]
mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;

use iron_core::eligibility::Eligibility;
use iron_core::entities::{Course, Program, Substitution};
use iron_core::enums::RequirementKind;
use iron_core::ids::CourseId;
use iron_core::input::AuditInput;
use iron_core::policy::AuditPolicy;
use iron_core::report::AuditReport;
use iron_engine::audit;

use common::{course, enrollments, program, requirement, student, substitution};

const COURSES: u64 = 12;
const SUBJECTS: [&str; 3] = ["CS", "MA", "EN"];
const CREDITS: [f64; 6] = [0.5, 1.0, 2.5, 3.0, 3.33, 4.0];

fn course_ids() -> Vec<u64> {
    (1..=COURSES).collect()
}

fn catalog() -> impl Strategy<Value = Vec<Course>> {
    prop::collection::vec(prop::sample::select(CREDITS.to_vec()), COURSES as usize).prop_map(
        |credits| {
            credits
                .into_iter()
                .zip(1_u64..)
                .map(|(credits, id)| {
                    let subject = SUBJECTS[(id % 3) as usize];
                    course(id, &format!("{subject}{id:03}"), credits)
                })
                .collect()
        },
    )
}

fn eligibility() -> impl Strategy<Value = Eligibility> {
    prop_oneof![
        3 => prop::sample::subsequence(course_ids(), 0..6)
            .prop_map(|ids| Eligibility::course_set(ids.into_iter().map(CourseId))),
        2 => prop::sample::select(SUBJECTS.to_vec())
            .prop_map(|prefix| Eligibility::SubjectPrefix { prefix: prefix.into() }),
        1 => Just(Eligibility::AnyCourse),
    ]
}

/// Programs of one to four requirements, optionally closed by an
/// `any_course` requirement that absorbs whatever the others leave.
fn degree_program() -> impl Strategy<Value = Program> {
    let kinds = vec![
        RequirementKind::Core,
        RequirementKind::Elective,
        RequirementKind::GeneralEd,
        RequirementKind::Major,
    ];
    let rule = (prop::sample::select(kinds), 0_u32..=1600, eligibility());

    (prop::collection::vec(rule, 1..5), any::<bool>(), 1_u32..=60).prop_map(
        |(rules, catch_all, total)| {
            let mut requirements: Vec<_> = rules
                .into_iter()
                .zip(1_u64..)
                .map(|((kind, hundredths, eligibility), id)| {
                    let credits = f64::from(hundredths) / 100.0;
                    requirement(id, &format!("Requirement {id}"), kind, credits, eligibility)
                })
                .collect();
            if catch_all {
                let id = requirements.len() as u64 + 1;
                requirements.push(requirement(
                    id,
                    "Free Electives",
                    RequirementKind::Elective,
                    12.0,
                    Eligibility::AnyCourse,
                ));
            }
            program(f64::from(total), requirements)
        },
    )
}

/// Either scattered substitutions or several aimed at one original course.
fn substitutions() -> impl Strategy<Value = Vec<Substitution>> {
    let scattered = prop::collection::vec((1..=COURSES, 1..=COURSES, any::<bool>()), 0..6);
    let converging = (
        1..=COURSES,
        prop::collection::vec((1..=COURSES, any::<bool>()), 2..5),
    )
        .prop_map(|(original, substitutes)| {
            substitutes
                .into_iter()
                .map(|(substitute, approved)| (original, substitute, approved))
                .collect::<Vec<_>>()
        });

    prop_oneof![scattered, converging].prop_map(|records| {
        records
            .into_iter()
            .zip(1_u64..)
            .map(|((original, substitute, approved), id)| {
                substitution(id, original, substitute, approved)
            })
            .collect()
    })
}

fn audit_input() -> impl Strategy<Value = AuditInput> {
    (
        catalog(),
        degree_program(),
        prop::sample::subsequence(course_ids(), 0..=COURSES as usize),
        substitutions(),
    )
        .prop_map(|(catalog, program, completed, substitutions)| {
            AuditInput {
                student: student(),
                program,
                catalog,
                enrollments: enrollments(&completed),
                substitutions,
            }
        })
}

fn run(input: &AuditInput) -> AuditReport {
    audit(input, &AuditPolicy::default()).expect("generated input is valid")
}

proptest! {
    #[test]
    fn prop_total_is_sum_of_requirement_credits(input in audit_input()) {
        let report = run(&input);
        let sum: f64 = report.requirements.iter().map(|r| r.credits_completed).sum();
        prop_assert_eq!(report.total_credits_completed, sum);
    }

    #[test]
    fn prop_requirement_credits_are_exact_course_sums(input in audit_input()) {
        for r in run(&input).requirements {
            let sum: f64 = r.completed_courses.iter().map(|c| c.credits).sum();
            prop_assert_eq!(r.credits_completed, sum);
        }
    }

    #[test]
    fn prop_no_physical_course_is_counted_twice(input in audit_input()) {
        let mut seen = BTreeSet::new();
        for r in run(&input).requirements {
            for course in &r.completed_courses {
                prop_assert!(seen.insert(course.course_id), "{} counted twice", course.course_code);
            }
        }
    }

    #[test]
    fn prop_is_met_matches_reported_credits(input in audit_input()) {
        for r in run(&input).requirements {
            prop_assert_eq!(r.is_met, r.credits_completed >= r.credits_required);
            if r.is_met {
                prop_assert!(r.missing_courses.is_empty());
            }
        }
    }

    #[test]
    fn prop_graduation_requires_every_requirement_and_total(input in audit_input()) {
        let report = run(&input);
        let expected = report.requirements.iter().all(|r| r.is_met)
            && report.total_credits_completed >= report.total_credits_required;
        prop_assert_eq!(report.graduation_eligible, expected);
    }

    #[test]
    fn prop_repeated_runs_are_byte_identical(input in audit_input()) {
        let first = serde_json::to_string(&run(&input)).unwrap();
        let second = serde_json::to_string(&run(&input)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_approving_a_substitution_never_lowers_total(
        input in audit_input(),
        original in 1..=COURSES,
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!input.enrollments.is_empty());
        let before = run(&input).total_credits_completed;

        let substitute = input.enrollments[pick.index(input.enrollments.len())].course_id.get();
        let mut extended = input.clone();
        extended.substitutions.push(substitution(100, original, substitute, true));
        let after = run(&extended).total_credits_completed;

        prop_assert!(
            after + 1e-9 >= before,
            "approving {} <- {} lowered total {} -> {}",
            original,
            substitute,
            before,
            after
        );
    }

    #[test]
    fn prop_revoking_approval_never_raises_total(input in audit_input()) {
        let before = run(&input).total_credits_completed;
        for index in 0..input.substitutions.len() {
            if !input.substitutions[index].approved {
                continue;
            }
            let mut revoked = input.clone();
            revoked.substitutions[index].approved = false;
            let after = run(&revoked).total_credits_completed;
            prop_assert!(after <= before + 1e-9, "revoking raised total {} -> {}", before, after);
        }
    }
}
