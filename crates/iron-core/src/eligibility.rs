//! Requirement eligibility predicates.
//!
//! A requirement names the courses that may count toward it through an
//! [`Eligibility`] rule. The rule set is closed; callers match on it through the
//! [`CoursePredicate`] capability rather than by inspecting strings.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Course;
use crate::ids::CourseId;

/// Something that can decide whether a catalog course is acceptable.
pub trait CoursePredicate {
    /// Return `true` if `course` may count toward the owner of this predicate.
    fn accepts(&self, course: &Course) -> bool;
}

/// Which catalog courses satisfy a requirement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Eligibility {
    /// The course is one of an explicit set.
    CourseSet { course_ids: BTreeSet<CourseId> },
    /// The course code starts with `prefix` (department or category), compared
    /// case-insensitively.
    SubjectPrefix { prefix: String },
    /// Any catalog course.
    AnyCourse,
}

impl Eligibility {
    /// Build a `CourseSet` rule from any iterator of ids.
    pub fn course_set<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = CourseId>,
    {
        Self::CourseSet {
            course_ids: ids.into_iter().collect(),
        }
    }

    /// Explicit course ids this rule names, if it is a `CourseSet`.
    #[must_use]
    pub const fn named_courses(&self) -> Option<&BTreeSet<CourseId>> {
        match self {
            Self::CourseSet { course_ids } => Some(course_ids),
            Self::SubjectPrefix { .. } | Self::AnyCourse => None,
        }
    }
}

impl CoursePredicate for Eligibility {
    fn accepts(&self, course: &Course) -> bool {
        match self {
            Self::CourseSet { course_ids } => course_ids.contains(&course.id),
            Self::SubjectPrefix { prefix } => {
                let code = course.course_code.as_bytes();
                let prefix = prefix.as_bytes();
                code.len() >= prefix.len() && code[..prefix.len()].eq_ignore_ascii_case(prefix)
            }
            Self::AnyCourse => true,
        }
    }
}
