//! Id-ordered view of the course catalog.

use std::collections::BTreeMap;

use iron_core::entities::Course;
use iron_core::ids::CourseId;

/// Borrowed catalog keyed by course id.
///
/// Iteration is always in ascending id order, which is the order the engine
/// reports completed and missing courses in.
#[derive(Debug, Clone, Default)]
pub struct Catalog<'a> {
    courses: BTreeMap<CourseId, &'a Course>,
}

impl<'a> Catalog<'a> {
    /// Index `courses`. Later duplicates replace earlier ones; callers that
    /// care run [`crate::validate`] first.
    #[must_use]
    pub fn new(courses: &'a [Course]) -> Self {
        Self {
            courses: courses.iter().map(|course| (course.id, course)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&'a Course> {
        self.courses.get(&id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: CourseId) -> bool {
        self.courses.contains_key(&id)
    }

    /// Courses in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Course> + '_ {
        self.courses.values().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
