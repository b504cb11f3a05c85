//! Typed identifiers.
//!
//! Every record kind gets its own newtype over `u64` so a course id can never
//! be passed where a requirement id is expected. All of them serialize as
//! plain JSON numbers.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Student`](crate::entities::Student).
    StudentId
);
define_id!(
    /// Identifier of a [`Program`](crate::entities::Program).
    ProgramId
);
define_id!(
    /// Identifier of a catalog [`Course`](crate::entities::Course).
    CourseId
);
define_id!(
    /// Identifier of a [`Requirement`](crate::entities::Requirement).
    RequirementId
);
define_id!(
    /// Identifier of an [`Enrollment`](crate::entities::Enrollment).
    EnrollmentId
);
define_id!(
    /// Identifier of a [`Substitution`](crate::entities::Substitution).
    SubstitutionId
);
