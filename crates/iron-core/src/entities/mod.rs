//! Entity structs for the reference data an audit consumes.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! calling layer can hand them over as JSON and the schema registry can
//! validate them.

mod course;
mod enrollment;
mod program;
mod requirement;
mod student;
mod substitution;

pub use course::Course;
pub use enrollment::Enrollment;
pub use program::Program;
pub use requirement::Requirement;
pub use student::Student;
pub use substitution::Substitution;
