//! # iron-engine
//!
//! The audit engine: turns a student's completed coursework, their approved
//! substitutions, and a program definition into an [`AuditReport`].
//!
//! Evaluation runs leaf-first:
//! 1. [`resolver`] builds the effective completed set from enrollments plus
//!    approved substitutions.
//! 2. [`evaluator`] scores one requirement against that set, consuming the
//!    physical courses it counts so no credit is attributed twice.
//! 3. [`aggregator`] folds the evaluator over the program's requirements in
//!    declared order and derives totals, status, and graduation eligibility.
//!
//! Every call is a pure function of its inputs. There is no clock, no
//! randomness, and no shared state; internal collections are ordered so that
//! identical input always produces an identical report.
//!
//! ```no_run
//! use iron_core::policy::AuditPolicy;
//! # fn load() -> iron_core::input::AuditInput { unimplemented!() }
//! # fn demo() -> Result<(), iron_core::errors::AuditError> {
//! let input = load();
//! let report = iron_engine::audit(&input, &AuditPolicy::default())?;
//! println!("{} -> {}", report.student.name, report.status);
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod catalog;
pub mod evaluator;
pub mod integrity;
pub mod numeric;
pub mod resolver;
pub mod validate;

use iron_core::errors::AuditError;
use iron_core::input::AuditInput;
use iron_core::policy::AuditPolicy;
use iron_core::report::AuditReport;

pub use aggregator::AuditEngine;

/// Audit one student with the given policy.
///
/// # Errors
///
/// Returns [`AuditError::InvalidInput`] when the program, its requirements, the
/// catalog, or the policy cannot be audited.
pub fn audit(input: &AuditInput, policy: &AuditPolicy) -> Result<AuditReport, AuditError> {
    AuditEngine::new(*policy).run(input)
}
