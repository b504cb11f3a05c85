//! Engine error types.
//!
//! The engine performs no I/O, so its failure modes are narrow: input that
//! cannot be audited at all. Data-integrity problems that can be worked around
//! are reported as [`AuditWarning`](crate::report::AuditWarning)s instead.

use thiserror::Error;

/// Errors raised while auditing.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Input failed validation before any computation ran.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AuditError {
    /// Shorthand for [`AuditError::InvalidInput`].
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The offending field, when the error is an input rejection.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::Other(_) => None,
        }
    }
}
