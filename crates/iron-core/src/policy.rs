//! Tunable audit policy.
//!
//! These values shape status classification and report formatting. They are
//! configuration, not engine constants; `iron-config` loads them from the
//! `[audit]` section.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::AuditError;

/// Default overall-percentage cutoff below which a student is at risk.
pub const DEFAULT_AT_RISK_THRESHOLD_PERCENT: f64 = 50.0;

/// Default number of decimals kept on reported percentages.
pub const DEFAULT_PERCENTAGE_DECIMALS: u32 = 1;

/// Upper bound on `percentage_decimals`.
pub const MAX_PERCENTAGE_DECIMALS: u32 = 6;

const fn default_at_risk_threshold_percent() -> f64 {
    DEFAULT_AT_RISK_THRESHOLD_PERCENT
}

const fn default_percentage_decimals() -> u32 {
    DEFAULT_PERCENTAGE_DECIMALS
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AuditPolicy {
    /// Overall percentage below which the status is `at_risk`.
    #[serde(default = "default_at_risk_threshold_percent")]
    pub at_risk_threshold_percent: f64,

    /// Also flag `at_risk` when a core or major requirement is unmet with zero
    /// credits earned toward it.
    #[serde(default)]
    pub flag_stalled_required: bool,

    /// Decimal places kept on requirement and overall percentages.
    #[serde(default = "default_percentage_decimals")]
    pub percentage_decimals: u32,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            at_risk_threshold_percent: default_at_risk_threshold_percent(),
            flag_stalled_required: false,
            percentage_decimals: default_percentage_decimals(),
        }
    }
}

impl AuditPolicy {
    /// Override the at-risk threshold.
    #[must_use]
    pub fn with_threshold(mut self, percent: f64) -> Self {
        self.at_risk_threshold_percent = percent;
        self
    }

    /// Check that every knob is within range.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidInput`] naming the offending field.
    pub fn validate(&self) -> Result<(), AuditError> {
        let threshold = self.at_risk_threshold_percent;
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            return Err(AuditError::invalid(
                "policy.at_risk_threshold_percent",
                format!("must be between 0 and 100, got {threshold}"),
            ));
        }
        if self.percentage_decimals > MAX_PERCENTAGE_DECIMALS {
            return Err(AuditError::invalid(
                "policy.percentage_decimals",
                format!(
                    "must be at most {MAX_PERCENTAGE_DECIMALS}, got {}",
                    self.percentage_decimals
                ),
            ));
        }
        Ok(())
    }
}
