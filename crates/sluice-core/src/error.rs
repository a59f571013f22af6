//! Error types for program validation.
//!
//! There is no fatal error class in this crate: every failure is a
//! field-level condition the user corrects in the form. Submission is
//! refused until the form is clean; nothing is ever thrown past the
//! editing surface.

use thiserror::Error;

/// A single unmet validity condition, tied to the control it belongs to.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldViolation {
    #[error("program name must not be empty")]
    EmptyName,

    #[error("allocation must be between 0 and 100%: got {0}")]
    AllocationOutOfRange(f64),

    #[error("wallet splits must sum to 100%: got {total}")]
    SplitTotalMismatch { total: f64 },

    #[error("wallet split {index} needs an address")]
    EmptyAddress { index: usize },

    #[error("wallet split {index} needs a percent greater than zero")]
    ZeroPercent { index: usize },
}

/// Returned by the draft builder when the form does not satisfy
/// `form_valid`. Carries every unmet condition so the surface can show all
/// inline errors at once. Deterministic for a given form state; corrected
/// by the user, never retried by the system.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("program draft rejected: {} unmet condition(s)", violations.len())]
pub struct ValidationFailure {
    /// Unmet conditions in field order: name, allocation, then splits.
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    /// Whether a violation for the given predicate is present.
    pub fn contains(&self, violation: &FieldViolation) -> bool {
        self.violations.contains(violation)
    }
}

/// Returned when parsing a category label outside the closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown program category: {0}")]
pub struct UnknownCategory(pub String);
