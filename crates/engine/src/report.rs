use tracing::debug;

use crate::{Failure, Outcome};

/// How a UI should present a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A root was found.
    Info,

    /// The input was usable but the method failed numerically, or the seeds
    /// cannot start the method.
    Warning,

    /// The input was rejected, or something went wrong unexpectedly.
    Error,
}

/// A user-facing description of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub title: &'static str,
    pub message: String,
}

impl Report {
    /// Classifies an outcome for display.
    #[must_use]
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let report = match outcome {
            Ok(root) => Self::new(
                Severity::Info,
                format!("Approximate root found: {}", format_root(root.value)),
            ),
            Err(failure) => Self::from_failure(failure),
        };
        debug!(severity = ?report.severity, message = %report.message, "reported outcome");
        report
    }

    fn from_failure(failure: &Failure) -> Self {
        match failure {
            Failure::InvalidExpression(err) => Self::new(
                Severity::Error,
                format!("The entered function is not valid: {err}"),
            ),
            Failure::InvalidSeed(err) if err.is_malformed() => {
                Self::new(Severity::Error, format!("{err}."))
            }
            Failure::InvalidSeed(err) => Self::new(Severity::Warning, format!("{err}.")),
            Failure::DerivativeZero { at_seed: true, .. } => Self::new(
                Severity::Warning,
                "The derivative at x0 is zero. Choose another initial value.".to_string(),
            ),
            Failure::DerivativeZero { x, .. } => Self::new(
                Severity::Warning,
                format!("Zero derivative during iteration (x = {x})."),
            ),
            Failure::DegenerateDenominator { x0, x1 } => Self::new(
                Severity::Warning,
                format!("Zero difference in the denominator (x0 = {x0}, x1 = {x1})."),
            ),
            Failure::NonConvergent { iters, .. } => Self::new(
                Severity::Warning,
                format!("No convergence after {iters} iterations."),
            ),
            Failure::Unexpected { reason } => {
                Self::new(Severity::Error, format!("Unexpected error: {reason}"))
            }
        }
    }

    fn new(severity: Severity, message: String) -> Self {
        let title = match severity {
            Severity::Info => "Result",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        Self {
            severity,
            title,
            message,
        }
    }
}

impl From<&Outcome> for Report {
    fn from(outcome: &Outcome) -> Self {
        Self::from_outcome(outcome)
    }
}

/// Formats a root to six decimal places.
#[must_use]
pub fn format_root(value: f64) -> String {
    format!("{value:.6}")
}

/// Formats the legend label for a root marker, to four decimal places.
#[must_use]
pub fn root_label(value: f64) -> String {
    format!("Root ≈ {value:.4}")
}
