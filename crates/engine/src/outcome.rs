use rootfind_expr::ExprError;
use rootfind_solvers::{newton, secant};
use thiserror::Error;

/// A converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// The root estimate.
    pub value: f64,

    /// `f(value)`.
    pub residual: f64,

    /// Number of iterations the solver took.
    pub iters: usize,
}

/// Why a solve did not produce a root.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Failure {
    /// The expression text does not parse, or has no symbolic derivative.
    #[error("invalid expression: {0}")]
    InvalidExpression(#[from] ExprError),

    /// A seed is malformed or non-finite, or the secant seeds are equal.
    #[error("invalid seed: {0}")]
    InvalidSeed(#[from] SeedError),

    /// The Newton derivative is exactly zero at an iterate.
    #[error("derivative is zero at x = {x}")]
    DerivativeZero { x: f64, at_seed: bool },

    /// The secant slope has a zero denominator.
    #[error("f(x0) equals f(x1) at x0 = {x0}, x1 = {x1}")]
    DegenerateDenominator { x0: f64, x1: f64 },

    /// The iteration budget ran out. `last` is the final estimate.
    #[error("no convergence after {iters} iterations")]
    NonConvergent { iters: usize, last: f64 },

    /// Anything else, such as a non-finite evaluation.
    #[error("unexpected error: {reason}")]
    Unexpected { reason: String },
}

/// What is wrong with a seed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The seed text is not a number.
    #[error("{label} must be a number")]
    NotANumber { label: String },

    /// The seed is infinite or NaN.
    #[error("{label} must be a finite number")]
    NotFinite { label: String },

    /// The two secant seeds coincide.
    #[error("x0 and x1 must be different")]
    Equal,
}

impl SeedError {
    /// Returns true if the seed could not be read as a usable number at all,
    /// as opposed to a valid number that the method cannot start from.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::NotANumber { .. } | Self::NotFinite { .. })
    }

    pub(crate) fn not_finite(label: &str) -> Self {
        Self::NotFinite {
            label: label.to_string(),
        }
    }
}

/// The failure taxonomy without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidExpression,
    InvalidSeed,
    DerivativeZero,
    DegenerateDenominator,
    NonConvergent,
    Unexpected,
}

/// The result of one solve call.
pub type Outcome = Result<Root, Failure>;

impl Failure {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidExpression(_) => FailureKind::InvalidExpression,
            Self::InvalidSeed(_) => FailureKind::InvalidSeed,
            Self::DerivativeZero { .. } => FailureKind::DerivativeZero,
            Self::DegenerateDenominator { .. } => FailureKind::DegenerateDenominator,
            Self::NonConvergent { .. } => FailureKind::NonConvergent,
            Self::Unexpected { .. } => FailureKind::Unexpected,
        }
    }
}

impl From<newton::Error> for Failure {
    fn from(err: newton::Error) -> Self {
        match err {
            newton::Error::NonFiniteSeed { .. } => SeedError::not_finite("x0").into(),
            newton::Error::DerivativeZero { x, iter } => Self::DerivativeZero {
                x,
                at_seed: iter == 0,
            },
            newton::Error::NonFiniteValue { .. } => Self::Unexpected {
                reason: err.to_string(),
            },
        }
    }
}

impl From<secant::Error> for Failure {
    fn from(err: secant::Error) -> Self {
        match err {
            secant::Error::NonFiniteSeed { x0, .. } if !x0.is_finite() => {
                SeedError::not_finite("x0").into()
            }
            secant::Error::NonFiniteSeed { .. } => SeedError::not_finite("x1").into(),
            secant::Error::EqualSeeds { .. } => SeedError::Equal.into(),
            secant::Error::DegenerateDenominator { x0, x1, .. } => {
                Self::DegenerateDenominator { x0, x1 }
            }
            secant::Error::NonFiniteValue { .. } => Self::Unexpected {
                reason: err.to_string(),
            },
        }
    }
}
