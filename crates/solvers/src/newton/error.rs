use thiserror::Error;

/// Errors that can occur during Newton-Raphson iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("seed must be finite, got {x0}")]
    NonFiniteSeed { x0: f64 },

    /// `iter` counts completed iterations, so zero means the seed itself.
    #[error("derivative is zero at x = {x} after {iter} iterations")]
    DerivativeZero { x: f64, iter: usize },

    #[error("non-finite value {value} while iterating at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl Error {
    /// Returns true if the derivative vanished at the seed.
    #[must_use]
    pub fn is_flat_seed(&self) -> bool {
        matches!(self, Self::DerivativeZero { iter: 0, .. })
    }
}
