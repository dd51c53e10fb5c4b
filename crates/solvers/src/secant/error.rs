use thiserror::Error;

/// Errors that can occur during secant iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("seeds must be finite, got x0 = {x0} and x1 = {x1}")]
    NonFiniteSeed { x0: f64, x1: f64 },

    #[error("seeds must differ, both are {x}")]
    EqualSeeds { x: f64 },

    #[error("f(x0) and f(x1) are both {fx} at x0 = {x0}, x1 = {x1}")]
    DegenerateDenominator { x0: f64, x1: f64, fx: f64 },

    #[error("non-finite value {value} while iterating at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}
