//! Single-variable expressions for root finding.
//!
//! Text such as `"x**2 - 2"` or `"exp(-x) - x"` is parsed into a [`Formula`],
//! differentiated symbolically, and compiled into a [`Program`] that evaluates
//! the expression at a point. Parsing, differentiation, and compilation are
//! done by [`symb_anafis`]; this crate holds the input rules in front of it.
//! Solvers consume compiled programs through the
//! [`Function`](rootfind_core::Function) trait.
//!
//! # Grammar
//!
//! - Numbers: `2`, `0.5`, `.5`, `1e-3`
//! - Operators: `+`, `-`, `*`, `/`, and `^` or `**` for power (right-associative)
//! - Constants: `pi`, `E`
//! - Functions: `sin`, `cos`, `tan`, `cot`, `sec`, `csc`, `asin`, `acos`, `atan`,
//!   `sinh`, `cosh`, `tanh`, `asinh`, `acosh`, `atanh`, `exp`, `ln`/`log`,
//!   `sqrt`, `cbrt`, `abs`
//!
//! Every product needs an explicit `*`: `2x` and `(x + 1)(x - 1)` are errors.
//! Any other identifier is rejected, so a formula always has exactly one free
//! symbol. Trees deeper than [`MAX_DEPTH`] are rejected before parsing.
//!
//! # Example
//!
//! ```
//! let f = rootfind_expr::compile("x^2 - 2", "x").unwrap();
//! let df = rootfind_expr::differentiate_and_compile("x^2 - 2", "x").unwrap();
//! assert!((f.eval(3.0) - 7.0).abs() < 1e-12);
//! assert!((df.eval(3.0) - 6.0).abs() < 1e-12);
//! ```

mod backend;
mod error;
mod formula;
mod program;
mod screen;

pub use backend::{Backend, Symbolic};
pub use error::ExprError;
pub use formula::Formula;
pub use program::Program;
pub use screen::{CONSTANTS, FUNCTIONS, MAX_DEPTH};

/// Parses and compiles `text` as an expression in `variable`.
///
/// # Errors
///
/// Returns an [`ExprError`] if the text is not a valid expression in
/// `variable`.
pub fn compile(text: &str, variable: &str) -> Result<Program, ExprError> {
    Formula::parse(text, variable)?.compile()
}

/// Parses `text`, differentiates it with respect to `variable`, and compiles
/// the derivative.
///
/// # Errors
///
/// Returns an [`ExprError`] if the text is not a valid expression or has no
/// symbolic derivative.
pub fn differentiate_and_compile(text: &str, variable: &str) -> Result<Program, ExprError> {
    Formula::parse(text, variable)?.derivative()?.compile()
}
