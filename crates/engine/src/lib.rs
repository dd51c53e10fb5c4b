//! Find a real root of a single-variable expression.
//!
//! The expression arrives as text, is parsed and compiled once per call, and
//! is handed to one of two iterative solvers:
//!
//! - [`solve_newton`]: Newton-Raphson, using the symbolic derivative
//! - [`solve_secant`]: the Secant method, from two distinct seeds
//!
//! Each call returns an [`Outcome`]: either a converged [`Root`] or a
//! [`Failure`] of a specific kind. Failures are values, never panics, and are
//! never retried with another method or seed. [`Report`] turns an outcome into
//! a user-facing message, and [`Sampler`] produces `(x, f(x))` points around a
//! root for plotting.
//!
//! # Example
//!
//! ```
//! use rootfind::{Config, Report, Severity, solve_newton};
//!
//! let outcome = solve_newton("x**2 - 2", "x", 1.0, &Config::default());
//! let root = outcome.as_ref().expect("should converge");
//! assert!((root.value - 2.0_f64.sqrt()).abs() < 1e-9);
//!
//! let report = Report::from_outcome(&outcome);
//! assert_eq!(report.severity, Severity::Info);
//! assert_eq!(report.message, "Approximate root found: 1.414214");
//! ```

mod outcome;
mod report;
mod sample;
mod seed;
mod solve;

pub use outcome::{Failure, FailureKind, Outcome, Root, SeedError};
pub use report::{Report, Severity, format_root, root_label};
pub use sample::{Sampler, Series, Window, WindowError};
pub use seed::parse_seed;
pub use solve::{
    RootFinder, sample, solve_newton, solve_newton_observed, solve_secant, solve_secant_observed,
};

pub use rootfind_core::{Function, Observer};
pub use rootfind_expr::{Backend, ExprError, Program, Symbolic};
pub use rootfind_solvers::{Action, Config, ConfigError, Status, newton, secant};
