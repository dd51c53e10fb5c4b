//! Iterative root solvers for scalar functions of one variable.
//!
//! # Solvers
//!
//! - [`newton`]: tangent-line iteration using `f` and its derivative
//! - [`secant`]: derivative-free iteration from two distinct seeds
//!
//! Both share one contract. Iteration runs for at most
//! [`Config::max_iters`] steps and stops with [`Status::Converged`] as soon as
//! the distance between successive iterates is strictly less than
//! [`Config::tolerance`]. Running out of iterations is not an error: the
//! solver returns its latest estimate with [`Status::MaxIters`] and the caller
//! decides what that means.
//!
//! Division by an exact zero (a zero derivative, or two equal function values
//! in the secant slope) is reported as an error. There is no epsilon band
//! around zero.
//!
//! Every solver has an observed entry point that emits one event per
//! iteration, and an `_unobserved` wrapper that uses the no-op `()` observer.

mod action;
mod config;
mod solution;

pub mod newton;
pub mod secant;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use solution::{Solution, Status};
