//! Core traits for scalar root finding.
//!
//! This crate defines the shared abstractions that the expression compiler,
//! the solvers, and the observers build on:
//!
//! - [`Function`]: a pure mapping from a real number to a real number, callable
//!   on scalars and on slices
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
