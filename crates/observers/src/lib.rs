//! Reusable observers for the rootfind solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the Newton-Raphson and Secant solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIterate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`]: records every iteration, optionally stopping after a limit
//! - [`ResidualBelow`]: stops once `|f(x)|` drops under a threshold
//!
//! [`Observer`]: rootfind_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod residual;

pub use history::{History, Record};
pub use residual::ResidualBelow;
