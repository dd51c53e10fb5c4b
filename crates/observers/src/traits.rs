//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch either solver.
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::Observer;
//! use rootfind_observers::traits::{CanStopEarly, HasIterate};
//!
//! struct SmallSteps {
//!     min_iters: usize,
//!     threshold: f64,
//! }
//!
//! impl<E: HasIterate, A: CanStopEarly> Observer<E, A> for SmallSteps {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iter() >= self.min_iters && event.step() < self.threshold {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootfind_solvers::{Action, newton, secant};

/// An event that describes one solver iteration.
pub trait HasIterate {
    /// Returns the iteration number, starting at 1.
    fn iter(&self) -> usize;

    /// Returns the new estimate produced by this iteration.
    fn estimate(&self) -> f64;

    /// Returns `f` at the iterate this step started from.
    fn residual(&self) -> f64;

    /// Returns the distance between the previous and new estimates.
    fn step(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIterate for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn estimate(&self) -> f64 {
        self.next
    }

    fn residual(&self) -> f64 {
        self.fx
    }

    fn step(&self) -> f64 {
        self.step
    }
}

impl HasIterate for secant::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn estimate(&self) -> f64 {
        self.next
    }

    fn residual(&self) -> f64 {
        self.fx1
    }

    fn step(&self) -> f64 {
        self.step
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
