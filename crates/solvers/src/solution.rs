use rootfind_core::Function;

/// Indicates whether the solver converged or stopped for another reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The last step was smaller than the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Function value at `x`.
    pub residual: f64,

    /// Size of the last step taken.
    pub step: f64,

    /// Number of completed iterations.
    pub iters: usize,
}

impl Solution {
    /// Builds a solution at `x`, evaluating the residual there.
    pub(crate) fn at<F>(f: &F, status: Status, x: f64, step: f64, iters: usize) -> Self
    where
        F: Function + ?Sized,
    {
        Self {
            status,
            x,
            residual: f.call(x),
            step,
            iters,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
