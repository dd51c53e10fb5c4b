use rootfind_core::Observer;

use crate::traits::{CanStopEarly, HasIterate};

/// An observer that stops the solver once `|f(x)|` falls below a threshold.
///
/// The solvers converge on step size alone. This observer adds a residual
/// test on top, which helps for functions that are very flat near the root.
/// The residual checked is the one at the start of each iteration, so the
/// solve stops one step after an iterate meets the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualBelow {
    threshold: f64,
}

impl ResidualBelow {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl<E, A> Observer<E, A> for ResidualBelow
where
    E: HasIterate,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual().abs() < self.threshold).then(A::stop_early)
    }
}
