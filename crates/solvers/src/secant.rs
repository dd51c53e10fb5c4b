//! Secant iteration for a scalar root.
//!
//! # Algorithm
//!
//! The secant method replaces the derivative in Newton's update with the slope
//! through the two latest iterates:
//!
//! ```text
//! x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! after which `(x0, x1)` becomes `(x1, x2)`. Each iteration evaluates `f` once,
//! since `f(x1)` is carried forward as the next `f(x0)`.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after `x2` is computed and
//! before the convergence check. Returning [`Action::StopEarly`] ends the solve
//! with [`Status::StoppedByObserver`] at `x2`.

mod error;
mod event;


pub use error::Error;
pub use event::Event;

use rootfind_core::{Function, Observer};
use tracing::{debug, trace};

use crate::{Action, Config, Solution, Status};

/// Finds a root of `f` using the secant method from seeds `x0` and `x1`.
///
/// # Errors
///
/// Returns an error if either seed is not finite, if the seeds are equal, if
/// two successive function values are exactly equal, or if a function value
/// or next iterate is not finite.
#[allow(clippy::float_cmp)]
pub fn solve<F, Obs>(
    f: &F,
    x0: f64,
    x1: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    debug!(
        method = "secant",
        x0,
        x1,
        tolerance = config.tolerance(),
        max_iters = config.max_iters(),
        "starting solve"
    );

    if !x0.is_finite() || !x1.is_finite() {
        return Err(fail(Error::NonFiniteSeed { x0, x1 }));
    }
    if x0 == x1 {
        return Err(fail(Error::EqualSeeds { x: x0 }));
    }

    let (mut x0, mut x1) = (x0, x1);
    let mut fx0 = finite(f.call(x0), x0)?;
    let mut step = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let fx1 = finite(f.call(x1), x1)?;
        let denominator = fx1 - fx0;
        if denominator == 0.0 {
            return Err(fail(Error::DegenerateDenominator { x0, x1, fx: fx1 }));
        }

        let next = finite(x1 - fx1 * (x1 - x0) / denominator, x1)?;
        step = (next - x1).abs();
        trace!(iter, x0, x1, fx0, fx1, next, step, "secant iteration");

        let event = Event {
            iter,
            x0,
            x1,
            fx0,
            fx1,
            next,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(done(Solution::at(f, Status::StoppedByObserver, next, step, iter)));
        }

        if step < config.tolerance() {
            return Ok(done(Solution::at(f, Status::Converged, next, step, iter)));
        }
        (x0, x1) = (x1, next);
        fx0 = fx1;
    }

    Ok(done(Solution::at(
        f,
        Status::MaxIters,
        x1,
        step,
        config.max_iters(),
    )))
}

/// Finds a root of `f` using the secant method without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(f: &F, x0: f64, x1: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(f, x0, x1, config, ())
}

fn finite(value: f64, x: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(fail(Error::NonFiniteValue { x, value }))
    }
}

fn fail(error: Error) -> Error {
    debug!(method = "secant", %error, "solve failed");
    error
}

fn done(solution: Solution) -> Solution {
    debug!(
        method = "secant",
        status = ?solution.status,
        x = solution.x,
        iters = solution.iters,
        "solve finished"
    );
    solution
}
