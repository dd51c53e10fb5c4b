//! Newton-Raphson iteration for a scalar root.
//!
//! # Algorithm
//!
//! Starting from a seed `x0`, each iteration evaluates `f(x)` and `f'(x)` and
//! moves to where the tangent line crosses zero:
//!
//! ```text
//! x_next = x - f(x) / f'(x)
//! ```
//!
//! The derivative is checked against the seed before the first iteration, so a
//! flat seed fails with [`Error::DerivativeZero`] at `iter == 0`. Later zero
//! derivatives report the number of iterations completed before them.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the next iterate is
//! computed and before the convergence check. Returning [`Action::StopEarly`]
//! ends the solve with [`Status::StoppedByObserver`] at the new iterate.

mod error;
mod event;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use event::Event;

use rootfind_core::{Function, Observer};
use tracing::{debug, trace};

use crate::{Action, Config, Solution, Status};

/// Finds a root of `f` using Newton-Raphson iteration.
///
/// `df` must be the derivative of `f`.
///
/// # Errors
///
/// Returns an error if the seed is not finite, if the derivative is exactly
/// zero at an iterate, or if a function value, derivative, or next iterate is
/// not finite.
#[allow(clippy::float_cmp)]
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    debug!(
        method = "newton",
        x0,
        tolerance = config.tolerance(),
        max_iters = config.max_iters(),
        "starting solve"
    );

    if !x0.is_finite() {
        return Err(fail(Error::NonFiniteSeed { x0 }));
    }
    if finite(df.call(x0), x0)? == 0.0 {
        return Err(fail(Error::DerivativeZero { x: x0, iter: 0 }));
    }

    let mut x = x0;
    let mut step = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let fx = finite(f.call(x), x)?;
        let dfx = finite(df.call(x), x)?;
        if dfx == 0.0 {
            return Err(fail(Error::DerivativeZero { x, iter: iter - 1 }));
        }

        let next = finite(x - fx / dfx, x)?;
        step = (next - x).abs();
        trace!(iter, x, fx, dfx, next, step, "newton iteration");

        let event = Event {
            iter,
            x,
            fx,
            dfx,
            next,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(done(Solution::at(f, Status::StoppedByObserver, next, step, iter)));
        }

        if step < config.tolerance() {
            return Ok(done(Solution::at(f, Status::Converged, next, step, iter)));
        }
        x = next;
    }

    Ok(done(Solution::at(
        f,
        Status::MaxIters,
        x,
        step,
        config.max_iters(),
    )))
}

/// Finds a root of `f` using Newton-Raphson iteration without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F, D>(f: &F, df: &D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
{
    solve(f, df, x0, config, ())
}

fn finite(value: f64, x: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(fail(Error::NonFiniteValue { x, value }))
    }
}

fn fail(error: Error) -> Error {
    debug!(method = "newton", %error, "solve failed");
    error
}

fn done(solution: Solution) -> Solution {
    debug!(
        method = "newton",
        status = ?solution.status,
        x = solution.x,
        iters = solution.iters,
        "solve finished"
    );
    solution
}
