use rootfind_core::Observer;
use rootfind_expr::{Backend, Symbolic};
use rootfind_solvers::{Action, Config, Solution, Status, newton, secant};
use tracing::debug;

use crate::{Failure, Outcome, Root, Sampler, Series, Window};


/// Solves root-finding problems over an expression [`Backend`].
///
/// Every call parses and compiles its expression afresh and keeps no state
/// between calls, so one finder can serve any number of solves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootFinder<B = Symbolic> {
    backend: B,
}

impl RootFinder {
    /// Creates a finder using the built-in symbolic backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B> RootFinder<B>
where
    B: Backend,
    Failure: From<B::Error>,
{
    /// Creates a finder using a custom expression backend.
    ///
    /// The backend's errors become outcomes through `From<B::Error>` for
    /// [`Failure`], usually as [`Failure::InvalidExpression`].
    #[must_use]
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Parses and compiles `text` as a function of `variable`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error, as a [`Failure`], if the text does not
    /// parse or compile.
    pub fn compile(&self, text: &str, variable: &str) -> Result<B::Compiled, Failure> {
        let ast = self.backend.parse(text, variable)?;
        Ok(self.backend.compile(&ast)?)
    }

    /// Finds a root with Newton-Raphson from seed `x0`.
    pub fn newton(&self, text: &str, variable: &str, x0: f64, config: &Config) -> Outcome {
        self.newton_observed(text, variable, x0, config, ())
    }

    /// Finds a root with Newton-Raphson, reporting each iteration to `observer`.
    ///
    /// If the observer stops the solve, the outcome is
    /// [`Failure::NonConvergent`] at the latest estimate.
    pub fn newton_observed<Obs>(
        &self,
        text: &str,
        variable: &str,
        x0: f64,
        config: &Config,
        observer: Obs,
    ) -> Outcome
    where
        Obs: Observer<newton::Event, Action>,
    {
        let result = self.run_newton(text, variable, x0, config, observer);
        classify("newton", result)
    }

    /// Finds a root with the Secant method from seeds `x0` and `x1`.
    pub fn secant(&self, text: &str, variable: &str, x0: f64, x1: f64, config: &Config) -> Outcome {
        self.secant_observed(text, variable, x0, x1, config, ())
    }

    /// Finds a root with the Secant method, reporting each iteration to
    /// `observer`.
    ///
    /// If the observer stops the solve, the outcome is
    /// [`Failure::NonConvergent`] at the latest estimate.
    pub fn secant_observed<Obs>(
        &self,
        text: &str,
        variable: &str,
        x0: f64,
        x1: f64,
        config: &Config,
        observer: Obs,
    ) -> Outcome
    where
        Obs: Observer<secant::Event, Action>,
    {
        let result = self.run_secant(text, variable, x0, x1, config, observer);
        classify("secant", result)
    }

    /// Samples `text` in a window around `root` for plotting.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::InvalidExpression`] if the text does not parse.
    pub fn sample(
        &self,
        text: &str,
        variable: &str,
        root: f64,
        window: &Window,
    ) -> Result<Series, Failure> {
        let f = self.compile(text, variable)?;
        Ok(Sampler::new(&f).sample(root, window))
    }

    fn run_newton<Obs>(
        &self,
        text: &str,
        variable: &str,
        x0: f64,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Failure>
    where
        Obs: Observer<newton::Event, Action>,
    {
        let ast = self.backend.parse(text, variable)?;
        let derivative = self.backend.differentiate(&ast, variable)?;
        let f = self.backend.compile(&ast)?;
        let df = self.backend.compile(&derivative)?;
        Ok(newton::solve(&f, &df, x0, config, observer)?)
    }

    fn run_secant<Obs>(
        &self,
        text: &str,
        variable: &str,
        x0: f64,
        x1: f64,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Failure>
    where
        Obs: Observer<secant::Event, Action>,
    {
        let f = self.compile(text, variable)?;
        Ok(secant::solve(&f, x0, x1, config, observer)?)
    }
}

fn classify(method: &'static str, result: Result<Solution, Failure>) -> Outcome {
    let outcome = result.and_then(|solution| match solution.status {
        Status::Converged if solution.residual.is_finite() => Ok(Root {
            value: solution.x,
            residual: solution.residual,
            iters: solution.iters,
        }),
        Status::Converged => Err(Failure::Unexpected {
            reason: format!(
                "non-finite value {} at the root x = {}",
                solution.residual, solution.x
            ),
        }),
        Status::MaxIters | Status::StoppedByObserver => Err(Failure::NonConvergent {
            iters: solution.iters,
            last: solution.x,
        }),
    });

    match &outcome {
        Ok(root) => debug!(method, root = root.value, iters = root.iters, "found root"),
        Err(failure) => debug!(method, kind = ?failure.kind(), %failure, "no root"),
    }
    outcome
}

/// Finds a root of `text` with Newton-Raphson from seed `x0`.
///
/// # Example
///
/// ```
/// use rootfind::{Config, FailureKind, solve_newton};
///
/// let failure = solve_newton("5", "x", 1.0, &Config::default()).unwrap_err();
/// assert_eq!(failure.kind(), FailureKind::DerivativeZero);
/// ```
pub fn solve_newton(text: &str, variable: &str, x0: f64, config: &Config) -> Outcome {
    RootFinder::new().newton(text, variable, x0, config)
}

/// Finds a root of `text` with the Secant method from seeds `x0` and `x1`.
pub fn solve_secant(text: &str, variable: &str, x0: f64, x1: f64, config: &Config) -> Outcome {
    RootFinder::new().secant(text, variable, x0, x1, config)
}

/// Like [`solve_newton`], reporting each iteration to `observer`.
pub fn solve_newton_observed<Obs>(
    text: &str,
    variable: &str,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Outcome
where
    Obs: Observer<newton::Event, Action>,
{
    RootFinder::new().newton_observed(text, variable, x0, config, observer)
}

/// Like [`solve_secant`], reporting each iteration to `observer`.
pub fn solve_secant_observed<Obs>(
    text: &str,
    variable: &str,
    x0: f64,
    x1: f64,
    config: &Config,
    observer: Obs,
) -> Outcome
where
    Obs: Observer<secant::Event, Action>,
{
    RootFinder::new().secant_observed(text, variable, x0, x1, config, observer)
}

/// Samples `text` in a window around `root` using the symbolic backend.
///
/// # Errors
///
/// Returns [`Failure::InvalidExpression`] if the text does not parse.
pub fn sample(text: &str, variable: &str, root: f64, window: &Window) -> Result<Series, Failure> {
    RootFinder::new().sample(text, variable, root, window)
}
