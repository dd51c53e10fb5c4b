use rootfind_core::Observer;

use crate::traits::{CanStopEarly, HasIterate};

/// One recorded solver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub estimate: f64,
    pub residual: f64,
    pub step: f64,
}

/// An observer that records every iteration of a solve.
///
/// Pass `&mut History` as the solver observer so the records can be read
/// after the solve completes. With [`History::with_limit`], the observer also
/// stops the solver once that many iterations have been recorded.
///
/// # Example
///
/// ```
/// use rootfind_observers::History;
/// use rootfind_solvers::{Config, newton};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let mut history = History::new();
/// let solution = newton::solve(&f, &df, 1.0, &Config::default(), &mut history).unwrap();
///
/// assert_eq!(history.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
    limit: Option<usize>,
}

impl History {
    /// Creates an empty history with no iteration limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history that stops the solver after `limit` records.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Records a single iteration.
    pub fn record(&mut self, record: Record) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `[iter, estimate]` points for plotting the convergence path.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn estimates(&self) -> Vec<[f64; 2]> {
        self.records
            .iter()
            .map(|r| [r.iter as f64, r.estimate])
            .collect()
    }

    /// Returns `[iter, |step|]` points for plotting step sizes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn steps(&self) -> Vec<[f64; 2]> {
        self.records
            .iter()
            .map(|r| [r.iter as f64, r.step])
            .collect()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIterate,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(Record {
            iter: event.iter(),
            estimate: event.estimate(),
            residual: event.residual(),
            step: event.step(),
        });

        match self.limit {
            Some(limit) if self.records.len() >= limit => Some(A::stop_early()),
            _ => None,
        }
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasIterate,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
