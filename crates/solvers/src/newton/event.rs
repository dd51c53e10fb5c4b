/// Event emitted by the Newton-Raphson solver after each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The iteration number, starting at 1.
    pub iter: usize,

    /// The iterate this step started from.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Derivative value at `x`.
    pub dfx: f64,

    /// The next iterate.
    pub next: f64,

    /// Distance between `x` and `next`.
    pub step: f64,
}
