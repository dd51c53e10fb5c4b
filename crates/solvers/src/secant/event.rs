/// Event emitted by the secant solver after each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The iteration number, starting at 1.
    pub iter: usize,

    /// The older iterate.
    pub x0: f64,

    /// The newer iterate.
    pub x1: f64,

    /// Function value at `x0`.
    pub fx0: f64,

    /// Function value at `x1`.
    pub fx1: f64,

    /// The next iterate.
    pub next: f64,

    /// Distance between `x1` and `next`.
    pub step: f64,
}
