/// Hook that sees every iteration of a root solver.
///
/// A solver calls [`Observer::observe`] once per iteration with an event
/// describing the current iterate(s) and the proposed next estimate. Returning
/// `Some(action)` asks the solver to act on it (for example, to stop early);
/// returning `None` leaves the iteration untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Inspects one solver event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
