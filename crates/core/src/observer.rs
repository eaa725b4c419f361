/// Receives events from a solver and optionally returns a control action.
///
/// Solvers define their own event type `E` and action type `A`. Returning
/// `None` lets the solver continue unchanged.
///
/// Implemented for `()`, which never acts, and for any closure
/// `FnMut(&E) -> Option<A>`.
pub trait Observer<E, A> {
    /// Observes an event, returning an action for the solver to take.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
