use odestep_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a run as soon as `predicate` holds for an event.
///
/// The predicate sees every event, including the initial point.
///
/// # Example
///
/// ```
/// use odestep_observers::StopWhen;
/// use odestep_solvers::transient::{Config, Event, Rk4, integrate};
///
/// // Stop once the decaying state drops below one half.
/// let observer = StopWhen(|event: &Event<'_, f64>| *event.state() < 0.5);
/// let config = Config::new(0.0, 0.1, 100).unwrap();
///
/// let solution = integrate(&Rk4, &|x: &f64, _t: f64| -x, 1.0, &config, observer).unwrap();
///
/// assert_eq!(solution.steps, 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StopWhen<P>(pub P);

impl<E, A, P> Observer<E, A> for StopWhen<P>
where
    A: CanStopEarly,
    P: FnMut(&E) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.0)(event).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use odestep_solvers::transient::{Config, Event, Method, Status, integrate};

    #[test]
    fn stops_when_predicate_holds() {
        let config = Config::new(0.0, 0.25, 40).unwrap();

        let observer = StopWhen(|event: &Event<'_, f64>| event.time() >= 2.0);
        let solution = integrate(&Method::Rk2, &|_: &f64, _t: f64| 1.0, 0.0, &config, observer)
            .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 8);

        let last = solution.trajectory.last().unwrap();
        assert_relative_eq!(last.state, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn never_stopping_completes() {
        let config = Config::new(0.0, 0.1, 10).unwrap();

        let mut seen = 0;
        let observer = StopWhen(|_: &Event<'_, f64>| {
            seen += 1;
            false
        });
        let solution = integrate(&Method::Euler, &|x: &f64, _t: f64| *x, 1.0, &config, observer)
            .unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(seen, 11);
    }
}
