use odestep_core::Observer;

use crate::traits::{CanStopEarly, HasStep};

/// Stops a run once it has taken `max_steps` steps.
///
/// A budget of zero stops before the first step, leaving only the initial
/// point in the trajectory.
///
/// # Example
///
/// ```
/// use odestep_observers::StepBudget;
/// use odestep_solvers::transient::{Config, Rk4, Status, integrate};
///
/// let config = Config::new(0.0, 0.1, 1_000).unwrap();
/// let solution = integrate(&Rk4, &|x: &f64, _t: f64| -x, 1.0, &config, StepBudget::new(20))
///     .unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(solution.trajectory.len(), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBudget {
    pub max_steps: usize,
}

impl StepBudget {
    #[must_use]
    pub fn new(max_steps: usize) -> Self {
        Self { max_steps }
    }
}

impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepBudget {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.step() >= self.max_steps).then(A::stop_early)
    }
}
