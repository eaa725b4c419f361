//! Capability traits for generic observers.
//!
//! These traits abstract over the driver's event and action types so that
//! observers only depend on what they actually inspect.
//!
//! # Example
//!
//! ```rust
//! use odestep_core::Observer;
//! use odestep_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops once the run passes a time horizon.
//! struct Horizon(f64);
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for Horizon {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use odestep_solvers::transient;

/// An event that knows its step index.
///
/// Step 0 is the initial point.
pub trait HasStep {
    fn step(&self) -> usize;
}

/// An event that knows the time of its point.
pub trait HasTime {
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the run early.
    fn stop_early() -> Self;
}

impl<S> HasStep for transient::Event<'_, S> {
    fn step(&self) -> usize {
        self.step
    }
}

impl<S> HasTime for transient::Event<'_, S> {
    fn time(&self) -> f64 {
        transient::Event::time(self)
    }
}

impl CanStopEarly for transient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use odestep_core::Observer;
    use odestep_solvers::transient::{Action, Event, Point};

    /// Stops on odd steps once past a time horizon.
    struct OddAfter(f64);

    impl<E: HasStep + HasTime, A: CanStopEarly> Observer<E, A> for OddAfter {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.time() > self.0 && event.step() % 2 == 1).then(A::stop_early)
        }
    }

    #[test]
    fn driver_event_exposes_step_and_time() {
        let point = Point {
            time: 1.5,
            state: [0.0, 1.0],
        };
        let event = Event {
            step: 3,
            point: &point,
        };

        assert_eq!(HasStep::step(&event), 3);
        assert_eq!(HasTime::time(&event), 1.5);
    }

    #[test]
    fn generic_observer_drives_driver_actions() {
        let mut observer = OddAfter(1.0);
        let point = Point {
            time: 2.0,
            state: 0.0,
        };

        let even = Event {
            step: 2,
            point: &point,
        };
        let odd = Event {
            step: 3,
            point: &point,
        };

        assert_eq!(Observer::<_, Action>::observe(&mut observer, &even), None);
        assert_eq!(
            Observer::<_, Action>::observe(&mut observer, &odd),
            Some(Action::StopEarly)
        );
    }
}
