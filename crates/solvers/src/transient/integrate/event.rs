use super::Point;

/// Event emitted by the driver for each point appended to the trajectory.
///
/// Step 0 is the initial point before any integration.
/// Steps 1..N are emitted after each accepted step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, S> {
    /// The step number (0 for the initial point).
    pub step: usize,

    /// The point just appended.
    pub point: &'a Point<S>,
}

impl<S> Event<'_, S> {
    /// Returns the time of the appended point.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.point.time
    }

    /// Returns the state of the appended point.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.point.state
    }
}
