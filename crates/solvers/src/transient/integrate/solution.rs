use crate::transient::Error;

use super::Trajectory;

/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a successful integration run.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the driver terminated.
    pub status: Status,

    /// Every computed point, starting with the initial condition.
    pub trajectory: Trajectory<S>,

    /// Number of integration steps completed.
    pub steps: usize,
}

/// A run that aborted, with the points computed before the failure.
///
/// For parameter errors the trajectory is empty and `step` is 0. For errors
/// during integration, `step` is the step that failed and the trajectory
/// holds the `step` valid points that precede it.
#[derive(Debug, thiserror::Error)]
#[error("integration failed at step {step}: {error}")]
pub struct Failure<S> {
    /// Why the run aborted.
    #[source]
    pub error: Error,

    /// Points computed before the failure.
    pub trajectory: Trajectory<S>,

    /// The step that failed (1-based), or 0 if no step was attempted.
    pub step: usize,
}
