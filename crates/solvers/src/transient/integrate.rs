//! Fixed-step integration driver.
//!
//! Runs a [`Stepper`] over the evenly spaced grid described by a [`Config`]
//! and records every point in a [`Trajectory`].
//!
//! # Example
//!
//! ```
//! use odestep_solvers::transient::{Config, Rk2, integrate_unobserved};
//!
//! // dx/dt = x + t, with exact solution e^t - t - 1.
//! let f = |x: &f64, t: f64| x + t;
//! let config = Config::until(0.0, 1.0, 0.25).unwrap();
//!
//! let solution = integrate_unobserved(&Rk2, &f, 0.0, &config).unwrap();
//!
//! assert_eq!(solution.trajectory.len(), 5);
//! assert_eq!(solution.trajectory[4].time, 1.0);
//! ```

mod action;
mod event;
mod solution;
mod trajectory;


pub use action::Action;
pub use event::Event;
pub use solution::{Failure, Solution, Status};
pub use trajectory::{Point, Trajectory};

use odestep_core::{DerivativeFn, DerivativeOf, Finite, Observer, StepIntegrable};

use super::{Config, Error, Method, ParameterError, Stepper};

/// Upper bound on the points reserved up front; longer runs grow on demand.
const PREALLOCATED_POINTS: usize = 1 << 16;

/// Integrates `dx/dt = f(x, t)` from `initial` over the grid in `config`.
///
/// # Algorithm
///
/// 1. Reject a non-finite initial state before `f` is ever called.
/// 2. Append `(t0, initial)` and emit step 0 to the observer.
/// 3. For each step `i` in `1..=N`:
///    - Advance the previous state with the stepper from `t_{i-1}` by `dt`.
///    - Compute `t_i = t0 + i * dt` (never by repeated addition).
///    - Append `(t_i, x_i)` and emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 4. Return the solution with the full trajectory.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial point and after each
/// step, and may return [`Action::StopEarly`] to end the run early. Stopping
/// early is not an error.
///
/// # Errors
///
/// Returns a [`Failure`] holding the error and every point computed before
/// it if the initial state is not finite, or if any evaluation of `f` fails or
/// produces a non-finite value.
pub fn integrate<St, S, F, Obs>(
    stepper: &St,
    f: &F,
    initial: S,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<S>, Failure<S>>
where
    St: Stepper,
    S: StepIntegrable<f64> + Finite,
    DerivativeOf<S, f64>: Finite,
    F: DerivativeFn<S>,
    Obs: for<'a> Observer<Event<'a, S>, Action>,
{
    let steps = config.steps();
    let dt = config.dt();

    if !initial.is_finite() {
        return Err(Failure {
            error: ParameterError::InitialState.into(),
            trajectory: Trajectory::with_capacity(0),
            step: 0,
        });
    }

    log::debug!(
        "integrating with {}: {} steps of {} from t = {}",
        stepper.name(),
        steps,
        dt,
        config.t0()
    );

    let mut trajectory =
        Trajectory::with_capacity(steps.saturating_add(1).min(PREALLOCATED_POINTS));

    // Emit initial event.
    let point = trajectory.push(config.t0(), initial);
    let event = Event { step: 0, point };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(stopped(trajectory, 0));
    }

    for step in 1..=steps {
        let prev = &trajectory[step - 1];

        let next_state = match stepper.advance(f, &prev.state, prev.time, dt) {
            Ok(state) => state,
            Err(error) => return Err(abort(error, trajectory, step)),
        };

        let point = trajectory.push(config.time_at(step), next_state);
        log::trace!("step {step}: t = {}", point.time);

        // Emit event to observer.
        let event = Event { step, point };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(stopped(trajectory, step));
        }
    }

    log::debug!("integration complete at t = {}", config.t_end());

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps,
    })
}

/// Integrates without observation.
///
/// This is a convenience wrapper around [`integrate`] that discards events.
///
/// # Errors
///
/// Returns a [`Failure`] under the same conditions as [`integrate`].
pub fn integrate_unobserved<St, S, F>(
    stepper: &St,
    f: &F,
    initial: S,
    config: &Config,
) -> Result<Solution<S>, Failure<S>>
where
    St: Stepper,
    S: StepIntegrable<f64> + Finite,
    DerivativeOf<S, f64>: Finite,
    F: DerivativeFn<S>,
{
    integrate(stepper, f, initial, config, ())
}

/// Integrates over `[t0, t_end]` divided into `steps` equal steps.
///
/// Builds the grid with [`Config::subdivide`] and runs [`integrate_unobserved`].
///
/// ```
/// use odestep_solvers::transient::{Method, solve};
///
/// let trajectory = solve(Method::Euler, &|x: &f64, _t: f64| -x, 1.0, 0.0, 1.0, 10)
///     .unwrap()
///     .trajectory;
///
/// let x_end = trajectory.last().unwrap().state;
/// assert!((x_end - 0.9_f64.powi(10)).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// Returns a [`Failure`] with an empty trajectory if the interval or step
/// count is invalid, or under the same conditions as [`integrate`].
pub fn solve<S, F>(
    method: Method,
    f: &F,
    initial: S,
    t0: f64,
    t_end: f64,
    steps: usize,
) -> Result<Solution<S>, Failure<S>>
where
    S: StepIntegrable<f64> + Finite,
    DerivativeOf<S, f64>: Finite,
    F: DerivativeFn<S>,
{
    let config = Config::subdivide(t0, t_end, steps).map_err(|err| Failure {
        error: err.into(),
        trajectory: Trajectory::with_capacity(0),
        step: 0,
    })?;

    integrate_unobserved(&method, f, initial, &config)
}

fn stopped<S>(trajectory: Trajectory<S>, steps: usize) -> Solution<S> {
    log::debug!("integration stopped by observer after {steps} steps");

    Solution {
        status: Status::StoppedByObserver,
        trajectory,
        steps,
    }
}

fn abort<S>(error: Error, trajectory: Trajectory<S>, step: usize) -> Failure<S> {
    log::warn!("integration aborted at step {step}: {error}");

    Failure {
        error,
        trajectory,
        step,
    }
}
