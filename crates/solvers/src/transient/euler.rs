//! Forward Euler stepping.
//!
//! ```text
//! x_{n+1} = x_n + h * f(x_n, t_n)
//! ```
//!
//! One evaluation of `f` per step. The local truncation error is O(h²);
//! summed over `N = T/h` steps the global error is O(h).

use odestep_core::{DerivativeFn, DerivativeOf, Finite, StepIntegrable};

use super::{Error, Stepper, config::check_step_size, evaluate};

/// The forward Euler method as a [`Stepper`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

/// Takes one forward Euler step from `(state, time)` with step size `dt`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `dt` is not finite and positive
/// (without evaluating `f`), or the error from evaluating `f`.
pub fn step<S, F>(state: &S, time: f64, dt: f64, f: &F) -> Result<S, Error>
where
    S: StepIntegrable<f64> + Finite,
    DerivativeOf<S, f64>: Finite,
    F: DerivativeFn<S>,
{
    check_step_size(dt)?;

    let derivative = evaluate::evaluate(f, state, time)?;

    evaluate::finite_state(state.step(&derivative, dt), time + dt)
}

impl Stepper for Euler {
    fn name(&self) -> &'static str {
        "euler"
    }

    fn order(&self) -> u32 {
        1
    }

    fn stages(&self) -> usize {
        1
    }

    fn advance<S, F>(&self, f: &F, state: &S, time: f64, dt: f64) -> Result<S, Error>
    where
        S: StepIntegrable<f64> + Finite,
        DerivativeOf<S, f64>: Finite,
        F: DerivativeFn<S>,
    {
        step(state, time, dt, f)
    }
}
