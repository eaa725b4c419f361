//! Classic fourth-order Runge-Kutta stepping.
//!
//! ```text
//! k1 = h * f(x_n, t_n)
//! k2 = h * f(x_n + k1/2, t_n + h/2)
//! k3 = h * f(x_n + k2/2, t_n + h/2)
//! k4 = h * f(x_n + k3, t_n + h)
//! x_{n+1} = x_n + (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```
//!
//! Each stage depends on the one before it, so the four evaluations of `f`
//! run strictly in order. Local error O(h⁵), global error O(h⁴).

use odestep_core::{DerivativeFn, DerivativeOf, Finite, StepIntegrable};

use super::{Error, Stepper, config::check_step_size, evaluate};

/// The classic fourth-order Runge-Kutta method as a [`Stepper`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

/// Takes one RK4 step from `(state, time)` with step size `dt`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `dt` is not finite and positive
/// (without evaluating `f`), or the first error from evaluating `f`.
pub fn step<S, F>(state: &S, time: f64, dt: f64, f: &F) -> Result<S, Error>
where
    S: StepIntegrable<f64> + Finite,
    DerivativeOf<S, f64>: Finite,
    F: DerivativeFn<S>,
{
    check_step_size(dt)?;

    let half = 0.5 * dt;
    let t_half = time + half;
    let t_end = time + dt;

    let d1 = evaluate::evaluate(f, state, time)?;
    let d2 = evaluate::evaluate(f, &state.step(&d1, half), t_half)?;
    let d3 = evaluate::evaluate(f, &state.step(&d2, half), t_half)?;
    let d4 = evaluate::evaluate(f, &state.step(&d3, dt), t_end)?;

    // x + h/6 (d1 + 2 d2 + 2 d3 + d4), applied one weighted stage at a time.
    let sixth = dt / 6.0;
    let third = dt / 3.0;
    let next = state
        .step(&d1, sixth)
        .step(&d2, third)
        .step(&d3, third)
        .step(&d4, sixth);

    evaluate::finite_state(next, t_end)
}

impl Stepper for Rk4 {
    fn name(&self) -> &'static str {
        "rk4"
    }

    fn order(&self) -> u32 {
        4
    }

    fn stages(&self) -> usize {
        4
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
