//! Second-order Runge-Kutta stepping (the midpoint method).
//!
//! ```text
//! k1 = h * f(x_n, t_n)
//! k2 = h * f(x_n + k1/2, t_n + h/2)
//! x_{n+1} = x_n + k2
//! ```
//!
//! The derivative is sampled at an Euler estimate of the interval midpoint,
//! which cancels the h² term of the Taylor expansion. Two evaluations of `f`
//! per step, local error O(h³), global error O(h²).

use odestep_core::{DerivativeFn, DerivativeOf, Finite, StepIntegrable};

use super::{Error, Stepper, config::check_step_size, evaluate};

/// The midpoint method as a [`Stepper`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk2;

/// Takes one midpoint step from `(state, time)` with step size `dt`.
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

    let d1 = evaluate::evaluate(f, state, time)?;
    let midpoint = state.step(&d1, half);

    let d2 = evaluate::evaluate(f, &midpoint, time + half)?;

    evaluate::finite_state(state.step(&d2, dt), time + dt)
}

impl Stepper for Rk2 {
    fn name(&self) -> &'static str {
        "rk2"
    }

    fn order(&self) -> u32 {
        2
    }

    fn stages(&self) -> usize {
        2
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

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use approx::assert_relative_eq;

    #[test]
    fn zero_derivative_is_identity() {
        let f = |_: &f64, _t: f64| 0.0;

        for (x, t, h) in [(1.5, 0.0, 0.1), (-3.0, 10.0, 2.5)] {
            assert_eq!(step(&x, t, h, &f).unwrap(), x);
        }
    }

    #[test]
    fn constant_derivative_is_exact() {
        let f = |_: &f64, _t: f64| -4.0;

        assert_relative_eq!(step(&1.0, 0.0, 0.25, &f).unwrap(), 0.0);
    }

    #[test]
    fn evaluates_start_then_midpoint() {
        let calls = RefCell::new(Vec::new());
        let f = |x: &f64, t: f64| {
            calls.borrow_mut().push((*x, t));
            1.0
        };

        step(&0.0, 2.0, 0.5, &f).unwrap();

        assert_eq!(*calls.borrow(), vec![(0.0, 2.0), (0.25, 2.25)]);
    }

    #[test]
    fn exact_for_linear_in_time() {
        // dx/dt = t integrates to t²/2; the midpoint rule is exact for it.
        let f = |_: &f64, t: f64| t;

        assert_relative_eq!(step(&0.0, 0.0, 1.0, &f).unwrap(), 0.5);
    }

    #[test]
    fn stops_at_first_non_finite_stage() {
        let calls = RefCell::new(0);
        let f = |_: &f64, t: f64| {
            *calls.borrow_mut() += 1;
            if t > 0.0 { f64::INFINITY } else { 1.0 }
        };

        let err = step(&0.0, 0.0, 0.2, &f).unwrap_err();

        assert!(matches!(err, Error::NonFiniteDerivative { time } if time == 0.1));
        assert_eq!(*calls.borrow(), 2);
    }
}
