use std::convert::Infallible;

use crate::{DerivativeOf, StepIntegrable};

/// The right-hand side of an ODE, `dx/dt = f(x, t)`.
///
/// Implementations must be pure: the same `(state, time)` always yields the
/// same derivative. Runge-Kutta steppers evaluate `f` several times per step at
/// candidate points and rely on repeatable results.
///
/// Any closure `Fn(&S, f64) -> DerivativeOf<S, f64>` implements this trait with
/// [`Infallible`] as its error. For a closure that can fail, wrap it in
/// [`Fallible`]. Types with more structure can implement the trait directly.
pub trait DerivativeFn<S: StepIntegrable<f64>> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative of `state` at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative is undefined at this point,
    /// for example a division by zero inside the model.
    fn evaluate(&self, state: &S, time: f64) -> Result<DerivativeOf<S, f64>, Self::Error>;
}

impl<S, F> DerivativeFn<S> for F
where
    S: StepIntegrable<f64>,
    F: Fn(&S, f64) -> DerivativeOf<S, f64>,
{
    type Error = Infallible;

    fn evaluate(&self, state: &S, time: f64) -> Result<DerivativeOf<S, f64>, Self::Error> {
        Ok(self(state, time))
    }
}

/// Adapts a closure returning `Result` into a [`DerivativeFn`].
///
/// ```
/// use odestep_core::{DerivativeFn, Fallible};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("x must be non-zero")]
/// struct Singular;
///
/// let f = Fallible(|x: &f64, _t: f64| if *x == 0.0 { Err(Singular) } else { Ok(1.0 / x) });
///
/// assert_eq!(f.evaluate(&2.0, 0.0).unwrap(), 0.5);
/// assert!(f.evaluate(&0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<S, F, E> DerivativeFn<S> for Fallible<F>
where
    S: StepIntegrable<f64>,
    F: Fn(&S, f64) -> Result<DerivativeOf<S, f64>, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, state: &S, time: f64) -> Result<DerivativeOf<S, f64>, Self::Error> {
        (self.0)(state, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("log of non-positive value {0}")]
    struct Domain(f64);

    /// dx/dt = -k x, with `k` captured by the struct.
    struct Decay {
        k: f64,
    }

    impl DerivativeFn<f64> for Decay {
        type Error = Infallible;

        fn evaluate(&self, state: &f64, _time: f64) -> Result<f64, Self::Error> {
            Ok(-self.k * state)
        }
    }

    #[test]
    fn closures_are_derivative_functions() {
        let k = 3.0;
        let f = move |x: &f64, t: f64| k * x + t;

        assert_eq!(f.evaluate(&2.0, 1.0), Ok(7.0));
    }

    #[test]
    fn array_closures() {
        let oscillator = |x: &[f64; 2], _t: f64| [x[1], -x[0]];

        assert_eq!(oscillator.evaluate(&[1.0, 0.5], 0.0), Ok([0.5, -1.0]));
    }

    #[test]
    fn structs_implement_the_trait() {
        let f = Decay { k: 0.5 };

        assert_eq!(f.evaluate(&4.0, 10.0), Ok(-2.0));
    }

    #[test]
    fn fallible_closures_report_errors() {
        let f = Fallible(|x: &f64, _t: f64| {
            if *x > 0.0 {
                Ok(x.ln())
            } else {
                Err(Domain(*x))
            }
        });

        assert_eq!(f.evaluate(&1.0, 0.0), Ok(0.0));
        assert_eq!(f.evaluate(&-1.0, 0.0), Err(Domain(-1.0)));
    }
}
