use odestep_core::{DerivativeFn, DerivativeOf, Finite, StepIntegrable};

use super::Error;

/// Evaluates `f` at `(state, time)` and checks the result.
///
/// A failure inside `f` becomes [`Error::DerivativeFailed`] and a NaN or
/// infinite component becomes [`Error::NonFiniteDerivative`].
pub(crate) fn evaluate<S, F>(f: &F, state: &S, time: f64) -> Result<DerivativeOf<S, f64>, Error>
where
    S: StepIntegrable<f64>,
    DerivativeOf<S, f64>: Finite,
    F: DerivativeFn<S>,
{
    let derivative = f
        .evaluate(state, time)
        .map_err(|err| Error::derivative(time, err))?;

    if derivative.is_finite() {
        Ok(derivative)
    } else {
        Err(Error::NonFiniteDerivative { time })
    }
}

/// Returns `state` if every component is finite.
pub(crate) fn finite_state<S: Finite>(state: S, time: f64) -> Result<S, Error> {
    if state.is_finite() {
        Ok(state)
    } else {
        Err(Error::NonFiniteState { time })
    }
}
