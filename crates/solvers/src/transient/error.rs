use std::error::Error as StdError;

use super::ParameterError;

/// Errors that can occur while stepping or integrating.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A step size, step count, time, or initial state was rejected before
    /// any evaluation of the derivative function.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    /// The derivative function returned NaN or infinity.
    #[error("non-finite derivative at t = {time}")]
    NonFiniteDerivative { time: f64 },

    /// Finite derivatives produced a non-finite state, for example by overflow.
    #[error("non-finite state at t = {time}")]
    NonFiniteState { time: f64 },

    /// The derivative function itself failed.
    #[error("derivative function failed at t = {time}: {source}")]
    DerivativeFailed {
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(time: f64, err: E) -> Self {
        Self::DerivativeFailed {
            time,
            source: Box::new(err),
        }
    }
}
