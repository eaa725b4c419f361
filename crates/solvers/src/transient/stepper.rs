use std::{fmt, str::FromStr};

use odestep_core::{DerivativeFn, DerivativeOf, Finite, StepIntegrable};
use thiserror::Error;

use super::{Error, Euler, Rk2, Rk4, euler, rk2, rk4};

/// The capability to advance a state by one fixed step.
///
/// Implemented by the [`Euler`], [`Rk2`], and [`Rk4`] unit structs and by the
/// [`Method`] enum, which selects one of them at runtime. The driver is
/// written once against this trait.
pub trait Stepper {
    /// Returns a short lowercase name for the method.
    fn name(&self) -> &'static str;

    /// Returns the global order of accuracy (error scales as `h^order`).
    fn order(&self) -> u32;

    /// Returns the number of derivative evaluations per step.
    fn stages(&self) -> usize;

    /// Advances `state` from `time` to `time + dt`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `dt` is not finite and
    /// positive, and otherwise propagates any failure from evaluating `f`.
    fn advance<S, F>(&self, f: &F, state: &S, time: f64, dt: f64) -> Result<S, Error>
    where
        S: StepIntegrable<f64> + Finite,
        DerivativeOf<S, f64>: Finite,
        F: DerivativeFn<S>;
}

/// Runtime selection of a stepping method.
///
/// Defaults to [`Method::Rk4`], the best trade-off between work per step and
/// accuracy of the three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Forward Euler, first order.
    Euler,

    /// Second-order Runge-Kutta (midpoint method).
    Rk2,

    /// Classic fourth-order Runge-Kutta.
    #[default]
    Rk4,
}

impl Method {
    /// All methods, from lowest to highest order.
    pub const ALL: [Method; 3] = [Method::Euler, Method::Rk2, Method::Rk4];
}

impl Stepper for Method {
    fn name(&self) -> &'static str {
        match self {
            Method::Euler => Euler.name(),
            Method::Rk2 => Rk2.name(),
            Method::Rk4 => Rk4.name(),
        }
    }

    fn order(&self) -> u32 {
        match self {
            Method::Euler => Euler.order(),
            Method::Rk2 => Rk2.order(),
            Method::Rk4 => Rk4.order(),
        }
    }

    fn stages(&self) -> usize {
        match self {
            Method::Euler => Euler.stages(),
            Method::Rk2 => Rk2.stages(),
            Method::Rk4 => Rk4.stages(),
        }
    }

    fn advance<S, F>(&self, f: &F, state: &S, time: f64, dt: f64) -> Result<S, Error>
    where
        S: StepIntegrable<f64> + Finite,
        DerivativeOf<S, f64>: Finite,
        F: DerivativeFn<S>,
    {
        match self {
            Method::Euler => euler::step(state, time, dt, f),
            Method::Rk2 => rk2::step(state, time, dt, f),
            Method::Rk4 => rk4::step(state, time, dt, f),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a known [`Method`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method {0:?}, expected one of: euler, rk2, midpoint, rk4")]
pub struct ParseMethodError(String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "rk2" | "midpoint" => Ok(Method::Rk2),
            "rk4" => Ok(Method::Rk4),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_rk4() {
        assert_eq!(Method::default(), Method::Rk4);
    }

    #[test]
    fn orders_and_stages() {
        let summary: Vec<_> = Method::ALL
            .iter()
            .map(|m| (m.name(), m.order(), m.stages()))
            .collect();

        assert_eq!(
            summary,
            vec![("euler", 1, 1), ("rk2", 2, 2), ("rk4", 4, 4)]
        );
    }

    #[test]
    fn parses_names() {
        assert_eq!("euler".parse(), Ok(Method::Euler));
        assert_eq!("Midpoint".parse(), Ok(Method::Rk2));
        assert_eq!(" RK4 ".parse(), Ok(Method::Rk4));
        assert_eq!(
            "rk45".parse::<Method>(),
            Err(ParseMethodError("rk45".into()))
        );
    }

    #[test]
    fn display_round_trips() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }

    #[test]
    fn dispatches_to_the_selected_stepper() {
        let f = |x: &f64, _t: f64| *x;

        for method in Method::ALL {
            let by_method = method.advance(&f, &1.0_f64, 0.0, 0.1).unwrap();
            let direct = match method {
                Method::Euler => Euler.advance(&f, &1.0_f64, 0.0, 0.1),
                Method::Rk2 => Rk2.advance(&f, &1.0_f64, 0.0, 0.1),
                Method::Rk4 => Rk4.advance(&f, &1.0_f64, 0.0, 0.1),
            }
            .unwrap();

            assert_eq!(by_method, direct);
        }
    }
}
