//! Explicit fixed-step integration of `dx/dt = f(x, t)`.
//!
//! # Steppers
//!
//! Each stepper advances a state by one step of size `h`:
//!
//! | Stepper  | Evaluations of `f` | Local error | Global error |
//! |----------|--------------------|-------------|--------------|
//! | [`Euler`] | 1                 | O(h²)       | O(h)         |
//! | [`Rk2`]   | 2                 | O(h³)       | O(h²)        |
//! | [`Rk4`]   | 4                 | O(h⁵)       | O(h⁴)        |
//!
//! The free functions [`euler::step`], [`rk2::step`], and [`rk4::step`] take one
//! step directly. The unit structs and the [`Method`] enum implement
//! [`Stepper`], the capability the driver is generic over.
//!
//! # Driver
//!
//! [`integrate`] discretizes `[t0, t0 + N·h]` using a validated [`Config`],
//! applies the chosen stepper `N` times, and returns the [`Trajectory`] of
//! `N + 1` points. Time points are computed as `t0 + i·h` rather than by
//! repeated addition, so they are exactly equidistant.
//!
//! # Example
//!
//! ```
//! use odestep_solvers::transient::{Config, Method, integrate_unobserved};
//!
//! let config = Config::new(0.0, 0.1, 10).unwrap();
//! let solution = integrate_unobserved(&Method::Rk4, &|x: &f64, _t: f64| -x, 1.0, &config).unwrap();
//!
//! let x_end = solution.trajectory.last().unwrap().state;
//! assert!((x_end - (-1.0_f64).exp()).abs() < 1e-4);
//! ```

pub mod euler;
pub mod integrate;
pub mod rk2;
pub mod rk4;

mod config;
mod error;
mod evaluate;
mod stepper;

pub use config::{Config, DEFAULT_SPAN_TOLERANCE, ParameterError};
pub use error::Error;
pub use euler::Euler;
pub use integrate::{
    Action, Event, Failure, Point, Solution, Status, Trajectory, integrate, integrate_unobserved,
    solve,
};
pub use rk2::Rk2;
pub use rk4::Rk4;
pub use stepper::{Method, ParseMethodError, Stepper};
