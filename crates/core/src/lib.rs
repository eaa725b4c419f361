//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that steppers, drivers, and
//! observers build on:
//!
//! - [`StepIntegrable`]: a state that can be advanced by `derivative * delta`
//! - [`Finite`]: a check that every component of a value is finite
//! - [`DerivativeFn`]: the right-hand side `f(x, t)` of `dx/dt = f(x, t)`
//! - [`Observer`]: receives solver events and optionally returns control actions

mod derivative;
mod finite;
mod observer;
mod step;

pub use derivative::{DerivativeFn, Fallible};
pub use finite::Finite;
pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
