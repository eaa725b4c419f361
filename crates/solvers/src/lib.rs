//! Fixed-step explicit ODE solvers.
//!
//! All solvers live in [`transient`]: the Euler, RK2 (midpoint), and RK4
//! steppers, and the [`integrate`](transient::integrate) driver that runs a
//! stepper over an evenly spaced time grid and records the trajectory.

pub mod transient;
