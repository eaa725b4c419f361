/// A trait for states that can be stepped using their derivative.
///
/// Implementing this trait enables the steppers to work with the type by
/// stepping it via `state + derivative * delta`, where the derivative is with
/// respect to `Delta`. Every explicit method in this workspace is expressed as
/// a sequence of such steps, so a state only needs this one operation to be
/// integrated by Euler, RK2, or RK4.
///
/// Implementations for `f64` and `[f64; N]` are provided. For arrays the step
/// is applied component-wise, which is how systems of coupled ODEs are
/// represented.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: &f64, delta: f64) -> Self {
        self + derivative * delta
    }
}

impl<const N: usize> StepIntegrable<f64> for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: &[f64; N], delta: f64) -> Self {
        std::array::from_fn(|i| self[i] + derivative[i] * delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Scalar state with a distinct derivative type
    #[derive(Debug, PartialEq)]
    struct Position(f64);
    struct Velocity(f64);

    impl StepIntegrable<f64> for Position {
        type Derivative = Velocity;

        fn step(&self, derivative: &Velocity, delta: f64) -> Self {
            Position(self.0 + derivative.0 * delta)
        }
    }

    #[test]
    fn step_custom_state() {
        let pos = Position(0.0);
        let vel = Velocity(2.0);

        let next = pos.step(&vel, 0.5);

        assert_eq!(next, Position(1.0));
    }

    #[test]
    fn step_scalar() {
        let next = 1.5_f64.step(&-2.0, 0.25);

        assert_eq!(next, 1.0);
    }

    #[test]
    fn step_array_is_component_wise() {
        let state = [1.0, 2.0, 3.0];
        let deriv = [0.1, 0.2, 0.3];

        let next = state.step(&deriv, 10.0);

        assert_eq!(next, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn zero_derivative_leaves_state_unchanged() {
        let state = [0.3, -7.25];

        assert_eq!(state.step(&[0.0, 0.0], 123.0), state);
        assert_eq!(0.3_f64.step(&0.0, 1e6), 0.3);
    }
}
