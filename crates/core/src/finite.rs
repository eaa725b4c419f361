/// A value whose components can all be checked for finiteness.
///
/// Steppers use this to reject NaN or infinite derivatives at the point of
/// evaluation instead of letting them spread through the trajectory.
pub trait Finite {
    /// Returns `true` if every component is neither NaN nor infinite.
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl<const N: usize> Finite for [f64; N] {
    fn is_finite(&self) -> bool {
        self.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert!(Finite::is_finite(&1.0_f64));
        assert!(!Finite::is_finite(&f64::NAN));
        assert!(!Finite::is_finite(&f64::NEG_INFINITY));
    }

    #[test]
    fn arrays_require_every_component() {
        assert!([1.0_f64, -2.0, 0.0].is_finite());
        assert!(![1.0_f64, f64::INFINITY].is_finite());
        assert!(Finite::is_finite(&[0.0_f64; 0]));
    }
}
