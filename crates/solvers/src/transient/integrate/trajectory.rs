use std::ops::Index;

/// A single `(time, state)` entry of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<S> {
    pub time: f64,
    pub state: S,
}

/// The ordered sequence of points computed by an integration run.
///
/// Points are only ever appended by the driver. Once a run returns, the
/// trajectory is read-only: callers can inspect and consume it but not modify
/// it in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trajectory<S> {
    points: Vec<Point<S>>,
}

impl<S> Trajectory<S> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, time: f64, state: S) -> &Point<S> {
        self.points.push(Point { time, state });
        &self.points[self.points.len() - 1]
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points were computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point<S>] {
        &self.points
    }

    /// Returns an iterator over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point<S>> {
        self.points.iter()
    }

    /// Returns the initial point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point<S>> {
        self.points.first()
    }

    /// Returns the most recent point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point<S>> {
        self.points.last()
    }

    /// Returns an iterator over the times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.time)
    }

    /// Returns an iterator over the states.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.points.iter().map(|p| &p.state)
    }

    /// Consumes the trajectory and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point<S>> {
        self.points
    }
}

impl<S> Index<usize> for Trajectory<S> {
    type Output = Point<S>;

    fn index(&self, index: usize) -> &Point<S> {
        &self.points[index]
    }
}

impl<'a, S> IntoIterator for &'a Trajectory<S> {
    type Item = &'a Point<S>;
    type IntoIter = std::slice::Iter<'a, Point<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<S> IntoIterator for Trajectory<S> {
    type Item = Point<S>;
    type IntoIter = std::vec::IntoIter<Point<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let mut trajectory = Trajectory::with_capacity(2);
        assert!(trajectory.is_empty());

        trajectory.push(0.0, 1.0);
        let last = trajectory.push(0.5, 2.0);
        assert_eq!(*last, Point { time: 0.5, state: 2.0 });

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory[0], Point { time: 0.0, state: 1.0 });
        assert_eq!(trajectory.times().collect::<Vec<_>>(), vec![0.0, 0.5]);
        assert_eq!(trajectory.states().copied().collect::<Vec<_>>(), vec![1.0, 2.0]);
        assert_eq!(trajectory.first().map(|p| p.state), Some(1.0));
        assert_eq!(trajectory.last().map(|p| p.time), Some(0.5));
    }

    #[test]
    fn iterates_by_reference_and_value() {
        let mut trajectory = Trajectory::with_capacity(3);
        for i in 0..3 {
            trajectory.push(f64::from(i), [f64::from(i); 2]);
        }

        let mut borrowed = Vec::new();
        for point in &trajectory {
            borrowed.push(point.state[0]);
        }
        let owned: Vec<Point<[f64; 2]>> = trajectory.into_iter().collect();

        assert_eq!(borrowed, vec![0.0, 1.0, 2.0]);
        assert_eq!(owned.len(), 3);
    }
}
