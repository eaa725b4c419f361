use thiserror::Error;

/// Default tolerance used by [`Config::until`] when deriving the step count.
///
/// `(t_end - t0) / dt` may differ from the nearest integer by at most this
/// amount.
pub const DEFAULT_SPAN_TOLERANCE: f64 = 1e-9;

/// Configuration of a fixed-step integration run.
///
/// Holds the initial time `t0`, the step size `dt`, and the number of steps.
/// A valid config always has a finite `t0`, a positive finite `dt`, and at
/// least one step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Config {
    t0: f64,
    dt: f64,
    steps: usize,
}

/// Errors that can occur when validating integration parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("step size must be finite and positive, got {0}")]
    StepSize(f64),

    #[error("step count must be at least 1")]
    StepCount,

    #[error("initial time must be finite, got {0}")]
    InitialTime(f64),

    #[error("end time must be finite and after the initial time, got {0}")]
    EndTime(f64),

    #[error("span is not a whole number of steps: {ratio} steps of the given size")]
    Span { ratio: f64 },

    #[error("span needs {ratio} steps, more than a run can take")]
    TooManySteps { ratio: f64 },

    #[error("span tolerance must be finite and non-negative")]
    Tolerance,

    #[error("initial state must be finite")]
    InitialState,
}

impl Config {
    /// Creates a config for `steps` steps of size `dt` starting at `t0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t0` is not finite, `dt` is not finite and
    /// positive, `steps` is zero, or the last grid time is not finite.
    pub fn new(t0: f64, dt: f64, steps: usize) -> Result<Self, ParameterError> {
        if !t0.is_finite() {
            return Err(ParameterError::InitialTime(t0));
        }
        check_step_size(dt)?;
        if steps == 0 {
            return Err(ParameterError::StepCount);
        }

        let config = Self { t0, dt, steps };
        let t_end = config.t_end();
        if !t_end.is_finite() {
            return Err(ParameterError::EndTime(t_end));
        }

        Ok(config)
    }

    /// Creates a config covering `[t0, t_end]` with steps of size `dt`.
    ///
    /// The step count is derived from `(t_end - t0) / dt`, which must be
    /// within [`DEFAULT_SPAN_TOLERANCE`] of an integer.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is invalid or the span is not a whole
    /// number of steps.
    pub fn until(t0: f64, t_end: f64, dt: f64) -> Result<Self, ParameterError> {
        Self::until_with_tolerance(t0, t_end, dt, DEFAULT_SPAN_TOLERANCE)
    }

    /// Creates a config covering `[t0, t_end]` with steps of size `dt`, using
    /// a caller-chosen tolerance for the whole-number check.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is invalid or `(t_end - t0) / dt` is
    /// farther than `tolerance` from an integer.
    pub fn until_with_tolerance(
        t0: f64,
        t_end: f64,
        dt: f64,
        tolerance: f64,
    ) -> Result<Self, ParameterError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ParameterError::Tolerance);
        }
        if !t0.is_finite() {
            return Err(ParameterError::InitialTime(t0));
        }
        if !t_end.is_finite() || t_end <= t0 {
            return Err(ParameterError::EndTime(t_end));
        }
        check_step_size(dt)?;

        let ratio = (t_end - t0) / dt;
        let whole = ratio.round();

        // `usize::MAX as f64` rounds up to 2^64; the cast below saturates there.
        #[allow(clippy::cast_precision_loss)]
        let limit = usize::MAX as f64;
        if whole >= limit {
            return Err(ParameterError::TooManySteps { ratio });
        }
        if (ratio - whole).abs() > tolerance {
            return Err(ParameterError::Span { ratio });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = whole as usize;
        Self::new(t0, dt, steps)
    }

    /// Creates a config that divides `[t0, t_end]` into `steps` equal steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `t0` or `t_end` is invalid or `steps` is zero.
    pub fn subdivide(t0: f64, t_end: f64, steps: usize) -> Result<Self, ParameterError> {
        if !t0.is_finite() {
            return Err(ParameterError::InitialTime(t0));
        }
        if !t_end.is_finite() || t_end <= t0 {
            return Err(ParameterError::EndTime(t_end));
        }
        if steps == 0 {
            return Err(ParameterError::StepCount);
        }

        #[allow(clippy::cast_precision_loss)]
        let dt = (t_end - t0) / steps as f64;
        Self::new(t0, dt, steps)
    }

    /// Returns the initial time.
    #[must_use]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the time of the `step`-th grid point, `t0 + step * dt`.
    #[must_use]
    pub fn time_at(&self, step: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let i = step as f64;
        self.t0 + i * self.dt
    }

    /// Returns the time of the last grid point.
    #[must_use]
    pub fn t_end(&self) -> f64 {
        self.time_at(self.steps)
    }
}

pub(crate) fn check_step_size(dt: f64) -> Result<(), ParameterError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::StepSize(dt))
    }
}
