//! Bounded, stepped value arithmetic.
//!
//! ## Usage
//!
//! Validate the raw `min`/`max`/`step` triple once, then convert between
//! values and sweep percentages.
//!
//! ```
//! use circular_slider::range::ValueRange;
//!
//! let range = ValueRange::new(10.0, 30.0, 0.5).unwrap();
//! assert_eq!(range.value_to_percentage(20.0), 0.5);
//! assert_eq!(range.stepped_value(22.3), 22.5);
//! ```

use crate::error::ConfigError;

/// A validated `[min, max]` interval with a quantization step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
    step: f64,
}

impl ValueRange {
    /// Creates a range, rejecting `min >= max`, non-positive steps and
    /// non-finite inputs.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        for (field, value) in [("min", min), ("max", max), ("step", step)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if min >= max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Quantization unit.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Position of `value` along the range in `[0, 1]`. Out of range values
    /// map to the nearest end.
    pub fn value_to_percentage(&self, value: f64) -> f64 {
        (self.clamp(value) - self.min) / (self.max - self.min)
    }

    /// Inverse of [`value_to_percentage`](Self::value_to_percentage).
    pub fn percentage_to_value(&self, percentage: f64) -> f64 {
        (self.max - self.min) * percentage + self.min
    }

    /// Rounds `value` to the nearest multiple of `step`, halves rounding up.
    pub fn stepped_value(&self, value: f64) -> f64 {
        (value / self.step + 0.5).floor() * self.step
    }

    /// The larger of one step and a tenth of the range, used for page keys.
    pub fn ten_percent_step(&self) -> f64 {
        self.step.max((self.max - self.min) / 10.0)
    }
}
