//! Configuration errors.

use thiserror::Error;

/// Errors raised when slider arguments cannot describe a usable range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `min` must be strictly below `max`.
    #[error("invalid slider range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f64, max: f64 },
    /// `step` must be a positive number.
    #[error("invalid slider step {0}: step must be greater than zero")]
    InvalidStep(f64),
    /// A range parameter was `NaN` or infinite.
    #[error("slider {field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}
