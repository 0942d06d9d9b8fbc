//! Error types returned by slider construction and setters.

use thiserror::Error;

/// Reasons a [`SliderArgs`](crate::slider::SliderArgs) cannot produce a slider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// `min_value` or `max_value` is NaN or infinite.
    #[error("slider bounds must be finite (min {min}, max {max})")]
    NonFiniteBounds {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// `min_value` is not strictly smaller than `max_value`.
    #[error("slider's min_value ({min}) must be smaller than its max_value ({max})")]
    EmptyRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// `step` is zero, negative or not finite.
    #[error("slider step must be a positive finite number, got {step}")]
    InvalidStep {
        /// Configured step.
        step: f64,
    },
    /// `max_value - min_value` is not a whole multiple of `step`.
    #[error("slider range ({range}) must be divisible by step ({step}) without a remainder")]
    StepDoesNotDivideRange {
        /// `max_value - min_value`.
        range: f64,
        /// Configured step.
        step: f64,
    },
    /// No bound form element was supplied.
    #[error("an element to bind the slider value to must be supplied")]
    MissingElement,
    /// An explicit initial value is not a finite number.
    #[error("initial {field} must be a finite number, got {value}")]
    InvalidInitialValue {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Errors produced by a slider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// The slider could not be constructed.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// A setter received a value that is not a finite number.
    #[error("{operation} expects a finite number, got {value}")]
    InvalidArgument {
        /// The rejecting operation.
        operation: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The operation is not available with the slider's configuration.
    #[error("{operation} is not available: {reason}")]
    InvalidState {
        /// The rejecting operation.
        operation: &'static str,
        /// Why the slider cannot perform it.
        reason: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SliderError> = std::result::Result<T, E>;

pub(crate) fn ensure_finite(operation: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SliderError::InvalidArgument { operation, value })
    }
}
