//! Configuration error taxonomy.
//!
//! Nothing in the calculation layer fails at runtime. Bad configuration is
//! reported once where it is supplied and replaced by a defined fallback, so
//! the rendering layer always receives usable numbers.

use thiserror::Error;

/// A configuration value that was rejected and repaired.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min` is above `max` for a bounded value.
    #[error("range minimum {min} exceeds maximum {max}")]
    InvertedRange { min: f32, max: f32 },

    /// A row count of zero was requested.
    #[error("{field} must be at least 1 row (got 0)")]
    ZeroRows { field: &'static str },

    /// The row ceiling is below the row floor.
    #[error("max rows {max} is below min rows {min}")]
    InvertedRows { min: u32, max: u32 },

    /// An animation duration is negative.
    #[error("{field} must not be negative (got {millis} ms)")]
    NegativeDuration { field: &'static str, millis: f64 },

    /// An animation duration is too long to represent.
    #[error("{field} is out of range (got {millis} ms)")]
    DurationOutOfRange { field: &'static str, millis: f64 },

    /// A numeric field is NaN or infinite.
    #[error("{field} must be finite (got {value})")]
    NonFinite { field: &'static str, value: f64 },

    /// A size or spacing is negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    /// A numeric field must be strictly positive.
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },
}

/// A repaired value together with every problem found while repairing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized<T> {
    pub value: T,
    pub errors: Vec<ConfigError>,
}

impl<T> Sanitized<T> {
    /// Wraps a value that needed no repair.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Logs every collected error under `context` and returns the repaired value.
    pub fn report(self, context: &str) -> T {
        for err in &self.errors {
            log::warn!("[twinframe] {context}: {err}");
        }
        self.value
    }

    /// Transforms the value, keeping the collected errors.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sanitized<U> {
        Sanitized {
            value: f(self.value),
            errors: self.errors,
        }
    }

    /// Appends the errors of `other` and returns its value.
    pub(crate) fn absorb<U>(&mut self, other: Sanitized<U>) -> U {
        self.errors.extend(other.errors);
        other.value
    }
}

/// `value` if finite and above zero, otherwise `fallback` with the problem
/// recorded.
pub(crate) fn positive(
    field: &'static str,
    value: f32,
    fallback: f32,
    errors: &mut Vec<ConfigError>,
) -> f32 {
    if !value.is_finite() {
        errors.push(ConfigError::NonFinite {
            field,
            value: value as f64,
        });
        return fallback;
    }
    if value <= 0.0 {
        errors.push(ConfigError::NonPositive {
            field,
            value: value as f64,
        });
        return fallback;
    }
    value
}

/// `value` if finite and not negative, otherwise zero with the problem
/// recorded.
pub(crate) fn non_negative(
    field: &'static str,
    value: f32,
    errors: &mut Vec<ConfigError>,
) -> f32 {
    if !value.is_finite() {
        errors.push(ConfigError::NonFinite {
            field,
            value: value as f64,
        });
        return 0.0;
    }
    if value < 0.0 {
        errors.push(ConfigError::Negative {
            field,
            value: value as f64,
        });
        return 0.0;
    }
    value
}
