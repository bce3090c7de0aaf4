//! Progress normalization shared by progress bars, sliders and circular
//! progress indicators.

use crate::error::ConfigError;

use super::geometry::Rect;

/// A bounded numeric value as configured by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValue {
    pub min: f32,
    pub max: f32,
    pub current: f32,
}

impl RangeValue {
    pub fn new(min: f32, max: f32, current: f32) -> Self {
        Self { min, max, current }
    }

    /// Normalized position of `current` within `[min, max]`.
    pub fn progress(&self) -> f32 {
        progress(self.min, self.max, self.current)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_range(self.min, self.max)
    }
}

/// Maps `current` to a fraction in `[0, 1]`.
///
/// A degenerate or inverted range (`max <= min`) yields `0`: bounds may be
/// set one at a time before validation runs, so this is not an error here.
/// Non-finite inputs also yield `0`.
pub fn progress(min: f32, max: f32, current: f32) -> f32 {
    if !(max > min) {
        return 0.0;
    }
    let ratio = (current - min) / (max - min);
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Reports an inverted range. Call once per configuration change.
pub fn validate_range(min: f32, max: f32) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { min, max });
    }
    Ok(())
}

/// Inverse of [`progress`]: the value sitting at `fraction` of the range.
///
/// Used by sliders to turn a thumb position back into a value. The fraction
/// is clamped to `[0, 1]`; a degenerate range always returns `min`.
pub fn value_at_fraction(min: f32, max: f32, fraction: f32) -> f32 {
    if !(max > min) || fraction.is_nan() {
        return min;
    }
    min + (max - min) * fraction.clamp(0.0, 1.0)
}

/// Snaps `value` to the nearest multiple of `step` counted from `min`.
///
/// A non-positive or non-finite step disables snapping.
pub fn snap_to_step(value: f32, min: f32, step: f32) -> f32 {
    if !(step > 0.0) || !step.is_finite() {
        return value;
    }
    min + ((value - min) / step).round() * step
}

/// Arc sweep in degrees for a circular progress indicator.
pub fn sweep_degrees(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0) * 360.0
}

/// Filled portion of a horizontal progress track.
pub fn fill_rect(track: Rect, progress: f32) -> Rect {
    Rect {
        w: track.w.max(0.0) * progress.clamp(0.0, 1.0),
        ..track
    }
}

/// A track of `track_height` centred vertically inside `frame`.
pub fn track_rect(frame: Rect, track_height: f32) -> Rect {
    let h = track_height.min(frame.h).max(0.0);
    Rect::new(frame.x, frame.y + (frame.h - h) / 2.0, frame.w.max(0.0), h)
}

/// Centre of a slider thumb sitting at `progress` along `track`.
pub fn thumb_center(track: Rect, progress: f32) -> (f32, f32) {
    let (_, cy) = track.center();
    (track.x + track.w * progress.clamp(0.0, 1.0), cy)
}
