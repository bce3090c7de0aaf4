//! Validation of raw configuration into the values the layout layer uses.
//!
//! Every bad field is reported and replaced: durations floor to zero, sizes
//! clamp to zero, and metrics that must be positive fall back to defaults.

use std::time::Duration;

use crate::error::{ConfigError, Sanitized, non_negative, positive};
use crate::layout::{
    ActionStyle, DragPhysics, DragPolicy, ModalSettings, MonospaceMetrics, ProgressStyle,
    RowBounds, SurfaceStyle, TextStyle,
};

use super::model::{
    ActionsConfig, DragConfig, LibraryConfig, ModalConfig, ProgressConfig, SurfaceConfig,
    TextConfig,
};

/// Validated configuration for both front ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub modal: ModalSettings,
    pub text: TextStyle,
    pub actions: ActionStyle,
    pub progress: ProgressStyle,
    pub surface: SurfaceStyle,
}

impl Default for Settings {
    fn default() -> Self {
        LibraryConfig::default().sanitize().value
    }
}

impl LibraryConfig {
    pub fn sanitize(&self) -> Sanitized<Settings> {
        let mut out = Sanitized::clean(());
        let physics = out.absorb(self.drag.sanitize());
        let modal = out.absorb(self.modal.sanitize(physics));
        let text = out.absorb(self.text.sanitize());
        let actions = out.absorb(self.actions.sanitize());
        let progress = out.absorb(self.progress.sanitize());
        let surface = out.absorb(self.surface.sanitize());
        out.map(|()| Settings {
            modal,
            text,
            actions,
            progress,
            surface,
        })
    }

    /// Validates and logs every problem found.
    pub fn settings(&self) -> Settings {
        self.sanitize().report("config")
    }
}

impl ModalConfig {
    pub fn sanitize(&self, physics: DragPhysics) -> Sanitized<ModalSettings> {
        let defaults = ModalSettings::default();
        let mut errors = Vec::new();
        let entrance_duration = duration_ms(
            "entrance_duration_ms",
            self.entrance_duration_ms,
            defaults.entrance_duration,
            &mut errors,
        );
        let exit_duration = duration_ms(
            "exit_duration_ms",
            self.exit_duration_ms,
            defaults.exit_duration,
            &mut errors,
        );
        let snap_back_duration = duration_ms(
            "snap_back_duration_ms",
            self.snap_back_duration_ms,
            defaults.snap_back_duration,
            &mut errors,
        );
        Sanitized {
            value: ModalSettings {
                entrance_duration,
                exit_duration,
                snap_back_duration,
                policy: DragPolicy {
                    dismiss_on_drag: self.dismiss_on_drag,
                    free_drag: self.free_drag,
                },
                overlay_tap_dismisses: self.overlay_tap_dismisses,
                dismiss_edge: self.dismiss_edge,
                physics,
            },
            errors,
        }
    }
}

impl DragConfig {
    pub fn sanitize(&self) -> Sanitized<DragPhysics> {
        DragPhysics {
            damping_distance: self.damping_distance,
            damping_coefficient: self.damping_coefficient,
            commit_velocity: self.commit_velocity,
            commit_fraction: self.commit_fraction,
        }
        .sanitize()
    }
}

impl TextConfig {
    pub fn sanitize(&self) -> Sanitized<TextStyle> {
        let defaults = TextConfig::default();
        let mut errors = Vec::new();
        let line_height = positive(
            "line_height",
            self.line_height,
            defaults.line_height,
            &mut errors,
        );
        let glyph_advance = positive(
            "glyph_advance",
            self.glyph_advance,
            defaults.glyph_advance,
            &mut errors,
        );
        let padding_vertical = non_negative("padding_vertical", self.padding_vertical, &mut errors);
        let padding_horizontal =
            non_negative("padding_horizontal", self.padding_horizontal, &mut errors);
        let rows = RowBounds::sanitize(self.min_rows, self.max_rows);
        errors.extend(rows.errors);
        Sanitized {
            value: TextStyle {
                metrics: MonospaceMetrics::new(glyph_advance, line_height),
                padding_vertical,
                padding_horizontal,
                rows: rows.value,
            },
            errors,
        }
    }
}

impl ActionsConfig {
    pub fn sanitize(&self) -> Sanitized<ActionStyle> {
        let mut errors = Vec::new();
        let value = ActionStyle {
            spacing: non_negative("spacing", self.spacing, &mut errors),
            horizontal_insets: non_negative("horizontal_insets", self.horizontal_insets, &mut errors),
            button_height: non_negative("button_height", self.button_height, &mut errors),
            label_padding: non_negative("label_padding", self.label_padding, &mut errors),
        };
        Sanitized { value, errors }
    }
}

impl ProgressConfig {
    pub fn sanitize(&self) -> Sanitized<ProgressStyle> {
        let mut errors = Vec::new();
        let value = ProgressStyle {
            track_height: non_negative("track_height", self.track_height, &mut errors),
            ring_diameter: non_negative("ring_diameter", self.ring_diameter, &mut errors),
            thumb_diameter: non_negative("thumb_diameter", self.thumb_diameter, &mut errors),
        };
        Sanitized { value, errors }
    }
}

impl SurfaceConfig {
    pub fn sanitize(&self) -> Sanitized<SurfaceStyle> {
        let mut errors = Vec::new();
        let value = SurfaceStyle {
            sheet_corner_radius: non_negative(
                "sheet_corner_radius",
                self.sheet_corner_radius,
                &mut errors,
            ),
            field_corner_radius: non_negative(
                "field_corner_radius",
                self.field_corner_radius,
                &mut errors,
            ),
        };
        Sanitized { value, errors }
    }
}

/// Milliseconds as a [`Duration`]. Negative and non-finite values floor to
/// zero; values too large to represent fall back to `fallback`.
fn duration_ms(
    field: &'static str,
    millis: f64,
    fallback: Duration,
    errors: &mut Vec<ConfigError>,
) -> Duration {
    if !millis.is_finite() {
        errors.push(ConfigError::NonFinite {
            field,
            value: millis,
        });
        return Duration::ZERO;
    }
    if millis < 0.0 {
        errors.push(ConfigError::NegativeDuration { field, millis });
        return Duration::ZERO;
    }
    match Duration::try_from_secs_f64(millis / 1000.0) {
        Ok(duration) => duration,
        Err(_) => {
            errors.push(ConfigError::DurationOutOfRange { field, millis });
            fallback
        }
    }
}
