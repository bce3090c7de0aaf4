use serde::{Deserialize, Serialize};

use crate::layout::DismissEdge;

/// Raw, user-editable configuration. Validate with [`LibraryConfig::sanitize`]
/// before handing it to the layout layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub modal: ModalConfig,
    pub drag: DragConfig,
    pub text: TextConfig,
    pub actions: ActionsConfig,
    pub progress: ProgressConfig,
    pub surface: SurfaceConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub entrance_duration_ms: f64,
    pub exit_duration_ms: f64,
    pub snap_back_duration_ms: f64,
    pub dismiss_on_drag: bool,
    pub free_drag: bool,
    pub overlay_tap_dismisses: bool,
    pub dismiss_edge: DismissEdge,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            entrance_duration_ms: 300.0,
            exit_duration_ms: 250.0,
            snap_back_duration_ms: 200.0,
            dismiss_on_drag: true,
            free_drag: true,
            overlay_tap_dismisses: true,
            dismiss_edge: DismissEdge::Bottom,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub damping_distance: f32,
    pub damping_coefficient: f32,
    pub commit_velocity: f32,
    pub commit_fraction: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            damping_distance: 20.0,
            damping_coefficient: 0.2,
            commit_velocity: 250.0,
            commit_fraction: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub line_height: f32,
    pub glyph_advance: f32,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub min_rows: u32,
    pub max_rows: Option<u32>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            line_height: 20.0,
            glyph_advance: 9.0,
            padding_vertical: 8.0,
            padding_horizontal: 12.0,
            min_rows: 1,
            max_rows: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    pub spacing: f32,
    pub horizontal_insets: f32,
    pub button_height: f32,
    pub label_padding: f32,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            horizontal_insets: 32.0,
            button_height: 44.0,
            label_padding: 12.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub track_height: f32,
    pub ring_diameter: f32,
    pub thumb_diameter: f32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            track_height: 4.0,
            ring_diameter: 40.0,
            thumb_diameter: 20.0,
        }
    }
}

/// Corner radii for surfaces drawn by both front ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub sheet_corner_radius: f32,
    pub field_corner_radius: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            sheet_corner_radius: 12.0,
            field_corner_radius: 6.0,
        }
    }
}
