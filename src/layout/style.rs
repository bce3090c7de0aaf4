//! Explicit style values handed to the layout functions.
//!
//! There is no ambient "current theme": callers pass these in, usually from
//! validated configuration.

use super::text_metrics::{MonospaceMetrics, RowBounds};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub metrics: MonospaceMetrics,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub rows: RowBounds,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionStyle {
    pub spacing: f32,
    pub horizontal_insets: f32,
    pub button_height: f32,
    /// Horizontal padding around a button label when measuring its width.
    pub label_padding: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStyle {
    pub track_height: f32,
    pub ring_diameter: f32,
    pub thumb_diameter: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub sheet_corner_radius: f32,
    pub field_corner_radius: f32,
}
