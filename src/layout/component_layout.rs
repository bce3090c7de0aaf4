//! Per-component geometry built from the calculators.
//!
//! Each function turns a component's model plus explicit style values into
//! the frames a front end draws. Front ends only translate these results into
//! their own primitives.

use super::drag_physics::DismissEdge;
use super::geometry::Rect;
use super::modal::ModalState;
use super::modal_visuals::ModalVisuals;
use super::orientation::{self, Orientation};
use super::range_math::{self, RangeValue};
use super::style::{ActionStyle, ProgressStyle, SurfaceStyle, TextStyle};
use super::text_metrics::{self, TextMeasurer};

/// Circular progress starts at twelve o'clock.
pub const RING_START_DEGREES: f32 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub track: Rect,
    pub fill: Rect,
    pub radius: f32,
}

pub fn bar_layout(range: RangeValue, frame: Rect, style: &ProgressStyle) -> BarLayout {
    let track = range_math::track_rect(frame, style.track_height);
    BarLayout {
        track,
        fill: range_math::fill_rect(track, range.progress()),
        radius: track.h / 2.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    pub bar: BarLayout,
    pub thumb_center: (f32, f32),
    pub thumb_radius: f32,
    /// The value after step snapping.
    pub value: f32,
}

pub fn slider_layout(range: RangeValue, step: f32, frame: Rect, style: &ProgressStyle) -> SliderLayout {
    let value = range_math::snap_to_step(range.current, range.min, step);
    let snapped = RangeValue { current: value, ..range };
    let bar = bar_layout(snapped, frame, style);
    SliderLayout {
        bar,
        thumb_center: range_math::thumb_center(bar.track, snapped.progress()),
        thumb_radius: style.thumb_diameter / 2.0,
        value,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub center: (f32, f32),
    pub radius: f32,
    pub start_degrees: f32,
    pub sweep_degrees: f32,
}

pub fn ring_layout(range: RangeValue, center: (f32, f32), style: &ProgressStyle) -> RingLayout {
    RingLayout {
        center,
        radius: style.ring_diameter / 2.0,
        start_degrees: RING_START_DEGREES,
        sweep_degrees: range_math::sweep_degrees(range.progress()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonLayout {
    pub frame: Rect,
    pub radius: f32,
    pub label: String,
    pub label_origin: (f32, f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionLayout {
    pub orientation: Orientation,
    pub buttons: Vec<ButtonLayout>,
    pub height: f32,
}

/// Lays out one or two action buttons, choosing the orientation from their
/// measured label widths.
pub fn action_layout(
    primary: &str,
    secondary: Option<&str>,
    origin: (f32, f32),
    available_width: f32,
    style: &ActionStyle,
    measurer: &dyn TextMeasurer,
) -> ActionLayout {
    let measure = |label: &str| text_metrics::preferred_width(label, measurer, style.label_padding);
    let orientation = orientation::choose_orientation(
        Some(measure(primary)),
        secondary.map(measure),
        available_width,
        style.spacing,
        style.horizontal_insets,
    );
    let labels: Vec<&str> = std::iter::once(primary).chain(secondary).collect();
    let frames = orientation::action_frames(
        orientation,
        origin,
        available_width,
        style.spacing,
        style.horizontal_insets,
        style.button_height,
        labels.len(),
    );
    let buttons = frames
        .into_iter()
        .zip(labels)
        .map(|(frame, label)| ButtonLayout {
            frame,
            radius: frame.h / 2.0,
            label: label.to_string(),
            label_origin: frame
                .centered_origin(measurer.text_width(label), measurer.line_height()),
        })
        .collect::<Vec<_>>();
    ActionLayout {
        orientation,
        height: orientation::action_area_height(
            orientation,
            style.button_height,
            style.spacing,
            buttons.len(),
        ),
        buttons,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlockLayout {
    pub frame: Rect,
    pub radius: f32,
    /// Visible lines with their top-left origins.
    pub lines: Vec<((f32, f32), String)>,
}

/// Sizes a text block to its content within the style's row bounds.
pub fn text_block_layout(
    text: &str,
    origin: (f32, f32),
    width: f32,
    style: &TextStyle,
    surface: &SurfaceStyle,
) -> TextBlockLayout {
    let m = &style.metrics;
    let inner_width = width - 2.0 * style.padding_horizontal;
    let wrapped = text_metrics::wrap_lines(text, m, inner_width);
    let rows = style.rows.clamp_rows(wrapped.len());
    let height = rows as f32 * m.line_height() + 2.0 * style.padding_vertical;
    let frame = Rect::new(origin.0, origin.1, width.max(0.0), height);
    let lines = wrapped
        .into_iter()
        .take(rows)
        .enumerate()
        .map(|(i, line)| {
            let x = frame.x + style.padding_horizontal;
            let y = frame.y + style.padding_vertical + i as f32 * m.line_height();
            ((x, y), line)
        })
        .collect();
    TextBlockLayout {
        frame,
        radius: surface.field_corner_radius,
        lines,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownLayout {
    pub minutes_origin: (f32, f32),
    pub colon_origin: (f32, f32),
    pub seconds_origin: (f32, f32),
    pub width: f32,
}

/// Two-digit minute and second columns separated by a colon.
pub fn countdown_layout(origin: (f32, f32), measurer: &dyn TextMeasurer) -> CountdownLayout {
    let column = text_metrics::digit_column_width(2, measurer);
    let colon = measurer.text_width(":");
    let (x, y) = origin;
    CountdownLayout {
        minutes_origin: (x, y),
        colon_origin: (x + column, y),
        seconds_origin: (x + column + colon, y),
        width: 2.0 * column + colon,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub overlay: Rect,
    pub overlay_opacity: f32,
    pub content: Rect,
    pub radius: f32,
}

/// Sheet geometry for `state`, or `None` while the sheet is off screen.
pub fn sheet_layout(
    viewport: Rect,
    content_height: f32,
    state: ModalState,
    edge: DismissEdge,
    surface: &SurfaceStyle,
) -> Option<SheetLayout> {
    let visuals = ModalVisuals::derive(state, content_height, edge);
    if !visuals.visible {
        return None;
    }
    Some(SheetLayout {
        overlay: viewport,
        overlay_opacity: visuals.overlay_opacity,
        content: visuals.content_frame(viewport, content_height, edge),
        radius: surface.sheet_corner_radius,
    })
}
