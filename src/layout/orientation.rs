//! Side-by-side vs stacked layout for a pair of action buttons.

use super::geometry::Rect;

/// How a pair of action elements is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Side by side, each element gets half of the usable width.
    Horizontal,
    /// Stacked, each element spans the full usable width.
    Vertical,
}

/// Width budget for one element when two sit side by side.
pub fn per_item_width(available_width: f32, spacing: f32, horizontal_insets: f32) -> f32 {
    (available_width - spacing - horizontal_insets) / 2.0
}

/// Chooses the orientation from pre-measured content widths.
///
/// A single element (either side `None`) always stacks; the side-by-side
/// path is reserved for genuine pairs.
pub fn choose_orientation(
    left_width: Option<f32>,
    right_width: Option<f32>,
    available_width: f32,
    spacing: f32,
    horizontal_insets: f32,
) -> Orientation {
    let (Some(left), Some(right)) = (left_width, right_width) else {
        return Orientation::Vertical;
    };
    let per_item = per_item_width(available_width, spacing, horizontal_insets);
    if left <= per_item && right <= per_item {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Computes the frames for `count` action buttons (1 or 2).
///
/// `origin` is the top-left of the action area; `horizontal_insets` is split
/// evenly between the left and right edges. Stacked buttons are separated by
/// `spacing` vertically. Negative widths collapse to zero.
pub fn action_frames(
    orientation: Orientation,
    origin: (f32, f32),
    available_width: f32,
    spacing: f32,
    horizontal_insets: f32,
    button_height: f32,
    count: usize,
) -> Vec<Rect> {
    let (ox, oy) = origin;
    let left_inset = horizontal_insets / 2.0;
    let count = count.min(2);

    match orientation {
        Orientation::Horizontal if count == 2 => {
            let w = per_item_width(available_width, spacing, horizontal_insets).max(0.0);
            let first = Rect::new(ox + left_inset, oy, w, button_height);
            let second = Rect::new(first.right() + spacing, oy, w, button_height);
            vec![first, second]
        }
        _ => {
            let w = (available_width - horizontal_insets).max(0.0);
            (0..count)
                .map(|i| {
                    let y = oy + i as f32 * (button_height + spacing);
                    Rect::new(ox + left_inset, y, w, button_height)
                })
                .collect()
        }
    }
}

/// Total height of the action area for the given orientation.
pub fn action_area_height(
    orientation: Orientation,
    button_height: f32,
    spacing: f32,
    count: usize,
) -> f32 {
    match (orientation, count.min(2)) {
        (_, 0) => 0.0,
        (Orientation::Horizontal, 2) => button_height,
        (_, n) => n as f32 * button_height + (n as f32 - 1.0) * spacing,
    }
}
