//! Plain geometry values passed between the layout layer and the front ends.

/// The measured natural size of rendered content.
///
/// Owned by the rendering layer and passed by value. A zero box means the
/// content has not been measured yet (first layout pass).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentBox {
    pub width: f32,
    pub height: f32,
}

impl ContentBox {
    pub const ZERO: ContentBox = ContentBox {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True until the rendering layer has reported a real measurement.
    pub fn is_unmeasured(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// A rectangle defined by origin + size, in layout points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Top-left origin that centers a `w` x `h` box inside this rect.
    pub fn centered_origin(&self, w: f32, h: f32) -> (f32, f32) {
        (self.x + (self.w - w) / 2.0, self.y + (self.h - h) / 2.0)
    }

    /// Returns this rect moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
