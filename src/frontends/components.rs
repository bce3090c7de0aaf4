//! Component models shared by both front ends.
//!
//! A model describes *what* to show; the front ends decide how to hold it
//! (persistent nodes vs. a rebuilt element tree) but must draw it the same.

use crate::layout::{ModalState, RangeValue, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub range: RangeValue,
    pub frame: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircularProgress {
    pub range: RangeValue,
    pub center: (f32, f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub range: RangeValue,
    /// Snapping step; `0` for continuous.
    pub step: f32,
    pub frame: Rect,
}

/// One or two action buttons, e.g. the footer of an alert.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionPair {
    pub primary: String,
    pub secondary: Option<String>,
    pub origin: (f32, f32),
    pub available_width: f32,
}

/// A text field or label whose height follows its content.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub origin: (f32, f32),
    pub width: f32,
}

/// `MM:SS` countdown laid out in fixed-width digit columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    pub remaining_secs: u32,
    pub origin: (f32, f32),
}

/// A bottom or top sheet with its dimming overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub viewport: Rect,
    pub content_height: f32,
    pub state: ModalState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    ProgressBar(ProgressBar),
    CircularProgress(CircularProgress),
    Slider(Slider),
    ActionPair(ActionPair),
    TextBlock(TextBlock),
    Countdown(Countdown),
    Sheet(Sheet),
}

impl Countdown {
    /// Longest time the two-digit columns can show.
    pub const MAX_SECS: u32 = 99 * 60 + 59;

    /// `(minutes, seconds)` as zero-padded two-digit strings.
    ///
    /// The display saturates at `99:59` so the column count never changes.
    pub fn digits(&self) -> (String, String) {
        let secs = self.remaining_secs.min(Self::MAX_SECS);
        let (minutes, seconds) = (secs / 60, secs % 60);
        (format!("{minutes:02}"), format!("{seconds:02}"))
    }
}
