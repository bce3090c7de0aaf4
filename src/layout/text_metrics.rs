//! Text-driven sizing: how tall (or wide) a block of text needs to be.
//!
//! The calculator only measures. Row limits are applied by the caller through
//! [`RowBounds`], so the same measurement serves both "grows with content"
//! fields and fixed-height ones.

use unicode_width::UnicodeWidthStr;

use crate::error::{ConfigError, Sanitized};

/// Source of text extents. Implemented by the rendering layer's font stack.
pub trait TextMeasurer {
    /// Advance width of `text` laid out on a single line.
    fn text_width(&self, text: &str) -> f32;

    /// Height of one line of text.
    fn line_height(&self) -> f32;
}

/// Cell-based metrics: every terminal column costs one `glyph_advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub glyph_advance: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub fn new(glyph_advance: f32, line_height: f32) -> Self {
        Self {
            glyph_advance,
            line_height,
        }
    }
}

impl TextMeasurer for MonospaceMetrics {
    fn text_width(&self, text: &str) -> f32 {
        UnicodeWidthStr::width(text) as f32 * self.glyph_advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Greedy word wrap of `text` into lines no wider than `available_width`.
///
/// `\n` always breaks. A word wider than a whole line starts on a fresh line
/// and is split per character. Empty text is a single empty line. A
/// non-positive width means the box has not been measured yet: each
/// paragraph then occupies exactly one line.
pub fn wrap_lines(text: &str, measurer: &dyn TextMeasurer, available_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if available_width > 0.0 {
            wrap_paragraph(paragraph, measurer, available_width, &mut lines);
        } else {
            lines.push(paragraph.to_string());
        }
    }
    lines
}

fn wrap_paragraph(
    paragraph: &str,
    measurer: &dyn TextMeasurer,
    width: f32,
    out: &mut Vec<String>,
) {
    let space = measurer.text_width(" ");
    let mut line = LineBuilder::default();

    for word in paragraph.split_whitespace() {
        let word_w = measurer.text_width(word);
        if !line.is_empty() && line.width + space + word_w <= width {
            line.push(" ", space);
            line.push(word, word_w);
            continue;
        }
        if !line.is_empty() {
            out.push(line.take());
        }
        if word_w <= width {
            line.push(word, word_w);
        } else {
            break_word(word, measurer, width, &mut line, out);
        }
    }
    out.push(line.take());
}

/// Splits an over-long word across lines, leaving the tail in `line`.
fn break_word(
    word: &str,
    measurer: &dyn TextMeasurer,
    width: f32,
    line: &mut LineBuilder,
    out: &mut Vec<String>,
) {
    let mut buf = [0u8; 4];
    for ch in word.chars() {
        let glyph = ch.encode_utf8(&mut buf);
        let glyph_w = measurer.text_width(glyph);
        if !line.is_empty() && line.width + glyph_w > width {
            out.push(line.take());
        }
        line.push(glyph, glyph_w);
    }
}

#[derive(Default)]
struct LineBuilder {
    text: String,
    width: f32,
}

impl LineBuilder {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push(&mut self, s: &str, w: f32) {
        self.text.push_str(s);
        self.width += w;
    }

    fn take(&mut self) -> String {
        self.width = 0.0;
        std::mem::take(&mut self.text)
    }
}

/// Number of wrapped lines `text` needs at `available_width`.
pub fn line_count(text: &str, measurer: &dyn TextMeasurer, available_width: f32) -> usize {
    wrap_lines(text, measurer, available_width).len()
}

/// Height of the wrapped text plus vertical padding on both sides.
pub fn preferred_height(
    text: &str,
    measurer: &dyn TextMeasurer,
    available_width: f32,
    padding_vertical: f32,
) -> f32 {
    let lines = line_count(text, measurer, available_width);
    lines as f32 * measurer.line_height() + 2.0 * padding_vertical
}

/// Width of the widest unwrapped line plus horizontal padding on both sides.
///
/// For fixed-height, variable-width contexts such as badges or countdowns.
pub fn preferred_width(text: &str, measurer: &dyn TextMeasurer, padding_horizontal: f32) -> f32 {
    let widest = text
        .split('\n')
        .map(|line| measurer.text_width(line))
        .fold(0.0f32, f32::max);
    widest + 2.0 * padding_horizontal
}

/// Width of a column holding `digits` decimal digits.
///
/// Sized by the widest digit so a ticking countdown never changes width.
pub fn digit_column_width(digits: usize, measurer: &dyn TextMeasurer) -> f32 {
    let widest = ('0'..='9')
        .map(|d| {
            let mut buf = [0u8; 4];
            measurer.text_width(d.encode_utf8(&mut buf))
        })
        .fold(0.0f32, f32::max);
    digits as f32 * widest
}

/// How many whole lines fit in a box of `height`.
///
/// A quotient within a thousandth of a line below an integer counts as that
/// integer, so a box sized for `n` lines always shows `n`.
pub fn visible_line_count(height: f32, line_height: f32, padding_vertical: f32) -> usize {
    if !(line_height > 0.0) {
        return 0;
    }
    let rows = (height - 2.0 * padding_vertical) / line_height;
    (rows + 1.0e-3).floor().max(0.0) as usize
}

/// Row limits for a text block, always with `1 <= min_rows <= max_rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
    min_rows: u32,
    max_rows: Option<u32>,
}

impl Default for RowBounds {
    fn default() -> Self {
        Self {
            min_rows: 1,
            max_rows: None,
        }
    }
}

impl RowBounds {
    /// Repairs raw row limits, collecting what was wrong with them.
    ///
    /// Zero rows are floored to one; a ceiling below the floor is raised to it.
    pub fn sanitize(min_rows: u32, max_rows: Option<u32>) -> Sanitized<RowBounds> {
        let mut errors = Vec::new();
        let min = if min_rows == 0 {
            errors.push(ConfigError::ZeroRows { field: "min_rows" });
            1
        } else {
            min_rows
        };
        let max = max_rows.map(|max| {
            let max = if max == 0 {
                errors.push(ConfigError::ZeroRows { field: "max_rows" });
                1
            } else {
                max
            };
            if max < min {
                errors.push(ConfigError::InvertedRows { min, max });
                min
            } else {
                max
            }
        });
        Sanitized {
            value: RowBounds {
                min_rows: min,
                max_rows: max,
            },
            errors,
        }
    }

    /// Like [`Self::sanitize`], logging any problems.
    pub fn new(min_rows: u32, max_rows: Option<u32>) -> RowBounds {
        Self::sanitize(min_rows, max_rows).report("row bounds")
    }

    /// Exactly `rows` rows, regardless of content.
    pub fn fixed(rows: u32) -> RowBounds {
        Self::new(rows, Some(rows))
    }

    pub fn min_rows(&self) -> u32 {
        self.min_rows
    }

    pub fn max_rows(&self) -> Option<u32> {
        self.max_rows
    }

    /// Pixel limits `(min, max)` using the same line metric as the text.
    pub fn pixel_bounds(&self, line_height: f32, padding_vertical: f32) -> (f32, Option<f32>) {
        let to_px = |rows: u32| rows as f32 * line_height + 2.0 * padding_vertical;
        (to_px(self.min_rows), self.max_rows.map(to_px))
    }

    /// `lines` clamped to these bounds.
    pub fn clamp_rows(&self, lines: usize) -> usize {
        let lines = lines.max(self.min_rows as usize);
        match self.max_rows {
            Some(max) => lines.min(max as usize),
            None => lines,
        }
    }
}

/// Rows a text block shows: its wrapped line count clamped to `bounds`.
pub fn fitted_rows(
    text: &str,
    measurer: &dyn TextMeasurer,
    available_width: f32,
    bounds: RowBounds,
) -> usize {
    bounds.clamp_rows(line_count(text, measurer, available_width))
}

/// Height of [`fitted_rows`] lines plus vertical padding on both sides.
pub fn fitted_height(
    text: &str,
    measurer: &dyn TextMeasurer,
    available_width: f32,
    padding_vertical: f32,
    bounds: RowBounds,
) -> f32 {
    let rows = fitted_rows(text, measurer, available_width, bounds);
    rows as f32 * measurer.line_height() + 2.0 * padding_vertical
}

#[cfg(test)]
#[path = "../../tests/unit/layout_text_metrics.rs"]
mod tests;
