use super::*;
use proptest::prelude::*;

fn metrics() -> MonospaceMetrics {
    // 10pt per column, 20pt lines.
    MonospaceMetrics::new(10.0, 20.0)
}

#[test]
fn short_text_is_one_line() {
    assert_eq!(line_count("hello", &metrics(), 200.0), 1);
}

#[test]
fn empty_text_is_one_line() {
    assert_eq!(line_count("", &metrics(), 200.0), 1);
    assert_eq!(preferred_height("", &metrics(), 200.0, 4.0), 28.0);
}

#[test]
fn words_wrap_at_width() {
    // "hello world" is 110pt wide; at 80pt each word gets its own line.
    let lines = wrap_lines("hello world", &metrics(), 80.0);
    assert_eq!(lines, vec!["hello".to_string(), "world".to_string()]);
}

#[test]
fn words_share_a_line_when_they_fit() {
    let lines = wrap_lines("ab cd ef", &metrics(), 50.0);
    assert_eq!(lines, vec!["ab cd".to_string(), "ef".to_string()]);
}

#[test]
fn explicit_newlines_break() {
    assert_eq!(line_count("a\nb\n\nc", &metrics(), 500.0), 4);
}

#[test]
fn long_word_breaks_per_character() {
    let lines = wrap_lines("go abcdefgh", &metrics(), 30.0);
    assert_eq!(
        lines,
        vec![
            "go".to_string(),
            "abc".to_string(),
            "def".to_string(),
            "gh".to_string()
        ]
    );
}

#[test]
fn wide_glyphs_use_two_columns() {
    // Each CJK glyph is two columns (20pt); three of them need 60pt.
    assert_eq!(line_count("日本語", &metrics(), 60.0), 1);
    assert_eq!(line_count("日本語", &metrics(), 40.0), 2);
}

#[test]
fn unmeasured_width_keeps_paragraphs_whole() {
    assert_eq!(line_count("a long sentence of words", &metrics(), 0.0), 1);
    assert_eq!(line_count("one\ntwo", &metrics(), -5.0), 2);
}

#[test]
fn preferred_height_adds_padding_twice() {
    assert_eq!(preferred_height("hello world", &metrics(), 80.0, 6.0), 52.0);
}

#[test]
fn preferred_width_uses_widest_line() {
    assert_eq!(preferred_width("abc\nabcde", &metrics(), 2.0), 54.0);
    assert_eq!(preferred_width("", &metrics(), 3.0), 6.0);
}

#[test]
fn digit_columns_are_stable() {
    assert_eq!(digit_column_width(2, &metrics()), 20.0);
    assert_eq!(digit_column_width(0, &metrics()), 0.0);
}

#[test]
fn zero_rows_is_reported_and_floored() {
    let checked = RowBounds::sanitize(0, None);
    assert_eq!(checked.value.min_rows(), 1);
    assert_eq!(
        checked.errors,
        vec![crate::error::ConfigError::ZeroRows { field: "min_rows" }]
    );
}

#[test]
fn inverted_rows_raise_ceiling() {
    let checked = RowBounds::sanitize(4, Some(2));
    assert_eq!(checked.value.max_rows(), Some(4));
    assert_eq!(
        checked.errors,
        vec![crate::error::ConfigError::InvertedRows { min: 4, max: 2 }]
    );
}

#[test]
fn valid_rows_are_clean() {
    let checked = RowBounds::sanitize(2, Some(5));
    assert!(checked.is_clean());
    assert_eq!(checked.value.min_rows(), 2);
    assert_eq!(checked.value.max_rows(), Some(5));
}

#[test]
fn zero_rows_behaves_like_one_row() {
    let m = metrics();
    let text = "several words that wrap over a few lines";
    for width in [40.0, 90.0, 400.0] {
        assert_eq!(
            fitted_height(text, &m, width, 4.0, RowBounds::new(0, Some(0))),
            fitted_height(text, &m, width, 4.0, RowBounds::new(1, Some(1)))
        );
    }
}

#[test]
fn fitted_height_respects_bounds() {
    let m = metrics();
    let long = "one two three four five six seven";
    // Grows with content up to three rows.
    let bounds = RowBounds::new(2, Some(3));
    assert_eq!(fitted_height("hi", &m, 100.0, 0.0, bounds), 40.0);
    assert_eq!(fitted_height(long, &m, 50.0, 0.0, bounds), 60.0);
    // Fixed size ignores content.
    let fixed = RowBounds::fixed(2);
    assert_eq!(fitted_height(long, &m, 50.0, 5.0, fixed), 50.0);
    assert_eq!(fitted_height("hi", &m, 50.0, 5.0, fixed), 50.0);
}

#[test]
fn pixel_bounds_use_line_metric() {
    let bounds = RowBounds::new(1, Some(4));
    assert_eq!(bounds.pixel_bounds(20.0, 3.0), (26.0, Some(86.0)));
    assert_eq!(RowBounds::default().pixel_bounds(20.0, 0.0), (20.0, None));
}

#[test]
fn visible_lines_fit_height() {
    assert_eq!(visible_line_count(68.0, 20.0, 4.0), 3);
    assert_eq!(visible_line_count(4.0, 20.0, 4.0), 0);
    assert_eq!(visible_line_count(100.0, 0.0, 0.0), 0);
}

#[test]
fn visible_lines_survive_rounding() {
    for (lh, pv) in [(17.3f32, 8.7f32), (14.4, 3.3)] {
        for lines in 1..=12usize {
            let height = lines as f32 * lh + 2.0 * pv;
            assert_eq!(visible_line_count(height, lh, pv), lines, "lh={lh} pv={pv}");
        }
    }
}

#[test]
fn fitted_rows_clamp_line_count() {
    let m = metrics();
    let long = "one two three four five six seven";
    assert_eq!(fitted_rows(long, &m, 50.0, RowBounds::new(2, Some(3))), 3);
    assert_eq!(fitted_rows("hi", &m, 50.0, RowBounds::new(2, Some(3))), 2);
    assert_eq!(fitted_rows(long, &m, 50.0, RowBounds::default()), line_count(long, &m, 50.0));
    assert_eq!(RowBounds::new(1, None).clamp_rows(0), 1);
}

fn words() -> impl Strategy<Value = String> {
    // Up to 200pt per word, so narrow widths exercise per-character breaking.
    prop::collection::vec("[a-z]{1,20}", 1..30).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn narrower_never_means_shorter(
        text in words(),
        narrow in 10.0f32..400.0,
        extra in 0.0f32..400.0,
    ) {
        let m = metrics();
        let wide = narrow + extra;
        prop_assert!(
            preferred_height(&text, &m, narrow, 2.0) >= preferred_height(&text, &m, wide, 2.0)
        );
    }

    #[test]
    fn wrapped_lines_fit_width(text in words(), width in 10.0f32..400.0) {
        let m = metrics();
        for line in wrap_lines(&text, &m, width) {
            prop_assert!(m.text_width(&line) <= width);
        }
    }
}
