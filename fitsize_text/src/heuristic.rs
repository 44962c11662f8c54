// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A shaping-free measurer for tests and early layout.

use crate::{LayoutMetrics, LayoutParams, MeasureError, TextLayoutMeasurer, validate_inputs};

/// Average glyph advance, in ems.
const ADVANCE_EM: f64 = 0.6;
/// Room reserved above the first and below the last line when font padding is on, in ems.
const FONT_PADDING_EM: f64 = 0.1;

/// A tiny heuristic layout measurer.
///
/// It assumes every glyph (including spaces) advances ~0.6em, that a line is
/// 1em tall, and wraps greedily at whitespace. Words are never split, so a word
/// wider than the wrap width overflows and is reported through
/// [`LayoutMetrics::width`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicLayoutMeasurer;

impl TextLayoutMeasurer for HeuristicLayoutMeasurer {
    fn measure_layout(
        &self,
        text: &str,
        params: &LayoutParams,
        max_width: f64,
    ) -> Result<LayoutMetrics, MeasureError> {
        validate_inputs(params, max_width)?;

        let em = params.style.font_size;
        let space = ADVANCE_EM * em;
        let mut line_count = 0_usize;
        let mut widest = 0.0_f64;

        for paragraph in text.split('\n') {
            line_count += 1;
            let mut line_width = 0.0;
            let mut line_has_content = false;
            for word in paragraph.split_whitespace() {
                let word_width = ADVANCE_EM * em * word.chars().count() as f64;
                if !line_has_content {
                    line_width = word_width;
                } else if line_width + space + word_width > max_width {
                    widest = widest.max(line_width);
                    line_count += 1;
                    line_width = word_width;
                } else {
                    line_width += space + word_width;
                }
                line_has_content = true;
            }
            widest = widest.max(line_width);
        }

        let lines = line_count as f64;
        let mut height = lines * em * params.line_spacing_multiplier
            + (lines - 1.0) * params.line_spacing_extra;
        if params.include_font_padding {
            height += 2.0 * FONT_PADDING_EM * em;
        }

        Ok(LayoutMetrics {
            line_count,
            width: widest,
            height: height.max(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn params(font_size: f64) -> LayoutParams {
        LayoutParams::default()
            .with_font_size(font_size)
            .with_include_font_padding(false)
    }

    #[test]
    fn wraps_greedily_at_whitespace() {
        // Each glyph is 6px at 10px, so "aaaa bbbb" is 54px wide.
        let m = HeuristicLayoutMeasurer;
        let one = m.measure_layout("aaaa bbbb", &params(10.0), 60.0).unwrap();
        assert_eq!(one.line_count, 1);
        assert_eq!(one.width, 54.0);
        assert_eq!(one.height, 10.0);

        let two = m.measure_layout("aaaa bbbb", &params(10.0), 40.0).unwrap();
        assert_eq!(two.line_count, 2);
        assert_eq!(two.width, 24.0);
        assert_eq!(two.height, 20.0);
    }

    #[test]
    fn empty_text_occupies_one_line() {
        let m = HeuristicLayoutMeasurer;
        let metrics = m.measure_layout("", &params(10.0), 50.0).unwrap();
        assert_eq!(metrics.line_count, 1);
        assert_eq!(metrics.width, 0.0);
        assert_eq!(metrics.height, 10.0);

        let metrics = m.measure_layout("a\n\nb", &params(10.0), 50.0).unwrap();
        assert_eq!(metrics.line_count, 3);
    }

    #[test]
    fn long_words_overflow_instead_of_splitting() {
        let m = HeuristicLayoutMeasurer;
        let metrics = m
            .measure_layout("abcdefghij", &params(10.0), 30.0)
            .unwrap();
        assert_eq!(metrics.line_count, 1);
        assert!(metrics.width > 30.0, "unbreakable word should overflow");
    }

    #[test]
    fn spacing_and_padding_grow_height() {
        let m = HeuristicLayoutMeasurer;
        let p = params(10.0)
            .with_line_spacing(2.0, 1.5)
            .with_include_font_padding(true);
        let metrics = m.measure_layout("a\nb", &p, 100.0).unwrap();
        // 2 lines * 15px + 1 gap * 2px + 2 * 1px padding.
        assert_eq!(metrics.height, 34.0);
    }

    #[test]
    fn rejects_zero_width() {
        let m = HeuristicLayoutMeasurer;
        assert_eq!(
            m.measure_layout("a", &params(10.0), 0.0),
            Err(MeasureError::InvalidWidth)
        );
    }
}
