// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed text layout measurement.
//!
//! This crate implements [`fitsize_text::TextLayoutMeasurer`] using Parley,
//! giving auto-sizing shaping-aware line breaking and line metrics.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::cell::RefCell;

use fitsize_text::{
    FontFamily, FontStyle, LayoutMetrics, LayoutParams, MeasureError, TextAlignment,
    TextLayoutMeasurer, validate_inputs,
};
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontStyle as ParleyFontStyle, FontWeight};

/// A [`TextLayoutMeasurer`] backed by Parley.
///
/// Parley resolves the paragraph direction from the text itself, so
/// [`LayoutParams::direction`] is not forwarded. Parley has no notion of font
/// padding either; [`LayoutParams::include_font_padding`] is ignored.
pub struct ParleyLayoutMeasurer {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    display_scale: f32,
    quantize: bool,
}

impl core::fmt::Debug for ParleyLayoutMeasurer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyLayoutMeasurer")
            .field("display_scale", &self.display_scale)
            .field("quantize", &self.quantize)
            .finish_non_exhaustive()
    }
}

impl ParleyLayoutMeasurer {
    /// Creates a new Parley-backed measurer using the default system font
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            display_scale: 1.0,
            quantize: true,
        }
    }

    /// Sets the display scale passed to Parley.
    ///
    /// This is typically a device pixel ratio. Measurements are scaled back
    /// into logical coordinates (divide by scale).
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Sets whether Parley should quantize layout coordinates to pixel boundaries.
    #[must_use]
    pub fn with_quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    fn parley_font_stack(family: &FontFamily) -> FontStack<'_> {
        let family = match family {
            FontFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            FontFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            FontFamily::Monospace => ParleyFontFamily::Generic(GenericFamily::Monospace),
            FontFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }

    fn parley_font_style(style: FontStyle) -> ParleyFontStyle {
        match style {
            FontStyle::Normal => ParleyFontStyle::Normal,
            FontStyle::Italic => ParleyFontStyle::Italic,
            FontStyle::Oblique => ParleyFontStyle::Oblique(None),
        }
    }

    fn parley_alignment(alignment: TextAlignment) -> Alignment {
        match alignment {
            TextAlignment::Normal => Alignment::Start,
            TextAlignment::Opposite => Alignment::End,
            TextAlignment::Center => Alignment::Center,
        }
    }

    /// Narrows an already validated (finite, positive) value for Parley.
    fn to_f32(value: f64) -> f32 {
        if value >= f64::from(f32::MAX) {
            f32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is clamped to f32::MAX above"
            )]
            {
                value as f32
            }
        }
    }
}

impl Default for ParleyLayoutMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutMeasurer for ParleyLayoutMeasurer {
    fn measure_layout(
        &self,
        text: &str,
        params: &LayoutParams,
        max_width: f64,
    ) -> Result<LayoutMetrics, MeasureError> {
        validate_inputs(params, max_width)?;

        // An empty layout has no lines to take metrics from; a blank one does.
        let is_empty = text.is_empty();
        let text = if is_empty { " " } else { text };

        let scale = self.display_scale.max(1.0e-6);
        let wrap_width = Self::to_f32(max_width) * scale;

        let mut font_cx = self
            .font_cx
            .try_borrow_mut()
            .map_err(|_| MeasureError::Engine("font context is already in use".into()))?;
        let mut layout_cx = self
            .layout_cx
            .try_borrow_mut()
            .map_err(|_| MeasureError::Engine("layout context is already in use".into()))?;

        let style = &params.style;
        let mut builder = layout_cx.ranged_builder(&mut font_cx, text, scale, self.quantize);
        builder.push_default(StyleProperty::FontSize(Self::to_f32(style.font_size)));
        builder.push_default(StyleProperty::FontStack(Self::parley_font_stack(
            &style.font_family,
        )));
        builder.push_default(StyleProperty::FontStyle(Self::parley_font_style(
            style.font_style,
        )));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(f32::from(
            style.font_weight.0,
        ))));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(Some(wrap_width));
        layout.align(
            Some(wrap_width),
            Self::parley_alignment(params.alignment),
            AlignmentOptions::default(),
        );

        let mut line_count = 0_usize;
        let mut widest = 0.0_f64;
        let mut height = 0.0_f64;
        for line in layout.lines() {
            let m = line.metrics();
            let natural = f64::from(m.ascent + m.descent + m.leading);
            if line_count > 0 {
                height += params.line_spacing_extra * f64::from(scale);
            }
            height += natural * params.line_spacing_multiplier;
            widest = widest.max(f64::from(m.advance - m.trailing_whitespace));
            line_count += 1;
        }
        if line_count == 0 {
            return Err(MeasureError::Engine("layout produced no lines".into()));
        }

        let scale = f64::from(scale);
        Ok(LayoutMetrics {
            line_count,
            width: if is_empty { 0.0 } else { widest / scale },
            height: (height / scale).max(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn parley_measurer_is_nonzero_for_nonempty_text() {
        let m = ParleyLayoutMeasurer::new();
        let params = LayoutParams::default().with_font_size(12.0);
        let metrics = m.measure_layout("Hello", &params, 500.0).unwrap();
        assert_eq!(metrics.line_count, 1);
        assert!(metrics.width > 0.0);
        assert!(metrics.height > 0.0);
    }

    #[test]
    fn narrow_width_wraps_into_more_lines() {
        let m = ParleyLayoutMeasurer::new();
        let params = LayoutParams::default().with_font_size(16.0);
        let text = "the quick brown fox jumps over the lazy dog";
        let wide = m.measure_layout(text, &params, 2000.0).unwrap();
        let narrow = m.measure_layout(text, &params, 80.0).unwrap();
        assert!(narrow.line_count > wide.line_count);
        assert!(narrow.height > wide.height);
    }

    #[test]
    fn trailing_whitespace_does_not_widen_lines() {
        let m = ParleyLayoutMeasurer::new();
        let params = LayoutParams::default().with_font_size(16.0);
        let bare = m.measure_layout("Hello", &params, 500.0).unwrap();
        let spaced = m.measure_layout("Hello   ", &params, 500.0).unwrap();
        assert!((spaced.width - bare.width).abs() < 1e-3);
    }

    #[test]
    fn empty_text_measures_as_one_blank_line() {
        let m = ParleyLayoutMeasurer::new();
        let params = LayoutParams::default().with_font_size(12.0);
        let metrics = m.measure_layout("", &params, 100.0).unwrap();
        assert_eq!(metrics.line_count, 1);
        assert_eq!(metrics.width, 0.0);
    }

    #[test]
    fn rejects_non_positive_font_size() {
        let m = ParleyLayoutMeasurer::new();
        let params = LayoutParams::default().with_font_size(0.0);
        assert_eq!(
            m.measure_layout("Hello", &params, 100.0),
            Err(MeasureError::InvalidFontSize)
        );
    }
}
