// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget side of auto-sizing.
//!
//! A host toolkit adapts its text widget to [`TextHost`]. Properties a toolkit
//! may not expose publicly go through [`LayoutIntrospector`], where every query
//! is optional and falls back to a documented default.

use fitsize_text::{LayoutParams, TextAlignment, TextDirection, TextStyle};
use kurbo::{Insets, Size};

/// Optional access to layout properties of the host widget.
///
/// Every method defaults to `None`, meaning "unknown"; auto-sizing then uses
/// the default noted on the method.
pub trait LayoutIntrospector {
    /// Line alignment. Defaults to [`TextAlignment::Normal`].
    fn alignment(&self) -> Option<TextAlignment> {
        None
    }

    /// Paragraph direction. Defaults to [`TextDirection::FirstStrongLtr`].
    fn text_direction(&self) -> Option<TextDirection> {
        None
    }

    /// Line-spacing multiplier. Defaults to `1.0`.
    fn line_spacing_multiplier(&self) -> Option<f64> {
        None
    }

    /// Extra line spacing in pixels. Defaults to `0.0`.
    fn line_spacing_extra(&self) -> Option<f64> {
        None
    }

    /// Whether font padding is included. Defaults to `true`.
    fn include_font_padding(&self) -> Option<bool> {
        None
    }
}

/// A text widget that can be auto-sized.
pub trait TextHost: LayoutIntrospector {
    /// The text currently displayed.
    fn text(&self) -> &str;

    /// The current text style (the "paint").
    fn text_style(&self) -> TextStyle;

    /// The widget's current size, including padding.
    ///
    /// A widget that has not been laid out yet reports a zero size.
    fn size(&self) -> Size;

    /// Padding between the widget bounds and its text.
    fn padding(&self) -> Insets {
        Insets::ZERO
    }

    /// The maximum number of lines, if limited.
    fn max_lines(&self) -> Option<u32> {
        None
    }

    /// The currently applied text size in pixels.
    fn text_size(&self) -> f64 {
        self.text_style().font_size
    }

    /// Applies a new text size in pixels.
    fn set_text_size(&mut self, size: f64);

    /// Whether the widget currently holds a built text layout.
    fn has_layout(&self) -> bool;

    /// Drops any layout built for the previous text size.
    fn invalidate_layout_cache(&mut self) {}

    /// Schedules a re-layout and redraw.
    fn request_layout(&mut self);

    /// Whether this widget may auto-size at all. Editable text fields, for
    /// example, return `false`.
    fn supports_auto_size(&self) -> bool {
        true
    }
}

/// The box text may occupy: the host size minus its padding.
pub fn available_space<H: TextHost + ?Sized>(host: &H) -> Size {
    let size = host.size();
    let pad = host.padding();
    Size::new(
        size.width - pad.x0 - pad.x1,
        size.height - pad.y0 - pad.y1,
    )
}

/// Fills `params` from `style` and whatever `introspector` can answer.
///
/// `params` is overwritten in place so that a scratch buffer can be reused
/// across passes.
pub fn resolve_layout_params<I: LayoutIntrospector + ?Sized>(
    introspector: &I,
    style: TextStyle,
    params: &mut LayoutParams,
) {
    params.style = style;
    params.alignment = introspector.alignment().unwrap_or_default();
    params.direction = introspector.text_direction().unwrap_or_default();
    params.line_spacing_multiplier = introspector.line_spacing_multiplier().unwrap_or(1.0);
    params.line_spacing_extra = introspector.line_spacing_extra().unwrap_or(0.0);
    params.include_font_padding = introspector.include_font_padding().unwrap_or(true);
}
