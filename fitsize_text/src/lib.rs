// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text layout measurement hooks for auto-sizing.
//!
//! Fitting text into a box means laying it out at a candidate size and asking
//! how many lines it wrapped into and how tall it became. Shaping and line
//! breaking stay downstream, so the sizing logic depends on a tiny multi-line
//! measurement interface.
//!
//! This crate is:
//! - small and dependency-free,
//! - `no_std`-friendly (it uses `alloc` for owned font family names), and
//! - engine-agnostic (a shaping engine and a heuristic measurer implement the
//!   same trait).

#![no_std]

extern crate alloc;

mod heuristic;

use alloc::string::String;
use alloc::sync::Arc;

pub use heuristic::HeuristicLayoutMeasurer;

/// A multi-line text layout measurement interface.
///
/// Implementations lay `text` out with `params`, wrapping lines at
/// `max_width`, and report the resulting extents.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate), or
/// - backed by a shaping engine (e.g. Parley).
pub trait TextLayoutMeasurer {
    /// Lays out `text` wrapped to `max_width` and returns its metrics.
    ///
    /// `\n` starts a new paragraph. An empty paragraph still occupies one line.
    fn measure_layout(
        &self,
        text: &str,
        params: &LayoutParams,
        max_width: f64,
    ) -> Result<LayoutMetrics, MeasureError>;
}

impl<T: TextLayoutMeasurer + ?Sized> TextLayoutMeasurer for &T {
    fn measure_layout(
        &self,
        text: &str,
        params: &LayoutParams,
        max_width: f64,
    ) -> Result<LayoutMetrics, MeasureError> {
        (**self).measure_layout(text, params, max_width)
    }
}

/// Text styling inputs relevant to measurement (the "paint").
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family.
    Serif,
    /// A generic sans-serif family.
    SansSerif,
    /// A generic monospace family.
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Roboto"`).
    Named(Arc<str>),
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Paragraph alignment relative to the text direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Align to the leading edge.
    #[default]
    Normal,
    /// Align to the trailing edge.
    Opposite,
    /// Center each line.
    Center,
}

/// How the paragraph direction is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// First strong directional character decides, falling back to LTR.
    #[default]
    FirstStrongLtr,
    /// First strong directional character decides, falling back to RTL.
    FirstStrongRtl,
    /// Always left-to-right.
    Ltr,
    /// Always right-to-left.
    Rtl,
}

/// Everything a measurer needs besides the text and the wrap width.
///
/// Auto-sizing keeps one of these as a scratch buffer and only swaps the font
/// size between candidate measurements.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// The text style, including the candidate font size.
    pub style: TextStyle,
    /// Line alignment.
    pub alignment: TextAlignment,
    /// Paragraph direction.
    pub direction: TextDirection,
    /// Multiplier applied to each line's natural height.
    pub line_spacing_multiplier: f64,
    /// Extra spacing added between lines, in pixels.
    pub line_spacing_extra: f64,
    /// Whether the layout reserves room above the first and below the last
    /// line for tall glyphs.
    pub include_font_padding: bool,
}

impl LayoutParams {
    /// Creates layout parameters for `style` with default spacing.
    #[must_use]
    pub fn new(style: TextStyle) -> Self {
        Self {
            style,
            alignment: TextAlignment::Normal,
            direction: TextDirection::FirstStrongLtr,
            line_spacing_multiplier: 1.0,
            line_spacing_extra: 0.0,
            include_font_padding: true,
        }
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.style.font_size = font_size;
        self
    }

    /// Sets the alignment.
    #[must_use]
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the paragraph direction.
    #[must_use]
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the line spacing as `natural * multiplier + extra`.
    #[must_use]
    pub fn with_line_spacing(mut self, extra: f64, multiplier: f64) -> Self {
        self.line_spacing_extra = extra;
        self.line_spacing_multiplier = multiplier;
        self
    }

    /// Sets whether font padding is included.
    #[must_use]
    pub fn with_include_font_padding(mut self, include_font_padding: bool) -> Self {
        self.include_font_padding = include_font_padding;
        self
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(TextStyle::default())
    }
}

/// Measured extents of a wrapped text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutMetrics {
    /// Number of lines after wrapping.
    pub line_count: usize,
    /// Width of the widest line.
    pub width: f64,
    /// Total height of all lines, including spacing and padding.
    pub height: f64,
}

/// Errors returned when a layout cannot be built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeasureError {
    /// The font size is zero, negative or not finite.
    InvalidFontSize,
    /// The wrap width is zero, negative or not finite.
    InvalidWidth,
    /// The layout engine reported a failure.
    Engine(String),
}

impl core::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidFontSize => write!(f, "font size must be positive and finite"),
            Self::InvalidWidth => write!(f, "layout width must be positive and finite"),
            Self::Engine(msg) => write!(f, "layout engine failed: {msg}"),
        }
    }
}

impl core::error::Error for MeasureError {}

/// Checks the inputs every measurer rejects.
pub fn validate_inputs(params: &LayoutParams, max_width: f64) -> Result<(), MeasureError> {
    let font_size = params.style.font_size;
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(MeasureError::InvalidFontSize);
    }
    if !max_width.is_finite() || max_width <= 0.0 {
        return Err(MeasureError::InvalidWidth);
    }
    Ok(())
}
