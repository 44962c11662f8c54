// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimension units and their conversion to pixels.

/// A unit a text dimension can be expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextUnit {
    /// Raw pixels.
    #[default]
    Px,
    /// Density-independent pixels.
    Dip,
    /// Scale-independent pixels (density times the user's font scale).
    Sp,
    /// Points, 1/72 of an inch.
    Pt,
    /// Inches.
    In,
    /// Millimeters.
    Mm,
}

/// Display properties needed to turn dimensions into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel.
    pub density: f32,
    /// Pixels per scale-independent pixel.
    pub scaled_density: f32,
    /// Physical pixels per inch along the x axis.
    pub xdpi: f32,
}

impl DisplayMetrics {
    /// Metrics of a baseline 160dpi display with no font scaling.
    pub const BASELINE: Self = Self {
        density: 1.0,
        scaled_density: 1.0,
        xdpi: 160.0,
    };

    /// Creates metrics for `density` with an unscaled font size.
    #[must_use]
    pub fn new(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
            xdpi: 160.0 * density,
        }
    }

    /// Sets the user's font scale on top of the density.
    #[must_use]
    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.scaled_density = self.density * font_scale;
        self
    }

    /// Converts `value` in `unit` to (fractional) pixels.
    pub fn apply_dimension(&self, unit: TextUnit, value: f32) -> f32 {
        match unit {
            TextUnit::Px => value,
            TextUnit::Dip => value * self.density,
            TextUnit::Sp => value * self.scaled_density,
            TextUnit::Pt => value * self.xdpi / 72.0,
            TextUnit::In => value * self.xdpi,
            TextUnit::Mm => value * self.xdpi / 25.4,
        }
    }

    /// Converts to whole pixels by rounding to nearest.
    ///
    /// A non-zero value never collapses to zero; it becomes one pixel with the
    /// value's sign.
    pub fn dimension_pixel_size(&self, unit: TextUnit, value: f32) -> i32 {
        let px = self.apply_dimension(unit, value);
        let rounded = if px >= 0.0 { px + 0.5 } else { px - 0.5 };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Truncating after the half-pixel bias is the rounding step"
        )]
        let res = rounded as i32;
        if res != 0 || value == 0.0 {
            res
        } else if value > 0.0 {
            1
        } else {
            -1
        }
    }

    /// Converts to whole pixels by truncating toward zero.
    pub fn dimension_pixel_offset(&self, unit: TextUnit, value: f32) -> i32 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Truncation is the documented conversion"
        )]
        let px = self.apply_dimension(unit, value) as i32;
        px
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::BASELINE
    }
}
