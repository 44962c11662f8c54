// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-size configuration values.
//!
//! A [`SizeConfiguration`] is what [`crate::AutoSizeHelper::configure`] accepts
//! (always in pixels). [`AutoSizeAttributes`] is the looser shape an external
//! markup loader produces: every value optional and in any [`TextUnit`].

extern crate alloc;

use alloc::vec::Vec;

use crate::units::{DisplayMetrics, TextUnit};

/// Minimum text size used when a uniform configuration leaves it unset.
pub const DEFAULT_MIN_TEXT_SIZE_SP: f32 = 12.0;
/// Maximum text size used when a uniform configuration leaves it unset.
pub const DEFAULT_MAX_TEXT_SIZE_SP: f32 = 112.0;
/// Step used when a uniform configuration leaves it unset.
pub const DEFAULT_STEP_GRANULARITY_PX: i32 = 1;

/// Whether and how a widget auto-sizes its text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AutoSizeType {
    /// Text keeps whatever size it was given.
    #[default]
    None,
    /// Text scales uniformly in both dimensions to fill the box.
    Uniform,
}

/// Candidate sizes for auto-sizing, in pixels.
///
/// Values are raw so that validation can report exactly what was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SizeConfiguration {
    /// Every size from `min` to `max` in increments of `step`.
    Uniform {
        /// Smallest candidate size.
        min: i32,
        /// Largest candidate size; included only when reachable in whole steps.
        max: i32,
        /// Distance between neighboring candidates.
        step: i32,
    },
    /// An explicit list; order, duplicates and non-positive entries are cleaned up.
    Preset(Vec<i32>),
}

impl SizeConfiguration {
    /// Creates a uniform configuration.
    pub fn uniform(min: i32, max: i32, step: i32) -> Self {
        Self::Uniform { min, max, step }
    }

    /// Creates a preset configuration.
    pub fn preset(sizes: impl Into<Vec<i32>>) -> Self {
        Self::Preset(sizes.into())
    }
}

/// A value with a unit, as found in markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimension {
    /// The numeric value.
    pub value: f32,
    /// The unit `value` is expressed in.
    pub unit: TextUnit,
}

impl Dimension {
    /// Creates a dimension.
    pub fn new(value: f32, unit: TextUnit) -> Self {
        Self { value, unit }
    }

    /// A dimension in pixels.
    pub fn px(value: f32) -> Self {
        Self::new(value, TextUnit::Px)
    }

    /// A dimension in density-independent pixels.
    pub fn dp(value: f32) -> Self {
        Self::new(value, TextUnit::Dip)
    }

    /// A dimension in scale-independent pixels.
    pub fn sp(value: f32) -> Self {
        Self::new(value, TextUnit::Sp)
    }

    /// Converts to whole pixels, rounding to nearest.
    pub fn to_pixel_size(self, metrics: &DisplayMetrics) -> i32 {
        metrics.dimension_pixel_size(self.unit, self.value)
    }
}

/// Auto-size attributes as loaded from markup or a style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutoSizeAttributes {
    /// The requested auto-size type, if specified.
    pub auto_size_type: Option<AutoSizeType>,
    /// Minimum text size, if specified.
    pub min_text_size: Option<Dimension>,
    /// Maximum text size, if specified.
    pub max_text_size: Option<Dimension>,
    /// Step granularity, if specified.
    pub step_granularity: Option<Dimension>,
    /// Preset sizes, if specified. These take precedence over min/max/step.
    pub preset_sizes: Option<Vec<Dimension>>,
}

impl AutoSizeAttributes {
    /// Creates attributes requesting `auto_size_type` with everything else unset.
    pub fn new(auto_size_type: AutoSizeType) -> Self {
        Self {
            auto_size_type: Some(auto_size_type),
            ..Self::default()
        }
    }

    /// Sets the minimum text size.
    #[must_use]
    pub fn with_min_text_size(mut self, min: Dimension) -> Self {
        self.min_text_size = Some(min);
        self
    }

    /// Sets the maximum text size.
    #[must_use]
    pub fn with_max_text_size(mut self, max: Dimension) -> Self {
        self.max_text_size = Some(max);
        self
    }

    /// Sets the step granularity.
    #[must_use]
    pub fn with_step_granularity(mut self, step: Dimension) -> Self {
        self.step_granularity = Some(step);
        self
    }

    /// Sets the preset sizes.
    #[must_use]
    pub fn with_preset_sizes(mut self, sizes: impl Into<Vec<Dimension>>) -> Self {
        self.preset_sizes = Some(sizes.into());
        self
    }

    /// Whether any of min, max, or step was given.
    pub fn has_uniform_bounds(&self) -> bool {
        self.min_text_size.is_some()
            || self.max_text_size.is_some()
            || self.step_granularity.is_some()
    }

    /// Resolves min/max/step to pixels, filling unset values with the defaults.
    pub fn uniform_configuration(&self, metrics: &DisplayMetrics) -> SizeConfiguration {
        let min = self.min_text_size.map_or_else(
            || metrics.dimension_pixel_offset(TextUnit::Sp, DEFAULT_MIN_TEXT_SIZE_SP),
            |d| d.to_pixel_size(metrics),
        );
        let max = self.max_text_size.map_or_else(
            || metrics.dimension_pixel_offset(TextUnit::Sp, DEFAULT_MAX_TEXT_SIZE_SP),
            |d| d.to_pixel_size(metrics),
        );
        let step = self
            .step_granularity
            .map_or(DEFAULT_STEP_GRANULARITY_PX, |d| d.to_pixel_size(metrics));
        SizeConfiguration::uniform(min, max, step)
    }

    /// Resolves the preset sizes to pixels, if any were specified.
    pub fn preset_pixel_sizes(&self, metrics: &DisplayMetrics) -> Option<Vec<i32>> {
        self.preset_sizes
            .as_ref()
            .map(|sizes| sizes.iter().map(|d| d.to_pixel_size(metrics)).collect())
    }
}
