// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget auto-size state.
//!
//! [`AutoSizeHelper`] owns the configuration and its ladder, validates every
//! change before committing it, and runs fit passes against a [`TextHost`].

extern crate alloc;

use alloc::vec::Vec;

use fitsize_text::{LayoutParams, TextLayoutMeasurer};

use crate::config::{AutoSizeAttributes, AutoSizeType, SizeConfiguration};
use crate::error::{AutoSizeError, ConfigError};
use crate::host::{TextHost, available_space, resolve_layout_params};
use crate::ladder::{SizeLadder, build_ladder};
use crate::oracle::LayoutOracle;
use crate::search::find_largest_fitting;
use crate::units::{DisplayMetrics, TextUnit};

/// Auto-size state for one text widget.
///
/// Configuration errors leave the previous configuration untouched. Fit passes
/// never fail: an unmeasured widget is skipped and retried on a later pass.
#[derive(Debug)]
pub struct AutoSizeHelper<M> {
    measurer: M,
    auto_size_type: AutoSizeType,
    needs_auto_size: bool,
    min_text_size: Option<u32>,
    max_text_size: Option<u32>,
    step_granularity: Option<u32>,
    has_preset_sizes: bool,
    ladder: SizeLadder,
    /// Reused by every pass; only the font size changes between probes.
    scratch: LayoutParams,
}

impl<M: TextLayoutMeasurer> AutoSizeHelper<M> {
    /// Creates a disabled helper measuring with `measurer`.
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            auto_size_type: AutoSizeType::None,
            needs_auto_size: false,
            min_text_size: None,
            max_text_size: None,
            step_granularity: None,
            has_preset_sizes: false,
            ladder: SizeLadder::default(),
            scratch: LayoutParams::default(),
        }
    }

    /// Returns the measurer.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Validates `config` and, if valid, switches to uniform auto-sizing with it.
    ///
    /// A preset that keeps no positive size is rejected with
    /// [`ConfigError::EmptyPresetSizes`]. No pass runs here; the next
    /// [`compute_and_apply`](Self::compute_and_apply) picks the change up.
    pub fn configure(&mut self, config: SizeConfiguration) -> Result<(), AutoSizeError> {
        let ladder = build_ladder(&config)?;
        match config {
            SizeConfiguration::Uniform { max, step, .. } => {
                self.min_text_size = ladder.first();
                self.max_text_size = u32::try_from(max).ok();
                self.step_granularity = u32::try_from(step).ok();
                self.has_preset_sizes = false;
            }
            SizeConfiguration::Preset(_) => {
                if ladder.is_empty() {
                    return Err(ConfigError::EmptyPresetSizes.into());
                }
                self.min_text_size = ladder.first();
                self.max_text_size = ladder.last();
                self.step_granularity = None;
                self.has_preset_sizes = true;
            }
        }
        log::debug!(
            "auto-size configured with {} sizes ({:?}..={:?})",
            ladder.len(),
            ladder.first(),
            ladder.last()
        );
        self.ladder = ladder;
        self.auto_size_type = AutoSizeType::Uniform;
        self.needs_auto_size = true;
        Ok(())
    }

    /// Switches auto-sizing on with the default range, or off.
    ///
    /// The default range is 12sp to 112sp in 1px steps.
    pub fn set_auto_size_type_with_defaults(
        &mut self,
        auto_size_type: AutoSizeType,
        metrics: &DisplayMetrics,
    ) -> Result<(), AutoSizeError> {
        match auto_size_type {
            AutoSizeType::None => {
                self.disable();
                Ok(())
            }
            AutoSizeType::Uniform => self.configure(
                AutoSizeAttributes::new(AutoSizeType::Uniform).uniform_configuration(metrics),
            ),
        }
    }

    /// Configures a uniform range given in `unit`.
    pub fn set_uniform_with_configuration(
        &mut self,
        min: f32,
        max: f32,
        step: f32,
        unit: TextUnit,
        metrics: &DisplayMetrics,
    ) -> Result<(), AutoSizeError> {
        self.configure(SizeConfiguration::uniform(
            metrics.dimension_pixel_size(unit, min),
            metrics.dimension_pixel_size(unit, max),
            metrics.dimension_pixel_size(unit, step),
        ))
    }

    /// Configures explicit candidate sizes given in `unit`.
    pub fn set_uniform_with_preset_sizes(
        &mut self,
        sizes: &[f32],
        unit: TextUnit,
        metrics: &DisplayMetrics,
    ) -> Result<(), AutoSizeError> {
        let sizes: Vec<i32> = sizes
            .iter()
            .map(|&size| metrics.dimension_pixel_size(unit, size))
            .collect();
        self.configure(SizeConfiguration::Preset(sizes))
    }

    /// Applies attributes loaded from markup.
    ///
    /// Usable preset sizes win and imply uniform auto-sizing. An installed
    /// preset ladder survives a uniform load that names no bounds. Otherwise a
    /// uniform type fills unset bounds with the defaults before validation.
    /// Hosts that do not support auto-sizing end up disabled.
    pub fn load_from_attributes<H: TextHost + ?Sized>(
        &mut self,
        host: &H,
        attrs: &AutoSizeAttributes,
        metrics: &DisplayMetrics,
    ) -> Result<(), AutoSizeError> {
        if !host.supports_auto_size() {
            self.disable();
            return Ok(());
        }

        if let Some(presets) = attrs.preset_pixel_sizes(metrics) {
            if !SizeLadder::from_presets(&presets).is_empty() {
                return self.configure(SizeConfiguration::Preset(presets));
            }
        }

        match attrs.auto_size_type.unwrap_or(self.auto_size_type) {
            AutoSizeType::Uniform if self.has_preset_sizes && !attrs.has_uniform_bounds() => {
                log::debug!("keeping {} preset sizes", self.ladder.len());
                self.needs_auto_size = true;
                Ok(())
            }
            AutoSizeType::Uniform => self.configure(attrs.uniform_configuration(metrics)),
            AutoSizeType::None => {
                self.disable();
                Ok(())
            }
        }
    }

    /// Turns auto-sizing off and forgets the configuration.
    pub fn disable(&mut self) {
        self.auto_size_type = AutoSizeType::None;
        self.needs_auto_size = false;
        self.min_text_size = None;
        self.max_text_size = None;
        self.step_granularity = None;
        self.has_preset_sizes = false;
        self.ladder = SizeLadder::default();
    }

    /// Returns `true` if auto-sizing is configured.
    pub fn is_enabled(&self) -> bool {
        self.auto_size_type != AutoSizeType::None
    }

    /// Returns the auto-size type.
    pub fn auto_size_type(&self) -> AutoSizeType {
        self.auto_size_type
    }

    /// Returns the smallest candidate size in pixels.
    pub fn min_text_size(&self) -> Option<u32> {
        self.min_text_size
    }

    /// Returns the configured maximum in pixels.
    ///
    /// For a uniform range this may exceed the largest candidate when the
    /// maximum is not reachable in whole steps.
    pub fn max_text_size(&self) -> Option<u32> {
        self.max_text_size
    }

    /// Returns the step in pixels, or `None` for preset sizes.
    pub fn step_granularity(&self) -> Option<u32> {
        self.step_granularity
    }

    /// Returns `true` if the ladder came from preset sizes.
    pub fn has_preset_sizes(&self) -> bool {
        self.has_preset_sizes
    }

    /// Returns the current ladder (empty while disabled).
    pub fn ladder(&self) -> &SizeLadder {
        &self.ladder
    }

    /// Returns `true` if a pass is pending.
    pub fn needs_auto_size(&self) -> bool {
        self.needs_auto_size
    }

    /// Marks a pass as pending or not.
    pub fn set_needs_auto_size(&mut self, needs_auto_size: bool) {
        self.needs_auto_size = needs_auto_size;
    }

    /// Runs one fit pass and applies the result to `host`.
    ///
    /// Returns the chosen size, or `None` when nothing ran: auto-sizing is
    /// off, or the host has not been laid out yet.
    ///
    /// When the chosen size differs from the applied one, the host's layout
    /// cache is dropped before the new size is set, and a re-layout is
    /// requested if the host had a layout.
    pub fn compute_and_apply<H: TextHost + ?Sized>(&mut self, host: &mut H) -> Option<u32> {
        if !self.is_enabled() || !host.supports_auto_size() {
            return None;
        }

        let space = available_space(host);
        let found = {
            let Self {
                measurer,
                ladder,
                scratch,
                ..
            } = self;
            let host = &*host;
            resolve_layout_params(host, host.text_style(), scratch);
            let mut oracle = LayoutOracle::new(&*measurer, host.text(), host.max_lines(), scratch);
            find_largest_fitting(ladder, space, |size, space| oracle.fits(size, space))
        };

        let size = match found {
            Ok(Some(size)) => size,
            Ok(None) => {
                log::debug!(
                    "auto-size skipped: no room ({}x{})",
                    space.width,
                    space.height
                );
                return None;
            }
            Err(err) => {
                log::warn!("auto-size skipped: {err}");
                return None;
            }
        };

        self.apply_text_size(host, size);
        Some(size)
    }

    fn apply_text_size<H: TextHost + ?Sized>(&mut self, host: &mut H, size: u32) {
        let size_px = f64::from(size);
        if host.text_size() == size_px {
            return;
        }
        log::debug!("auto-size applying {size}px (was {}px)", host.text_size());

        let had_layout = host.has_layout();
        if had_layout {
            host.invalidate_layout_cache();
        }
        host.set_text_size(size_px);
        if had_layout {
            // The re-layout we request must not trigger another pass.
            self.needs_auto_size = false;
            host.request_layout();
        }
    }
}
