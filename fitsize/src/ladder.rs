// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate size ladders.

extern crate alloc;

use alloc::vec::Vec;

use crate::config::SizeConfiguration;
use crate::error::{AutoSizeError, ConfigError};

/// An ascending sequence of distinct positive text sizes, in pixels.
///
/// Ladders are immutable; a configuration change builds a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SizeLadder {
    sizes: Vec<u32>,
}

impl SizeLadder {
    /// Builds `min, min + step, ...` up to and including `max` when it is
    /// reachable in whole steps.
    ///
    /// Bounds are checked in order (`min`, then `max`, then `step`) and the
    /// first failure is reported.
    pub fn uniform(min: i32, max: i32, step: i32) -> Result<Self, ConfigError> {
        let (min, max, step) = validate_uniform(min, max, step)?;
        let range = max - min;
        let mut len = range.div_ceil(step);
        if range % step == 0 {
            len += 1;
        }
        let sizes = (0..len).map(|i| min + i * step).collect();
        Ok(Self { sizes })
    }

    /// Builds a ladder from an arbitrary list: sorted, deduplicated, and with
    /// non-positive entries dropped. The result may be empty.
    pub fn from_presets(presets: &[i32]) -> Self {
        let mut sorted = presets.to_vec();
        sorted.sort_unstable();

        let mut sizes: Vec<u32> = Vec::with_capacity(sorted.len());
        for value in sorted {
            let Ok(value) = u32::try_from(value) else {
                continue;
            };
            if value == 0 {
                continue;
            }
            if sizes.last().is_none_or(|&last| value > last) {
                sizes.push(value);
            }
        }
        Self { sizes }
    }

    /// Returns the sizes in ascending order.
    pub fn as_slice(&self) -> &[u32] {
        &self.sizes
    }

    /// Returns the number of candidate sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` when there is nothing to choose from.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Returns the size at `index`.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    /// Returns the smallest size.
    pub fn first(&self) -> Option<u32> {
        self.sizes.first().copied()
    }

    /// Returns the largest size.
    pub fn last(&self) -> Option<u32> {
        self.sizes.last().copied()
    }

    /// Iterates over the sizes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.sizes.iter().copied()
    }
}

/// Builds the ladder a configuration describes.
///
/// Uniform configurations fail with [`AutoSizeError::InvalidConfiguration`] when
/// their bounds are out of order. Presets never fail here, but may yield an
/// empty ladder.
pub fn build_ladder(config: &SizeConfiguration) -> Result<SizeLadder, AutoSizeError> {
    match config {
        SizeConfiguration::Uniform { min, max, step } => {
            Ok(SizeLadder::uniform(*min, *max, *step)?)
        }
        SizeConfiguration::Preset(sizes) => Ok(SizeLadder::from_presets(sizes)),
    }
}

fn validate_uniform(min: i32, max: i32, step: i32) -> Result<(u32, u32, u32), ConfigError> {
    let Some(min_px) = u32::try_from(min).ok().filter(|&v| v > 0) else {
        return Err(ConfigError::MinTextSize { min });
    };
    if max <= min {
        return Err(ConfigError::MaxTextSize { min, max });
    }
    let Some(step_px) = u32::try_from(step).ok().filter(|&v| v > 0) else {
        return Err(ConfigError::StepGranularity { step });
    };
    // `max > min > 0` here.
    let max_px = max.unsigned_abs();
    Ok((min_px, max_px, step_px))
}
