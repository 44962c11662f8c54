// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for configuration and search.

/// A rejected auto-size configuration. Each variant names the offending bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The minimum text size is not positive.
    MinTextSize {
        /// The rejected minimum, in pixels.
        min: i32,
    },
    /// The maximum text size is not greater than the minimum.
    MaxTextSize {
        /// The configured minimum, in pixels.
        min: i32,
        /// The rejected maximum, in pixels.
        max: i32,
    },
    /// The step granularity is not positive.
    StepGranularity {
        /// The rejected step, in pixels.
        step: i32,
    },
    /// A preset list contained no positive sizes.
    EmptyPresetSizes,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MinTextSize { min } => write!(
                f,
                "minimum auto-size text size ({min}px) is less or equal to (0px)"
            ),
            Self::MaxTextSize { min, max } => write!(
                f,
                "maximum auto-size text size ({max}px) is less or equal to minimum auto-size text size ({min}px)"
            ),
            Self::StepGranularity { step } => write!(
                f,
                "auto-size step granularity ({step}px) is less or equal to (0px)"
            ),
            Self::EmptyPresetSizes => write!(f, "preset auto-size text sizes contain no positive size"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors returned by ladder building and fit search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutoSizeError {
    /// The configuration was rejected; the previous one stays in effect.
    InvalidConfiguration(ConfigError),
    /// A search was attempted on an empty ladder.
    ///
    /// This is a sequencing bug in the caller: searches must only run after a
    /// successful configuration.
    NoCandidateSizes,
}

impl core::fmt::Display for AutoSizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidConfiguration(err) => write!(f, "invalid auto-size configuration: {err}"),
            Self::NoCandidateSizes => write!(f, "no available text sizes to choose from"),
        }
    }
}

impl core::error::Error for AutoSizeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidConfiguration(err) => Some(err),
            Self::NoCandidateSizes => None,
        }
    }
}

impl From<ConfigError> for AutoSizeError {
    fn from(value: ConfigError) -> Self {
        Self::InvalidConfiguration(value)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_offending_bound() {
        let err = AutoSizeError::from(ConfigError::MaxTextSize { min: 12, max: 12 });
        let msg = err.to_string();
        assert!(msg.contains("maximum"), "{msg}");
        assert!(msg.contains("(12px)"), "{msg}");

        let msg = ConfigError::StepGranularity { step: -1 }.to_string();
        assert!(msg.contains("step granularity (-1px)"), "{msg}");
    }
}
