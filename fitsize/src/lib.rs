// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-sizing text for bounded boxes.
//!
//! Given a discrete set of candidate text sizes (a **ladder**), this crate finds
//! the largest one whose wrapped layout still fits a widget's content box:
//! - **Ladders** come from an explicit preset list or a `(min, max, step)` range.
//! - **Fit search** binary-searches the ladder against a measurement oracle,
//!   assuming larger text never needs less room.
//! - [`AutoSizeHelper`] ties both to a host widget through [`TextHost`], measuring
//!   with any [`fitsize_text::TextLayoutMeasurer`].
//!
//! Attribute parsing, shaping and painting stay with the host toolkit.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod helper;
mod host;
mod ladder;
mod oracle;
mod search;
mod units;

pub use config::{
    AutoSizeAttributes, AutoSizeType, DEFAULT_MAX_TEXT_SIZE_SP, DEFAULT_MIN_TEXT_SIZE_SP,
    DEFAULT_STEP_GRANULARITY_PX, Dimension, SizeConfiguration,
};
pub use error::{AutoSizeError, ConfigError};
pub use helper::AutoSizeHelper;
pub use host::{LayoutIntrospector, TextHost, available_space, resolve_layout_params};
pub use ladder::{SizeLadder, build_ladder};
pub use oracle::{LayoutOracle, metrics_fit};
pub use search::{find_largest_fitting, has_room};
pub use units::{DisplayMetrics, TextUnit};
