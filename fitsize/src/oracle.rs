// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fit oracle backed by a [`TextLayoutMeasurer`].

use fitsize_text::{LayoutMetrics, LayoutParams, TextLayoutMeasurer};
use kurbo::Size;

/// Returns `true` if a measured layout fits `space`.
///
/// A layout fits when it has no more than `max_lines` lines (if set) and is no
/// taller than `space`. Width is not compared: the layout was already wrapped
/// to `space.width`, and a line's advance may include trailing whitespace that
/// hangs past the wrap width.
pub fn metrics_fit(metrics: &LayoutMetrics, max_lines: Option<u32>, space: Size) -> bool {
    if let Some(max_lines) = max_lines {
        if usize::try_from(max_lines).is_ok_and(|max| metrics.line_count > max) {
            return false;
        }
    }
    metrics.height <= space.height
}

/// Measures text at candidate sizes, reusing one [`LayoutParams`] buffer.
///
/// Only the font size of the buffer changes between measurements; everything else is
/// left as the caller resolved it for this pass.
pub struct LayoutOracle<'a, M: ?Sized> {
    measurer: &'a M,
    text: &'a str,
    max_lines: Option<u32>,
    params: &'a mut LayoutParams,
}

impl<M: ?Sized> core::fmt::Debug for LayoutOracle<'_, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutOracle")
            .field("text", &self.text)
            .field("max_lines", &self.max_lines)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl<'a, M: TextLayoutMeasurer + ?Sized> LayoutOracle<'a, M> {
    /// Creates an oracle for `text` using `params` as scratch space.
    pub fn new(
        measurer: &'a M,
        text: &'a str,
        max_lines: Option<u32>,
        params: &'a mut LayoutParams,
    ) -> Self {
        Self {
            measurer,
            text,
            max_lines,
            params,
        }
    }

    /// Returns `true` if the text laid out at `size` pixels fits `space`.
    ///
    /// A layout that cannot be built counts as not fitting.
    pub fn fits(&mut self, size: u32, space: Size) -> bool {
        self.params.style.font_size = f64::from(size);
        match self
            .measurer
            .measure_layout(self.text, self.params, space.width)
        {
            Ok(metrics) => metrics_fit(&metrics, self.max_lines, space),
            Err(err) => {
                log::warn!("cannot measure text at {size}px: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use fitsize_text::{HeuristicLayoutMeasurer, MeasureError};
    use fitsize_text_parley::ParleyLayoutMeasurer;

    use super::*;

    struct Broken;

    impl TextLayoutMeasurer for Broken {
        fn measure_layout(
            &self,
            _text: &str,
            _params: &LayoutParams,
            _max_width: f64,
        ) -> Result<LayoutMetrics, MeasureError> {
            Err(MeasureError::Engine("malformed text".into()))
        }
    }

    #[test]
    fn line_limit_and_height_both_bound_the_fit() {
        let metrics = LayoutMetrics {
            line_count: 3,
            width: 50.0,
            height: 30.0,
        };
        let space = Size::new(60.0, 30.0);
        assert!(metrics_fit(&metrics, None, space));
        assert!(metrics_fit(&metrics, Some(3), space));
        assert!(!metrics_fit(&metrics, Some(2), space));
        assert!(!metrics_fit(&metrics, None, Size::new(60.0, 29.0)));
        // Hanging whitespace may make a wrapped layout wider than its box.
        assert!(metrics_fit(&metrics, None, Size::new(40.0, 30.0)));
    }

    #[test]
    fn measurements_only_change_the_font_size() {
        let mut params = LayoutParams::default().with_include_font_padding(false);
        let expected = params.clone().with_font_size(20.0);
        let mut oracle = LayoutOracle::new(&HeuristicLayoutMeasurer, "a b c", None, &mut params);
        // At 20px "a b c" is 60px wide on one 20px line.
        assert!(oracle.fits(20, Size::new(60.0, 20.0)));
        assert!(!oracle.fits(30, Size::new(60.0, 20.0)));
        assert!(oracle.fits(20, Size::new(60.0, 20.0)));
        assert_eq!(params, expected);
    }

    #[test]
    fn parley_fits_are_monotonic_in_size() {
        let measurer = ParleyLayoutMeasurer::new();
        let text = "Auto-sized text grows to fill its box and shrinks to stay inside it.";
        let space = Size::new(312.0, 72.0);
        let mut params = LayoutParams::default();
        let mut oracle = LayoutOracle::new(&measurer, text, None, &mut params);

        let fits: Vec<(u32, bool)> = (8..=40)
            .map(|size| (size, oracle.fits(size, space)))
            .collect();
        assert!(fits[0].1, "smallest size should fit: {fits:?}");
        let first_overflow = fits.iter().position(|&(_, fits)| !fits);
        if let Some(first_overflow) = first_overflow {
            assert!(
                fits[first_overflow..].iter().all(|&(_, fits)| !fits),
                "fit answers are not monotonic: {fits:?}"
            );
        }
    }

    #[test]
    fn measurement_failure_means_not_fitting() {
        let mut params = LayoutParams::default();
        let mut oracle = LayoutOracle::new(&Broken, "text", None, &mut params);
        assert!(!oracle.fits(10, Size::new(1000.0, 1000.0)));
    }
}
