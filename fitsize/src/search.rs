// Copyright 2025 the Fitsize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Largest-fitting-size search.
//!
//! The search assumes the oracle is monotonic over the ladder: every size up to
//! some threshold fits and every size above it does not. That is not checked;
//! a non-monotonic oracle yields an unspecified (but in-ladder) size.

use kurbo::Size;

use crate::error::AutoSizeError;
use crate::ladder::SizeLadder;

/// Returns `true` if `space` has a positive, finite width and height.
///
/// A widget that has not been laid out yet reports an empty box.
pub fn has_room(space: Size) -> bool {
    space.width.is_finite() && space.height.is_finite() && space.width > 0.0 && space.height > 0.0
}

/// Finds the largest ladder size the oracle accepts.
///
/// `fits(size, space)` answers whether text rendered at `size` pixels fits
/// within `space`.
///
/// The smallest size is the fallback and is never probed, so a single-entry
/// ladder is answered without calling the oracle. Otherwise the oracle is
/// called `O(log n)` times.
///
/// Returns `Ok(None)` without probing anything when `space` has no room (see
/// [`has_room`]); the caller should retry once real bounds are known.
/// Fails with [`AutoSizeError::NoCandidateSizes`] if the ladder is empty.
pub fn find_largest_fitting(
    ladder: &SizeLadder,
    space: Size,
    mut fits: impl FnMut(u32, Size) -> bool,
) -> Result<Option<u32>, AutoSizeError> {
    let sizes = ladder.as_slice();
    if sizes.is_empty() {
        return Err(AutoSizeError::NoCandidateSizes);
    }
    if !has_room(space) {
        return Ok(None);
    }

    let mut last_known_good = 0;
    let mut lo = 1;
    let mut hi = sizes.len() - 1;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let size = sizes[mid];
        if fits(size, space) {
            log::trace!("size {size}px fits {}x{}", space.width, space.height);
            last_known_good = mid;
            lo = mid + 1;
        } else {
            log::trace!("size {size}px overflows {}x{}", space.width, space.height);
            // `mid >= 1`, so this cannot underflow.
            hi = mid - 1;
        }
    }

    Ok(Some(sizes[last_known_good]))
}
