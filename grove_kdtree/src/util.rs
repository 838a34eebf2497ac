// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;

/// Total-order comparison over `PartialOrd` scalars.
///
/// Incomparable pairs (NaN) collapse to `Equal`; coordinates are required
/// to be finite at the API boundary, so this case does not arise in
/// well-formed use.
#[inline]
pub(crate) fn cmp_t<T: PartialOrd>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[inline]
pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

#[inline]
pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn sqrt(v: f64) -> f64 {
    v.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn sqrt(v: f64) -> f64 {
    libm::sqrt(v)
}
