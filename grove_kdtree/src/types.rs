// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive point and scalar types.

use core::cmp::Ordering;
use core::fmt::Debug;

use crate::util::{cmp_t, max_t, min_t};

/// A point in the plane.
///
/// Equality is exact coordinate equality; there is no epsilon tolerance.
/// Two points are the same entry in a [`KdTree`][crate::KdTree] if and only
/// if both coordinates compare equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point from its coordinates.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Point<T> {
    /// Coordinate on the given axis.
    #[inline]
    pub(crate) fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Whether both coordinates are finite.
    ///
    /// Always `true` for integer scalars. Queries and insertions require
    /// finite coordinates; debug builds assert this at the API boundary.
    #[inline]
    pub fn is_finite(&self) -> bool {
        T::is_finite(self.x) && T::is_finite(self.y)
    }

    /// Squared Euclidean distance to `other`, in the widened accumulator type.
    #[inline]
    pub fn dist2(&self, other: &Self) -> T::Acc {
        T::dist2(self.x, self.y, other.x, other.y)
    }
}

/// Splitting axis of a tree node. Alternates with depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    /// The other axis.
    #[inline]
    pub(crate) fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Compare two points on this axis, breaking ties on the other axis.
    ///
    /// Returns `Ordering::Equal` only when the points are coordinate-equal
    /// (for finite coordinates).
    #[inline]
    pub(crate) fn cmp_points<T: Scalar>(self, a: &Point<T>, b: &Point<T>) -> Ordering {
        cmp_t(a.get(self), b.get(self)).then_with(|| {
            let other = self.flip();
            cmp_t(a.get(other), b.get(other))
        })
    }
}

/// Numeric scalar abstraction for point coordinates.
///
/// This trait provides the small set of operations the tree needs, and an
/// associated widened accumulator type for squared distances
/// (e.g., f32→f64, i64→i128) so best-distance comparisons are robust.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type for squared distances.
    type Acc: Copy + PartialOrd + Debug;

    /// Smallest representable value (negative infinity for floats).
    fn min_value() -> Self;

    /// Largest representable value (positive infinity for floats).
    fn max_value() -> Self;

    /// Whether the value is finite. Always `true` for integers.
    fn is_finite(v: Self) -> bool;

    /// Squared Euclidean distance between `(ax, ay)` and `(bx, by)`.
    fn dist2(ax: Self, ay: Self, bx: Self, by: Self) -> Self::Acc;

    /// Zero in the accumulator type.
    fn acc_zero() -> Self::Acc;

    /// Convert an accumulator value to `f64` (for distance reporting).
    fn acc_to_f64(acc: Self::Acc) -> f64;
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline(always)]
    fn min_value() -> Self {
        Self::NEG_INFINITY
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }

    #[inline]
    fn dist2(ax: Self, ay: Self, bx: Self, by: Self) -> Self::Acc {
        let dx = f64::from(ax) - f64::from(bx);
        let dy = f64::from(ay) - f64::from(by);
        dx * dx + dy * dy
    }

    #[inline(always)]
    fn acc_zero() -> Self::Acc {
        0.0
    }

    #[inline(always)]
    fn acc_to_f64(acc: Self::Acc) -> f64 {
        acc
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline(always)]
    fn min_value() -> Self {
        Self::NEG_INFINITY
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }

    #[inline]
    fn dist2(ax: Self, ay: Self, bx: Self, by: Self) -> Self::Acc {
        let dx = ax - bx;
        let dy = ay - by;
        dx * dx + dy * dy
    }

    #[inline(always)]
    fn acc_zero() -> Self::Acc {
        0.0
    }

    #[inline(always)]
    fn acc_to_f64(acc: Self::Acc) -> f64 {
        acc
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline(always)]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::MAX
    }

    #[inline(always)]
    fn is_finite(_v: Self) -> bool {
        true
    }

    #[inline]
    fn dist2(ax: Self, ay: Self, bx: Self, by: Self) -> Self::Acc {
        // Differences fit in i128; squares saturate at the extreme ends of
        // the coordinate range, which preserves the comparison ordering.
        let dx = i128::from(ax) - i128::from(bx);
        let dy = i128::from(ay) - i128::from(by);
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }

    #[inline(always)]
    fn acc_zero() -> Self::Acc {
        0
    }

    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "distance reporting is approximate for very large integer coordinates"
    )]
    fn acc_to_f64(acc: Self::Acc) -> f64 {
        acc as f64
    }
}

/// Helper alias for the widened accumulator type `Scalar::Acc` associated with a `T: Scalar`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

/// Axis-aligned region of the plane a subtree is confined to during a
/// nearest-neighbor search. Passed by value through the recursion; starts
/// as the unbounded plane.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Region<T> {
    pub(crate) min_x: T,
    pub(crate) min_y: T,
    pub(crate) max_x: T,
    pub(crate) max_y: T,
}

impl<T: Scalar> Region<T> {
    /// The unbounded plane.
    #[inline]
    pub(crate) fn unbounded() -> Self {
        Self {
            min_x: T::min_value(),
            min_y: T::min_value(),
            max_x: T::max_value(),
            max_y: T::max_value(),
        }
    }

    /// Squared distance from `p` to the closest point of this region.
    ///
    /// Zero if `p` lies inside the region.
    #[inline]
    pub(crate) fn dist2_to(&self, p: &Point<T>) -> T::Acc {
        let nx = max_t(self.min_x, min_t(p.x, self.max_x));
        let ny = max_t(self.min_y, min_t(p.y, self.max_y));
        T::dist2(nx, ny, p.x, p.y)
    }

    /// The part of the region on the low side of `v` on `axis`.
    #[inline]
    pub(crate) fn below(mut self, axis: Axis, v: T) -> Self {
        match axis {
            Axis::X => self.max_x = v,
            Axis::Y => self.max_y = v,
        }
        self
    }

    /// The part of the region on the high side of `v` on `axis`.
    #[inline]
    pub(crate) fn above(mut self, axis: Axis, v: T) -> Self {
        match axis {
            Axis::X => self.min_x = v,
            Axis::Y => self.min_y = v,
        }
        self
    }
}
