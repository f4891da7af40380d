//! Elementwise floating point arithmetic

use super::Mask;
use crate::pbrt::Float;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating point representation that every lane-generic algorithm is
/// written against. All operations act independently on each lane.
pub trait Real:
    Copy
    + Clone
    + fmt::Debug
    + Default
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// The matching active-lane mask.
    type Mask: Mask;

    /// Number of lanes.
    const LANES: usize;

    /// Prefix used when naming variants (e.g. `scalar`, `packet`).
    const PREFIX: &'static str;

    /// Returns a value with every lane set to `v`.
    ///
    /// * `v` - The lane value.
    fn splat(v: Float) -> Self;

    /// Returns zero in every lane.
    #[inline(always)]
    fn zeros() -> Self {
        Self::splat(0.0)
    }

    /// Returns one in every lane.
    #[inline(always)]
    fn ones() -> Self {
        Self::splat(1.0)
    }

    /// Lane-wise blend: `mask ? a : b`.
    ///
    /// * `mask` - Selects lanes from `a` where set and from `b` otherwise.
    /// * `a`    - Value for set lanes.
    /// * `b`    - Value for cleared lanes.
    fn select(mask: Self::Mask, a: Self, b: Self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Cube root.
    fn cbrt(self) -> Self;

    /// Returns `(sin(x), cos(x))`.
    fn sin_cos(self) -> (Self, Self);

    /// Reciprocal `1/x`.
    fn recip(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Lane-wise minimum.
    ///
    /// * `other` - The other value.
    fn min(self, other: Self) -> Self;

    /// Lane-wise maximum.
    ///
    /// * `other` - The other value.
    fn max(self, other: Self) -> Self;

    /// Magnitude of `self` with the sign of `sign`.
    ///
    /// * `sign` - Value providing the sign.
    fn copysign(self, sign: Self) -> Self;

    /// Lane-wise `self < other`.
    fn lt(self, other: Self) -> Self::Mask;

    /// Lane-wise `self <= other`.
    fn le(self, other: Self) -> Self::Mask;

    /// Lane-wise `self > other`.
    fn gt(self, other: Self) -> Self::Mask;

    /// Lane-wise `self >= other`.
    fn ge(self, other: Self) -> Self::Mask;

    /// Lane-wise NaN test.
    fn is_nan(self) -> Self::Mask;

    /// Returns `x * x`.
    #[inline(always)]
    fn sqr(self) -> Self {
        self * self
    }

    /// Square root clamped so that negative arguments (from round-off) yield 0.
    #[inline(always)]
    fn safe_sqrt(self) -> Self {
        self.max(Self::zeros()).sqrt()
    }
}

impl Real for Float {
    type Mask = bool;

    const LANES: usize = 1;
    const PREFIX: &'static str = "scalar";

    #[inline(always)]
    fn splat(v: Float) -> Self {
        v
    }

    #[inline(always)]
    fn select(mask: bool, a: Self, b: Self) -> Self {
        if mask {
            a
        } else {
            b
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Float::sqrt(self)
    }

    #[inline(always)]
    fn cbrt(self) -> Self {
        Float::cbrt(self)
    }

    #[inline(always)]
    fn sin_cos(self) -> (Self, Self) {
        (Float::sin(self), Float::cos(self))
    }

    #[inline(always)]
    fn recip(self) -> Self {
        1.0 / self
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Float::abs(self)
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Float::min(self, other)
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Float::max(self, other)
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        Float::copysign(self, sign)
    }

    #[inline(always)]
    fn lt(self, other: Self) -> bool {
        self < other
    }

    #[inline(always)]
    fn le(self, other: Self) -> bool {
        self <= other
    }

    #[inline(always)]
    fn gt(self, other: Self) -> bool {
        self > other
    }

    #[inline(always)]
    fn ge(self, other: Self) -> bool {
        self >= other
    }

    #[inline(always)]
    fn is_nan(self) -> bool {
        Float::is_nan(self)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn select_scalar() {
        assert_eq!(Float::select(true, 1.0, 2.0), 1.0);
        assert_eq!(Float::select(false, 1.0, 2.0), 2.0);
    }

    #[test]
    fn safe_sqrt_clamps_negative() {
        assert_eq!((-1e-7 as Float).safe_sqrt(), 0.0);
        assert_eq!((4.0 as Float).safe_sqrt(), 2.0);
    }

    #[test]
    fn cbrt_negative() {
        assert_eq!(Real::cbrt(-8.0 as Float), -2.0);
        assert_eq!(Real::cbrt(-1.0 as Float), -1.0);
    }

    proptest! {
        #[test]
        fn sqr_matches_mul(x in -100.0..100.0f32) {
            prop_assert_eq!(x.sqr(), x * x);
        }

        #[test]
        fn copysign_magnitude(x in -100.0..100.0f32, s in -1.0..1.0f32) {
            prop_assert_eq!(Real::copysign(x, s).abs(), x.abs());
        }
    }
}
