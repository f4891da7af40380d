//! SIMD packets backed by the `wide` crate

use super::{Gather, LaneMask, Real};
use crate::pbrt::Float;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use wide::{f32x4, f32x8, CmpGe, CmpGt, CmpLe, CmpLt};

/// Defines a `Real` type over a `wide` register with `$n` lanes. Arithmetic,
/// comparisons, blends, square roots and trigonometry run in SIMD registers.
/// Cube roots go lane by lane since `wide` has no vector form.
macro_rules! wide_real {
    ($name: ident, $simd: ident, $n: literal) => {
        #[doc = concat!("Packet of ", stringify!($n), " `Float` lanes held in a SIMD register.")]
        #[derive(Copy, Clone)]
        pub struct $name(pub $simd);

        impl $name {
            /// Returns the lanes as an array.
            #[inline(always)]
            pub fn to_array(self) -> [Float; $n] {
                self.0.to_array()
            }

            /// Converts a lane mask into an all-bits-set / all-bits-clear
            /// register usable by `blend`.
            #[inline(always)]
            fn mask_bits(mask: LaneMask<$n>) -> $simd {
                let set = Float::from_bits(u32::MAX);
                $simd::from(mask.0.map(|b| if b { set } else { 0.0 }))
            }

            /// Converts a comparison result back into a lane mask.
            #[inline(always)]
            fn lane_mask(bits: $simd) -> LaneMask<$n> {
                LaneMask(bits.to_array().map(|v| v.to_bits() != 0))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($simd::ZERO)
            }
        }

        impl From<[Float; $n]> for $name {
            fn from(lanes: [Float; $n]) -> Self {
                Self($simd::from(lanes))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.to_array() == other.to_array()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.to_array()).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}", self.to_array())
            }
        }

        wide_binop!($name, Add, add, AddAssign, add_assign, +);
        wide_binop!($name, Sub, sub, SubAssign, sub_assign, -);
        wide_binop!($name, Mul, mul, MulAssign, mul_assign, *);
        wide_binop!($name, Div, div, DivAssign, div_assign, /);

        impl Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Real for $name {
            type Mask = LaneMask<$n>;

            const LANES: usize = $n;
            const PREFIX: &'static str = "wide";

            #[inline(always)]
            fn splat(v: Float) -> Self {
                Self($simd::splat(v))
            }

            #[inline(always)]
            fn select(mask: LaneMask<$n>, a: Self, b: Self) -> Self {
                Self(Self::mask_bits(mask).blend(a.0, b.0))
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                Self(self.0.sqrt())
            }

            fn cbrt(self) -> Self {
                Self($simd::from(self.to_array().map(Float::cbrt)))
            }

            #[inline(always)]
            fn sin_cos(self) -> (Self, Self) {
                let (s, c) = self.0.sin_cos();
                (Self(s), Self(c))
            }

            #[inline(always)]
            fn recip(self) -> Self {
                Self($simd::ONE / self.0)
            }

            #[inline(always)]
            fn abs(self) -> Self {
                Self(self.0.abs())
            }

            #[inline(always)]
            fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            #[inline(always)]
            fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }

            #[inline(always)]
            fn copysign(self, sign: Self) -> Self {
                let sign_bit = $simd::splat(-0.0);
                Self(self.0.abs() | (sign.0 & sign_bit))
            }

            #[inline(always)]
            fn lt(self, other: Self) -> LaneMask<$n> {
                Self::lane_mask(self.0.cmp_lt(other.0))
            }

            #[inline(always)]
            fn le(self, other: Self) -> LaneMask<$n> {
                Self::lane_mask(self.0.cmp_le(other.0))
            }

            #[inline(always)]
            fn gt(self, other: Self) -> LaneMask<$n> {
                Self::lane_mask(self.0.cmp_gt(other.0))
            }

            #[inline(always)]
            fn ge(self, other: Self) -> LaneMask<$n> {
                Self::lane_mask(self.0.cmp_ge(other.0))
            }

            #[inline(always)]
            fn is_nan(self) -> LaneMask<$n> {
                Self::lane_mask(self.0.is_nan())
            }
        }

        impl Gather for $name {
            type Lane = Float;

            #[inline(always)]
            fn extract(&self, lane: usize) -> Float {
                self.0.to_array()[lane]
            }

            fn insert(&mut self, lane: usize, value: Float) {
                let mut lanes = self.0.to_array();
                lanes[lane] = value;
                self.0 = $simd::from(lanes);
            }
        }
    };
}

/// Implements a lane-wise arithmetic operator and its assigning form.
macro_rules! wide_binop {
    ($name: ident, $tr: ident, $func: ident, $tr_assign: ident, $func_assign: ident, $op: tt) => {
        impl $tr for $name {
            type Output = Self;

            #[inline(always)]
            fn $func(self, other: Self) -> Self::Output {
                Self(self.0 $op other.0)
            }
        }

        impl $tr_assign for $name {
            #[inline(always)]
            fn $func_assign(&mut self, other: Self) {
                self.0 = self.0 $op other.0;
            }
        }
    };
}

wide_real!(Wide4, f32x4, 4);
wide_real!(Wide8, f32x8, 8);

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::{Mask, Packet};
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn select_blends_lanes() {
        let a = Wide4::from([1.0, 2.0, 3.0, 4.0]);
        let b = Wide4::from([-1.0, -2.0, -3.0, -4.0]);
        let m = LaneMask([true, false, false, true]);
        assert_eq!(Wide4::select(m, a, b).to_array(), [1.0, -2.0, -3.0, 4.0]);
    }

    #[test]
    fn comparisons() {
        let a = Wide4::from([1.0, 2.0, 3.0, Float::NAN]);
        let b = Wide4::splat(2.0);
        assert_eq!(a.lt(b), LaneMask([true, false, false, false]));
        assert_eq!(a.le(b), LaneMask([true, true, false, false]));
        assert_eq!(a.gt(b), LaneMask([false, false, true, false]));
        assert_eq!(a.ge(b), LaneMask([false, true, true, false]));
        assert_eq!(a.is_nan(), LaneMask([false, false, false, true]));
    }

    #[test]
    fn copysign_and_cbrt() {
        let x = Wide4::from([1.0, -2.0, 3.0, -8.0]);
        let s = Wide4::from([-1.0, 1.0, -0.0, -1.0]);
        assert_eq!(x.copysign(s).to_array(), [-1.0, 2.0, -3.0, -8.0]);
        assert_eq!(x.cbrt().extract(3), -2.0);
    }

    #[test]
    fn extract_insert() {
        let mut w = Wide8::zeros();
        w.insert(5, 7.0);
        assert_eq!(w.extract(5), 7.0);
        assert_eq!(w.extract(4), 0.0);
        assert_eq!(w.gt(Wide8::zeros()).count(), 1);
    }

    #[test]
    fn names() {
        assert_eq!(Wide4::PREFIX, "wide");
        assert_eq!(Wide8::LANES, 8);
    }

    proptest! {
        #[test]
        fn arithmetic_matches_packet(
            x in proptest::array::uniform8(-100.0..100.0f32),
            y in proptest::array::uniform8(0.5..100.0f32),
        ) {
            let (wx, wy) = (Wide8::from(x), Wide8::from(y));
            let (px, py) = (Packet(x), Packet(y));
            prop_assert_eq!((wx + wy).to_array(), (px + py).0);
            prop_assert_eq!((wx - wy).to_array(), (px - py).0);
            prop_assert_eq!((wx * wy).to_array(), (px * py).0);
            prop_assert_eq!((wx / wy).to_array(), (px / py).0);
            prop_assert_eq!(wy.sqrt().to_array(), py.sqrt().0);
            prop_assert_eq!(wx.abs().to_array(), px.abs().0);
            prop_assert_eq!(wx.min(wy).to_array(), px.min(py).0);
            prop_assert_eq!(wx.max(wy).to_array(), px.max(py).0);
            prop_assert_eq!(wx.lt(wy), px.lt(py));
        }

        #[test]
        fn sin_cos_close_to_scalar(x in proptest::array::uniform4(-7.0..7.0f32)) {
            let (s, c) = Wide4::from(x).sin_cos();
            for i in 0..4 {
                prop_assert!(approx_eq!(f32, s.extract(i), x[i].sin(), epsilon = 1e-5));
                prop_assert!(approx_eq!(f32, c.extract(i), x[i].cos(), epsilon = 1e-5));
            }
        }
    }
}
