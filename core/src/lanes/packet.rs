//! Packets of `Float` lanes

use super::{LaneMask, Real};
use crate::pbrt::Float;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// `N` independent `Float` values processed in lock-step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Packet<const N: usize>(pub [Float; N]);

impl<const N: usize> Packet<N> {
    /// Build a packet by evaluating `f` for every lane index.
    ///
    /// * `f` - Function returning the value of a lane.
    pub fn from_fn<F: FnMut(usize) -> Float>(f: F) -> Self {
        Self(std::array::from_fn(f))
    }

    /// Apply `f` to every lane.
    ///
    /// * `f` - Lane function.
    #[inline(always)]
    pub fn map<F: Fn(Float) -> Float>(self, f: F) -> Self {
        Self::from_fn(|i| f(self.0[i]))
    }

    /// Combine lanes of two packets with `f`.
    ///
    /// * `other` - The other packet.
    /// * `f`     - Lane function.
    #[inline(always)]
    pub fn zip_map<F: Fn(Float, Float) -> Float>(self, other: Self, f: F) -> Self {
        Self::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Compare lanes of two packets with `f`.
    ///
    /// * `other` - The other packet.
    /// * `f`     - Lane predicate.
    #[inline(always)]
    fn compare<F: Fn(Float, Float) -> bool>(self, other: Self, f: F) -> LaneMask<N> {
        LaneMask::from_fn(|i| f(self.0[i], other.0[i]))
    }
}

impl<const N: usize> Default for Packet<N> {
    fn default() -> Self {
        Self([0.0; N])
    }
}

impl<const N: usize> From<[Float; N]> for Packet<N> {
    fn from(lanes: [Float; N]) -> Self {
        Self(lanes)
    }
}

impl<const N: usize> Index<usize> for Packet<N> {
    type Output = Float;

    fn index(&self, lane: usize) -> &Self::Output {
        &self.0[lane]
    }
}

impl<const N: usize> IndexMut<usize> for Packet<N> {
    fn index_mut(&mut self, lane: usize) -> &mut Self::Output {
        &mut self.0[lane]
    }
}

impl<const N: usize> fmt::Display for Packet<N> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Implements a lane-wise arithmetic operator and its assigning form.
macro_rules! packet_binop {
    ($tr: ident, $func: ident, $tr_assign: ident, $func_assign: ident, $op: tt) => {
        impl<const N: usize> $tr for Packet<N> {
            type Output = Self;

            #[inline(always)]
            fn $func(self, other: Self) -> Self::Output {
                self.zip_map(other, |a, b| a $op b)
            }
        }

        impl<const N: usize> $tr_assign for Packet<N> {
            #[inline(always)]
            fn $func_assign(&mut self, other: Self) {
                *self = *self $op other;
            }
        }
    };
}

packet_binop!(Add, add, AddAssign, add_assign, +);
packet_binop!(Sub, sub, SubAssign, sub_assign, -);
packet_binop!(Mul, mul, MulAssign, mul_assign, *);
packet_binop!(Div, div, DivAssign, div_assign, /);

impl<const N: usize> Neg for Packet<N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}

impl<const N: usize> Real for Packet<N> {
    type Mask = LaneMask<N>;

    const LANES: usize = N;
    const PREFIX: &'static str = "packet";

    #[inline(always)]
    fn splat(v: Float) -> Self {
        Self([v; N])
    }

    #[inline(always)]
    fn select(mask: LaneMask<N>, a: Self, b: Self) -> Self {
        Self::from_fn(|i| if mask.0[i] { a.0[i] } else { b.0[i] })
    }

    fn sqrt(self) -> Self {
        self.map(Float::sqrt)
    }

    fn cbrt(self) -> Self {
        self.map(Float::cbrt)
    }

    fn sin_cos(self) -> (Self, Self) {
        (self.map(Float::sin), self.map(Float::cos))
    }

    fn recip(self) -> Self {
        self.map(|a| 1.0 / a)
    }

    fn abs(self) -> Self {
        self.map(Float::abs)
    }

    fn min(self, other: Self) -> Self {
        self.zip_map(other, Float::min)
    }

    fn max(self, other: Self) -> Self {
        self.zip_map(other, Float::max)
    }

    fn copysign(self, sign: Self) -> Self {
        self.zip_map(sign, Float::copysign)
    }

    fn lt(self, other: Self) -> LaneMask<N> {
        self.compare(other, |a, b| a < b)
    }

    fn le(self, other: Self) -> LaneMask<N> {
        self.compare(other, |a, b| a <= b)
    }

    fn gt(self, other: Self) -> LaneMask<N> {
        self.compare(other, |a, b| a > b)
    }

    fn ge(self, other: Self) -> LaneMask<N> {
        self.compare(other, |a, b| a >= b)
    }

    fn is_nan(self) -> LaneMask<N> {
        LaneMask::from_fn(|i| self.0[i].is_nan())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
