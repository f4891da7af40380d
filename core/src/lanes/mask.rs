//! Active-lane masks

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Boolean vector marking which lanes of a computation hold live work.
pub trait Mask:
    Copy
    + Clone
    + fmt::Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Number of lanes.
    const LANES: usize;

    /// Returns a mask with every lane set to `v`.
    ///
    /// * `v` - The lane value.
    fn splat(v: bool) -> Self;

    /// Returns `true` if every lane is set.
    fn all(self) -> bool;

    /// Returns `true` if at least one lane is set.
    fn any(self) -> bool;

    /// Returns `true` if no lane is set.
    fn none(self) -> bool {
        !self.any()
    }

    /// Returns the number of set lanes.
    fn count(self) -> usize;
}

impl Mask for bool {
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(v: bool) -> Self {
        v
    }

    #[inline(always)]
    fn all(self) -> bool {
        self
    }

    #[inline(always)]
    fn any(self) -> bool {
        self
    }

    #[inline(always)]
    fn count(self) -> usize {
        self as usize
    }
}

/// Mask for `N` packed lanes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LaneMask<const N: usize>(pub [bool; N]);

impl<const N: usize> LaneMask<N> {
    /// Build a mask by evaluating `f` for every lane index.
    ///
    /// * `f` - Function returning the value of a lane.
    pub fn from_fn<F: FnMut(usize) -> bool>(f: F) -> Self {
        Self(std::array::from_fn(f))
    }

    /// Returns the value of a single lane.
    ///
    /// * `lane` - Lane index.
    #[inline(always)]
    pub fn get(&self, lane: usize) -> bool {
        self.0[lane]
    }
}

impl<const N: usize> Default for LaneMask<N> {
    /// Returns a fully active mask.
    fn default() -> Self {
        Self([true; N])
    }
}

impl<const N: usize> Mask for LaneMask<N> {
    const LANES: usize = N;

    #[inline(always)]
    fn splat(v: bool) -> Self {
        Self([v; N])
    }

    fn all(self) -> bool {
        self.0.iter().all(|&b| b)
    }

    fn any(self) -> bool {
        self.0.iter().any(|&b| b)
    }

    fn count(self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }
}

/// Implements a lane-wise binary operator for `LaneMask`.
macro_rules! lane_mask_binop {
    ($tr: ident, $func: ident, $op: tt) => {
        impl<const N: usize> $tr for LaneMask<N> {
            type Output = Self;

            fn $func(self, other: Self) -> Self::Output {
                Self::from_fn(|i| self.0[i] $op other.0[i])
            }
        }
    };
}

lane_mask_binop!(BitAnd, bitand, &);
lane_mask_binop!(BitOr, bitor, |);
lane_mask_binop!(BitXor, bitxor, ^);

impl<const N: usize> Not for LaneMask<N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_fn(|i| !self.0[i])
    }
}

impl<const N: usize> From<[bool; N]> for LaneMask<N> {
    fn from(lanes: [bool; N]) -> Self {
        Self(lanes)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
