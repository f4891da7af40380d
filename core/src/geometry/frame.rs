//! Orthonormal frames

use super::Vector3;
use crate::lanes::*;
use std::fmt;

/// Orthonormal basis `(s, t, n)` used to move directions between a local
/// coordinate system (where `n` is the z-axis) and world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame<T> {
    /// First tangent.
    pub s: Vector3<T>,

    /// Second tangent.
    pub t: Vector3<T>,

    /// Normal (local z-axis).
    pub n: Vector3<T>,
}

impl<T: Real> Frame<T> {
    /// Creates a frame from three orthonormal vectors.
    ///
    /// * `s` - First tangent.
    /// * `t` - Second tangent.
    /// * `n` - Normal.
    pub fn new(s: Vector3<T>, t: Vector3<T>, n: Vector3<T>) -> Self {
        Self { s, t, n }
    }

    /// Builds a frame around a unit normal.
    ///
    /// * `n` - Unit normal which becomes the local z-axis.
    pub fn from_normal(n: &Vector3<T>) -> Self {
        let (s, t) = coordinate_system(n);
        Self { s, t, n: *n }
    }

    /// Converts a world space direction into local coordinates.
    ///
    /// * `v` - World space direction.
    pub fn to_local(&self, v: &Vector3<T>) -> Vector3<T> {
        Vector3::new(v.dot(&self.s), v.dot(&self.t), v.dot(&self.n))
    }

    /// Converts a local direction into world space.
    ///
    /// * `v` - Local direction.
    pub fn to_world(&self, v: &Vector3<T>) -> Vector3<T> {
        self.s * v.x + self.t * v.y + self.n * v.z
    }
}

impl<T: Gather> Gather for Frame<T> {
    type Lane = Frame<T::Lane>;

    fn extract(&self, lane: usize) -> Self::Lane {
        Frame {
            s: self.s.extract(lane),
            t: self.t.extract(lane),
            n: self.n.extract(lane),
        }
    }

    fn insert(&mut self, lane: usize, value: Self::Lane) {
        self.s.insert(lane, value.s);
        self.t.insert(lane, value.t);
        self.n.insert(lane, value.n);
    }
}

impl<T: fmt::Display> fmt::Display for Frame<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame[s={}, t={}, n={}]", self.s, self.t, self.n)
    }
}

/// Construct a local coordinate system given only a single unit vector. The
/// construction has no branches, so every lane of a packet follows the same
/// arithmetic (Duff et al. 2017).
///
/// * `v1` - The unit vector.
#[inline]
pub fn coordinate_system<T: Real>(v1: &Vector3<T>) -> (Vector3<T>, Vector3<T>) {
    let one = T::ones();
    let sign = one.copysign(v1.z);
    let a = -(sign + v1.z).recip();
    let b = v1.x * v1.y * a;
    let v2 = Vector3::new(one + sign * v1.x.sqr() * a, sign * b, -sign * v1.x);
    let v3 = Vector3::new(b, sign + v1.y.sqr() * a, -v1.y);
    (v2, v3)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
