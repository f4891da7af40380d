//! 3-D points

use super::Vector3;
use crate::lanes::*;
use crate::pbrt::*;
use std::fmt;
use std::ops::{Add, Sub};

/// A 3-D point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D point containing `Float` values.
pub type Point3f = Point3<Float>;

impl<T> Point3<T> {
    /// Creates a new 3-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Real> Point3<T> {
    /// Returns the origin.
    pub fn zero() -> Self {
        Self::new(T::zeros(), T::zeros(), T::zeros())
    }
}

impl<T: Real> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    /// Offsets the point by the given vector.
    ///
    /// * `v` - The offset.
    fn add(self, v: Vector3<T>) -> Self::Output {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: Real> Sub for Point3<T> {
    type Output = Vector3<T>;

    /// Returns the vector between two points.
    ///
    /// * `other` - The other point.
    fn sub(self, other: Self) -> Self::Output {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Gather> Gather for Point3<T> {
    type Lane = Point3<T::Lane>;

    fn extract(&self, lane: usize) -> Self::Lane {
        Point3::new(self.x.extract(lane), self.y.extract(lane), self.z.extract(lane))
    }

    fn insert(&mut self, lane: usize, value: Self::Lane) {
        self.x.insert(lane, value.x);
        self.y.insert(lane, value.y);
        self.z.insert(lane, value.z);
    }
}

impl<T: fmt::Display> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_difference() {
        let p = Point3f::new(1.0, 2.0, 3.0);
        let q = p + Vector3::new(1.0, -1.0, 0.5);
        assert_eq!(q, Point3f::new(2.0, 1.0, 3.5));
        assert_eq!(q - p, Vector3::new(1.0, -1.0, 0.5));
    }
}
