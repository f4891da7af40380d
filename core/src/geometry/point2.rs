//! 2-D points

use crate::lanes::*;
use crate::pbrt::*;
use std::fmt;
use std::ops::Index;

/// A 2-D point, used mostly to carry pairs of uniform random numbers.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,
}

/// 2-D point containing `Float` values.
pub type Point2f = Point2<Float>;

impl<T> Point2<T> {
    /// Creates a new 2-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Real> Point2<T> {
    /// Returns a point with both coordinates set to `v`.
    ///
    /// * `v` - The value.
    pub fn splat(v: Float) -> Self {
        Self::new(T::splat(v), T::splat(v))
    }
}

impl<T> Index<usize> for Point2<T> {
    type Output = T;

    /// Index the point by an axis to get the immutable coordinate axis value.
    ///
    /// * `axis` - A 2-D coordinate axis (0 or 1).
    fn index(&self, axis: usize) -> &Self::Output {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Invalid axis for Point2 index"),
        }
    }
}

impl<T: Gather> Gather for Point2<T> {
    type Lane = Point2<T::Lane>;

    fn extract(&self, lane: usize) -> Self::Lane {
        Point2::new(self.x.extract(lane), self.y.extract(lane))
    }

    fn insert(&mut self, lane: usize, value: Self::Lane) {
        self.x.insert(lane, value.x);
        self.y.insert(lane, value.y);
    }
}

impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
