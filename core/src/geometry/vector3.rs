//! 3-D vectors

use crate::lanes::*;
use crate::pbrt::*;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3-D vector whose coordinates are scalars or packets.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D vector containing `Float` values.
pub type Vector3f = Vector3<Float>;

impl Vector3f {
    /// Zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
}

impl<T> Vector3<T> {
    /// Creates a new 3-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Real> Vector3<T> {
    /// Returns a vector with every coordinate set to `v`.
    ///
    /// * `v` - The value.
    pub fn splat(v: Float) -> Self {
        Self::new(T::splat(v), T::splat(v), T::splat(v))
    }

    /// Creates a new 3-D zero vector.
    pub fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the absolute value of the dot product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn abs_dot(&self, other: &Self) -> T {
        self.dot(other).abs()
    }

    /// Returns the cross product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            (self.y * other.z) - (self.z * other.y),
            (self.z * other.x) - (self.x * other.z),
            (self.x * other.y) - (self.y * other.x),
        )
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns the vector's length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector.
    pub fn normalize(&self) -> Self {
        *self * self.length().recip()
    }

    /// Returns a new vector containing absolute values of the components.
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns true if any coordinate is NaN in the corresponding lane.
    pub fn has_nans(&self) -> T::Mask {
        self.x.is_nan() | self.y.is_nan() | self.z.is_nan()
    }

    /// Lane-wise blend of two vectors.
    ///
    /// * `mask` - Selects lanes from `a` where set and from `b` otherwise.
    /// * `a`    - Vector for set lanes.
    /// * `b`    - Vector for cleared lanes.
    pub fn select(mask: T::Mask, a: &Self, b: &Self) -> Self {
        Self::new(
            T::select(mask, a.x, b.x),
            T::select(mask, a.y, b.y),
            T::select(mask, a.z, b.z),
        )
    }
}

impl<T: Real> Add for Vector3<T> {
    type Output = Self;

    /// Adds the given vector and returns the result.
    ///
    /// * `other` - The vector to add.
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Real> AddAssign for Vector3<T> {
    /// Performs the `+=` operation.
    ///
    /// * `other` - The vector to add.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Real> Sub for Vector3<T> {
    type Output = Self;

    /// Subtracts the given vector and returns the result.
    ///
    /// * `other` - The vector to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Real> SubAssign for Vector3<T> {
    /// Performs the `-=` operation.
    ///
    /// * `other` - The vector to subtract.
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: Real> Mul<T> for Vector3<T> {
    type Output = Self;

    /// Scale the vector.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::new(self.x * f, self.y * f, self.z * f)
    }
}

impl Mul<Vector3f> for Float {
    type Output = Vector3f;

    /// Scale the vector.
    ///
    /// * `v` - The vector.
    fn mul(self, v: Vector3f) -> Self::Output {
        v * self
    }
}

impl<T: Real> MulAssign<T> for Vector3<T> {
    /// Scale the vector by a factor.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: T) {
        *self = *self * f;
    }
}

impl<T: Real> Div<T> for Vector3<T> {
    type Output = Self;

    /// Scale the vector by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: T) -> Self::Output {
        self * f.recip()
    }
}

impl<T: Real> Neg for Vector3<T> {
    type Output = Self;

    /// Flip the vector's direction (scale by -1).
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    /// Index the vector by an axis to get the immutable coordinate axis value.
    ///
    /// * `axis` - A 3-D coordinate axis (0, 1 or 2).
    fn index(&self, axis: usize) -> &Self::Output {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid axis for Vector3 index"),
        }
    }
}

impl<T: Gather> Gather for Vector3<T> {
    type Lane = Vector3<T::Lane>;

    fn extract(&self, lane: usize) -> Self::Lane {
        Vector3::new(self.x.extract(lane), self.y.extract(lane), self.z.extract(lane))
    }

    fn insert(&mut self, lane: usize, value: Self::Lane) {
        self.x.insert(lane, value.x);
        self.y.insert(lane, value.y);
        self.z.insert(lane, value.z);
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

/// Returns a direction (x, y, z) for spherical coordinates (θ, Ø) in the
/// local coordinate frame.
///
/// * `sin_theta` - sin(θ).
/// * `cos_theta` - cos(θ).
/// * `phi`       - Ø.
#[inline]
pub fn spherical_direction<T: Real>(sin_theta: T, cos_theta: T, phi: T) -> Vector3<T> {
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vector3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn zero_vector() {
        assert!(Vector3f::new(0.0, 0.0, 0.0) == Vector3::zero());
        assert_eq!(Vector3f::ZERO, Vector3::zero());
    }

    #[test]
    fn has_nans() {
        assert!(!Vector3f::new(0.0, 0.0, 0.0).has_nans());
        assert!(Vector3f::new(Float::NAN, 0.0, 0.0).has_nans());

        let v = Vector3::new(Packet([0.0, Float::NAN]), Packet([0.0, 0.0]), Packet([1.0, 1.0]));
        assert_eq!(v.has_nans(), LaneMask([false, true]));
    }

    #[test]
    fn packet_lanes() {
        let mut v = Vector3::<Packet<2>>::zero();
        v.insert(1, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.extract(0), Vector3f::ZERO);
        assert_eq!(v.extract(1), Vector3::new(1.0, 2.0, 3.0));
    }

    prop_range!(range_f32, f32, -100.0..100.0f32);
    prop_vector3!(vector3_f32, f32, -100.0..100.0f32, -100.0..100.0f32, -100.0..100.0f32);

    proptest! {
        #[test]
        fn length_squared_f32(v in vector3_f32()) {
            prop_assert_eq!(v.length_squared(), v.x * v.x + v.y * v.y + v.z * v.z);
        }

        #[test]
        fn normalize_f32(v in vector3_f32().prop_filter("non-zero", |v| v.length_squared() > 1e-3)) {
            prop_assert!(approx_eq!(f32, v.normalize().length(), 1.0, epsilon = 1e-5));
        }

        #[test]
        fn cross_is_orthogonal(v1 in vector3_f32(), v2 in vector3_f32()) {
            let c = v1.cross(&v2);
            let tol = 1e-3 * (1.0 + v1.length() * v2.length() * (v1.length() + v2.length()));
            prop_assert!(c.dot(&v1).abs() <= tol);
            prop_assert!(c.dot(&v2).abs() <= tol);
        }

        #[test]
        fn mul_f32(v in vector3_f32(), f in range_f32()) {
            let expected = Vector3::new(v.x * f, v.y * f, v.z * f);
            prop_assert_eq!(v * f, expected);
            prop_assert_eq!(f * v, expected);
        }

        #[test]
        fn neg_f32(v in vector3_f32()) {
            prop_assert_eq!(-v, Vector3::new(-v.x, -v.y, -v.z));
            prop_assert_eq!(-(-v), v);
        }

        #[test]
        fn spherical_direction_is_unit(theta in 0.0..PI, phi in 0.0..TWO_PI) {
            let w = spherical_direction(theta.sin(), theta.cos(), phi);
            prop_assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 1e-5));
        }
    }
}
