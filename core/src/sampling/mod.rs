//! Sampling

use crate::geometry::*;
use crate::lanes::*;
use crate::pbrt::*;

/// Uniformly sample a direction from a sphere.
///
/// * `u` - The random sample point.
pub fn uniform_sample_sphere<T: Real>(u: &Point2<T>) -> Vector3<T> {
    let z = T::ones() - u.x * T::splat(2.0);
    let r = (T::ones() - z.sqr()).safe_sqrt();
    let (sin_phi, cos_phi) = (u.y * T::splat(TWO_PI)).sin_cos();
    Vector3::new(r * cos_phi, r * sin_phi, z)
}

/// Returns the PDF for uniformly sampling a direction from a sphere.
#[inline]
pub fn uniform_sphere_pdf<T: Real>() -> T {
    T::splat(INV_FOUR_PI)
}
