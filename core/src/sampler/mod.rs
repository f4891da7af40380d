//! Sampler

mod independent;

use crate::geometry::*;
use crate::lanes::*;
use crate::pbrt::*;

// Re-export
pub use independent::*;

/// Source of uniform random numbers. Samplers are owned by a single thread
/// or task; phase functions only borrow them through a context.
pub trait Sampler {
    /// Generates a new instance of an initial `Sampler` for use by a rendering thread.
    ///
    /// * `seed` - The seed for the random number generator (if any).
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler>;

    /// Returns the sample value for the next dimension of the current sample vector.
    fn get_1d(&mut self) -> Float;

    /// Returns the sample value for the next two dimensions of the current sample vector.
    fn get_2d(&mut self) -> Point2f;
}

/// Returns a packet whose lanes are filled from consecutive 1D samples.
///
/// * `sampler` - The sampler.
pub fn get_1d_packet<T: Real + Gather<Lane = Float>>(sampler: &mut dyn Sampler) -> T {
    let mut v = T::zeros();
    for lane in 0..T::LANES {
        v.insert(lane, sampler.get_1d());
    }
    v
}

/// Returns a packed 2D sample whose lanes are filled from consecutive 2D
/// samples.
///
/// * `sampler` - The sampler.
pub fn get_2d_packet<T: Real + Gather<Lane = Float>>(sampler: &mut dyn Sampler) -> Point2<T> {
    let mut p = Point2::<T>::default();
    for lane in 0..T::LANES {
        p.insert(lane, sampler.get_2d());
    }
    p
}
