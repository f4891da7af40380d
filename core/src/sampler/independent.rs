//! Independent Sampler.

use super::Sampler;
use crate::geometry::*;
use crate::paramset::*;
use crate::pbrt::*;
use crate::rng::*;

/// Implements a sampler that uses a PRNG to generate independent uniformly
/// random samples.
#[derive(Clone, Debug, Default)]
pub struct IndependentSampler {
    /// The random number generator.
    pub rng: RNG,
}

impl IndependentSampler {
    /// Create a new `IndependentSampler`.
    ///
    /// * `seed` - Optional seed for the random number generator.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: match seed {
                Some(s) => RNG::new(s),
                None => RNG::default(),
            },
        }
    }
}

impl Sampler for IndependentSampler {
    /// Generates a new instance of an initial `Sampler` for use by a rendering thread.
    ///
    /// * `seed` - The seed for the random number generator.
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler> {
        Box::new(Self::new(Some(seed)))
    }

    /// Returns the sample value for the next dimension of the current sample vector.
    fn get_1d(&mut self) -> Float {
        self.rng.uniform_float()
    }

    /// Returns the sample value for the next two dimensions of the current sample vector.
    fn get_2d(&mut self) -> Point2f {
        let x = self.rng.uniform_float();
        let y = self.rng.uniform_float();
        Point2f::new(x, y)
    }
}

impl From<&ParamSet> for IndependentSampler {
    /// Create an `IndependentSampler` from given parameter set.
    ///
    /// * `params` - Parameter set. `seed` selects the random sequence.
    fn from(params: &ParamSet) -> Self {
        let seed = params.find_one_int("seed", 0);
        Self::new(Some(seed.max(0) as u64))
    }
}
