//! Rayleigh Phase Function

use pbrt_core::geometry::*;
use pbrt_core::interaction::*;
use pbrt_core::lanes::*;
use pbrt_core::medium::*;
use pbrt_core::paramset::*;
use pbrt_core::pbrt::*;
use pbrt_core::spectrum::*;
use std::convert::TryFrom;
use std::fmt;
use std::marker::PhantomData;

lazy_static! {
    /// Emits the polarization warning the first time it is dereferenced.
    static ref POLARIZED_FALLBACK: () = warn!(
        "Polarized version of Rayleigh phase function not implemented, falling back to scalar version"
    );
}

/// Scattering by particles much smaller than the wavelength of light, e.g.
/// molecules in the atmosphere. Polarization effects are ignored.
pub struct RayleighPhaseFunction<V: Variant> {
    base: PhaseFunctionBase,
    _variant: PhantomData<V>,
}

impl<V: Variant> RayleighPhaseFunction<V> {
    /// Create a new `RayleighPhaseFunction`.
    ///
    /// * `id` - Identifier.
    pub fn new(id: &str) -> Self {
        let mut base = PhaseFunctionBase::new(id);
        Self::init(&mut base);
        Self {
            base,
            _variant: PhantomData,
        }
    }

    fn init(base: &mut PhaseFunctionBase) {
        if V::Spectrum::IS_POLARIZED {
            lazy_static::initialize(&POLARIZED_FALLBACK);
        }
        base.add_component(PhaseFunctionFlags::ANISOTROPIC);
    }
}

impl<V: Variant> TryFrom<&ParamSet> for RayleighPhaseFunction<V> {
    type Error = PhaseFunctionError;

    /// Create a `RayleighPhaseFunction` from given parameter set. The model
    /// has no parameters besides `id`.
    ///
    /// * `params` - Parameter set.
    fn try_from(params: &ParamSet) -> Result<Self, Self::Error> {
        let mut base = PhaseFunctionBase::from(params);
        Self::init(&mut base);
        Ok(Self {
            base,
            _variant: PhantomData,
        })
    }
}

/// Returns the Rayleigh phase function value for the cosine of the angle
/// between two directions.
///
/// * `cos_theta` - Cosine of the angle.
#[inline]
pub fn eval_rayleigh<T: Real>(cos_theta: T) -> T {
    T::splat(3.0 / 16.0 * INV_PI) * (T::ones() + cos_theta.sqr())
}

/// Inverts the CDF of the Rayleigh phase function in closed form by solving
/// the cubic `cos^3 + 3 cos = z` with Cardano's formula. Returns the sampled
/// local direction and its cosine.
///
/// * `u` - Sample value in [0, 1)^2.
pub fn sample_rayleigh<T: Real>(u: &Point2<T>) -> (Vector3<T>, T) {
    let two = T::splat(2.0);
    let z = two * (two * u.x - T::ones());
    let tmp = (z.sqr() + T::ones()).sqrt();
    let a = (z + tmp).cbrt();
    let b = (z - tmp).cbrt();
    let cos_theta = a + b;
    let sin_theta = (T::ones() - cos_theta.sqr()).safe_sqrt();
    let phi = T::splat(TWO_PI) * u.y;
    (spherical_direction(sin_theta, cos_theta, phi), cos_theta)
}

impl<V: Variant> PhaseFunction<V> for RayleighPhaseFunction<V> {
    fn base(&self) -> &PhaseFunctionBase {
        &self.base
    }

    /// Samples an outgoing direction by inverting the CDF exactly.
    ///
    /// * `_ctx`     - Sampling context (unused).
    /// * `mi`       - Medium interaction.
    /// * `_sample1` - Component sample (unused).
    /// * `sample2`  - Direction sample.
    /// * `active`   - Active lanes.
    fn sample(
        &self,
        _ctx: &PhaseFunctionContext,
        mi: &MediumInteraction<VFloat<V>>,
        _sample1: VFloat<V>,
        sample2: &Point2<VFloat<V>>,
        active: VMask<V>,
    ) -> Result<(Vector3<VFloat<V>>, VFloat<V>), PhaseFunctionError> {
        let (local, cos_theta) = sample_rayleigh(sample2);
        let wo = mi.to_world(&local);
        let pdf = eval_rayleigh(-cos_theta);
        Ok((
            Vector3::select(active, &wo, &Vector3::zero()),
            <VFloat<V> as Real>::select(active, pdf, <VFloat<V> as Real>::zeros()),
        ))
    }

    /// Returns the phase function value for the pair `mi.wi` and `wo`.
    ///
    /// * `_ctx`   - Sampling context (unused).
    /// * `mi`     - Medium interaction.
    /// * `wo`     - Outgoing direction.
    /// * `active` - Active lanes.
    fn eval(
        &self,
        _ctx: &PhaseFunctionContext,
        mi: &MediumInteraction<VFloat<V>>,
        wo: &Vector3<VFloat<V>>,
        active: VMask<V>,
    ) -> Result<VFloat<V>, PhaseFunctionError> {
        let value = eval_rayleigh(wo.dot(&mi.wi));
        Ok(<VFloat<V> as Real>::select(active, value, <VFloat<V> as Real>::zeros()))
    }

    fn human_readable_name(&self) -> String {
        String::from("RayleighPhaseFunction[]")
    }
}

impl<V: Variant> fmt::Display for RayleighPhaseFunction<V> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.human_readable_name())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
