//! Isotropic Phase Function

use pbrt_core::geometry::*;
use pbrt_core::interaction::*;
use pbrt_core::lanes::*;
use pbrt_core::medium::*;
use pbrt_core::paramset::*;
use pbrt_core::sampling::*;
use pbrt_core::spectrum::*;
use std::convert::TryFrom;
use std::fmt;
use std::marker::PhantomData;

/// Scatters light uniformly in all directions.
pub struct IsotropicPhaseFunction<V: Variant> {
    base: PhaseFunctionBase,
    _variant: PhantomData<V>,
}

impl<V: Variant> IsotropicPhaseFunction<V> {
    /// Create a new `IsotropicPhaseFunction`.
    ///
    /// * `id` - Identifier.
    pub fn new(id: &str) -> Self {
        Self::from_base(PhaseFunctionBase::new(id))
    }

    fn from_base(mut base: PhaseFunctionBase) -> Self {
        base.add_component(PhaseFunctionFlags::ISOTROPIC);
        Self {
            base,
            _variant: PhantomData,
        }
    }
}

impl<V: Variant> TryFrom<&ParamSet> for IsotropicPhaseFunction<V> {
    type Error = PhaseFunctionError;

    /// Create an `IsotropicPhaseFunction` from given parameter set.
    ///
    /// * `params` - Parameter set.
    fn try_from(params: &ParamSet) -> Result<Self, Self::Error> {
        Ok(Self::from_base(PhaseFunctionBase::from(params)))
    }
}

impl<V: Variant> PhaseFunction<V> for IsotropicPhaseFunction<V> {
    fn base(&self) -> &PhaseFunctionBase {
        &self.base
    }

    fn sample(
        &self,
        _ctx: &PhaseFunctionContext,
        _mi: &MediumInteraction<VFloat<V>>,
        _sample1: VFloat<V>,
        sample2: &Point2<VFloat<V>>,
        active: VMask<V>,
    ) -> Result<(Vector3<VFloat<V>>, VFloat<V>), PhaseFunctionError> {
        let wo = uniform_sample_sphere(sample2);
        let pdf = uniform_sphere_pdf::<VFloat<V>>();
        Ok((
            Vector3::select(active, &wo, &Vector3::zero()),
            <VFloat<V> as Real>::select(active, pdf, <VFloat<V> as Real>::zeros()),
        ))
    }

    fn eval(
        &self,
        _ctx: &PhaseFunctionContext,
        _mi: &MediumInteraction<VFloat<V>>,
        _wo: &Vector3<VFloat<V>>,
        active: VMask<V>,
    ) -> Result<VFloat<V>, PhaseFunctionError> {
        Ok(<VFloat<V> as Real>::select(
            active,
            uniform_sphere_pdf(),
            <VFloat<V> as Real>::zeros(),
        ))
    }

    fn human_readable_name(&self) -> String {
        String::from("IsotropicPhaseFunction[]")
    }
}

impl<V: Variant> fmt::Display for IsotropicPhaseFunction<V> {
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
