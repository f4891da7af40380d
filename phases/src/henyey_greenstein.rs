//! Henyey-Greenstein

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

/// Henyey-Greenstein phase function.
pub struct HenyeyGreenstein<V: Variant> {
    base: PhaseFunctionBase,

    /// The asymmetry parameter. It is the average value of the product of the
    /// phase function being approximated and the cosine of the angle between two
    /// directions. Isotropic phase functions use g = 0.
    g: Float,

    _variant: PhantomData<V>,
}

impl<V: Variant> HenyeyGreenstein<V> {
    /// Returns a new `HenyeyGreenstein`.
    ///
    /// * `id` - Identifier.
    /// * `g`  - The asymmetry parameter in (-1, 1).
    pub fn new(id: &str, g: Float) -> Result<Self, PhaseFunctionError> {
        Self::from_base(PhaseFunctionBase::new(id), g)
    }

    fn from_base(mut base: PhaseFunctionBase, g: Float) -> Result<Self, PhaseFunctionError> {
        if !(g > -1.0 && g < 1.0) {
            return Err(PhaseFunctionError::InvalidParameter {
                name: String::from("g"),
                reason: format!("asymmetry parameter {} must lie in the open interval (-1, 1)", g),
            });
        }
        base.add_component(PhaseFunctionFlags::ANISOTROPIC);
        Ok(Self {
            base,
            g,
            _variant: PhantomData,
        })
    }

    /// Returns the asymmetry parameter.
    pub fn g(&self) -> Float {
        self.g
    }
}

impl<V: Variant> TryFrom<&ParamSet> for HenyeyGreenstein<V> {
    type Error = PhaseFunctionError;

    /// Create a `HenyeyGreenstein` from given parameter set.
    ///
    /// * `params` - Parameter set. `g` defaults to 0.8.
    fn try_from(params: &ParamSet) -> Result<Self, Self::Error> {
        let g = params.find_one_float("g", 0.8);
        Self::from_base(PhaseFunctionBase::from(params), g)
    }
}

/// Computes the Henyey-Greenstein phase function which can be used by other
/// phase function
///
/// * `cos_theta` - Angle between two direction vectors.
/// * `g`         - Asymmetry parametery.
#[inline]
pub fn phase_hg<T: Real>(cos_theta: T, g: Float) -> T {
    let denom = T::splat(1.0 + g * g) + T::splat(2.0 * g) * cos_theta;
    T::splat(INV_FOUR_PI * (1.0 - g * g)) / (denom * denom.safe_sqrt())
}

/// Samples the cosine of the scattering angle and returns the local
/// direction around the z-axis together with that cosine.
///
/// * `u` - Sample value in [0, 1)^2.
/// * `g` - Asymmetry parameter.
pub fn sample_hg<T: Real>(u: &Point2<T>, g: Float) -> (Vector3<T>, T) {
    // Compute $\cos \theta$ for Henyey--Greenstein sample
    let cos_theta = if abs(g) < 1e-3 {
        T::ones() - T::splat(2.0) * u.x
    } else {
        let sqr_term = T::splat(1.0 - g * g) / (T::splat(1.0 + g) - T::splat(2.0 * g) * u.x);
        -(T::splat(1.0 + g * g) - sqr_term * sqr_term) / T::splat(2.0 * g)
    };

    // Compute direction _wo_ for Henyey--Greenstein sample
    let sin_theta = (T::ones() - cos_theta * cos_theta).safe_sqrt();
    let phi = T::splat(TWO_PI) * u.y;
    (spherical_direction(sin_theta, cos_theta, phi), cos_theta)
}

impl<V: Variant> PhaseFunction<V> for HenyeyGreenstein<V> {
    fn base(&self) -> &PhaseFunctionBase {
        &self.base
    }

    /// Returns the sampled outgoing direction and its density given a sample
    /// value in [0, 1)^2.
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
        let (local, cos_theta) = sample_hg(sample2, self.g);
        let wo = mi.to_world(&local);
        let pdf = phase_hg(cos_theta, self.g);

        Ok((
            Vector3::select(active, &wo, &Vector3::zero()),
            <VFloat<V> as Real>::select(active, pdf, <VFloat<V> as Real>::zeros()),
        ))
    }

    /// Returns the value of the phase function for the given pair of directions.
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
        let value = phase_hg(wo.dot(&mi.wi), self.g);
        Ok(<VFloat<V> as Real>::select(active, value, <VFloat<V> as Real>::zeros()))
    }

    fn human_readable_name(&self) -> String {
        format!("HGPhaseFunction[g = {}]", self.g)
    }
}

impl<V: Variant> fmt::Display for HenyeyGreenstein<V> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use pbrt_core::sampler::*;
    use float_cmp::*;
    use proptest::prelude::*;

    fn interaction(wi: Vector3f) -> MediumInteractionf {
        MediumInteractionf::new(Point3f::zero(), wi, 0.0)
    }

    #[test]
    fn rejects_out_of_range_g() {
        for g in [1.0, -1.0, 1.5, Float::NAN] {
            match HenyeyGreenstein::<ScalarRgb>::new("", g) {
                Err(PhaseFunctionError::InvalidParameter { name, .. }) => assert_eq!(name, "g"),
                _ => panic!("g = {} accepted", g),
            }
        }
    }

    #[test]
    fn paramset_default_and_override() {
        let params = ParamSet::new();
        let pf = HenyeyGreenstein::<ScalarRgb>::try_from(&params).unwrap();
        assert_eq!(pf.g(), 0.8);
        assert_eq!(pf.flags(true), PhaseFunctionFlags::ANISOTROPIC);

        let mut params = ParamSet::new();
        params.add_float("g", &[-0.3]);
        let pf = HenyeyGreenstein::<ScalarRgb>::try_from(&params).unwrap();
        assert_eq!(pf.g(), -0.3);
        assert_eq!(pf.to_string(), "HGPhaseFunction[g = -0.3]");
        assert!(params.unused().is_empty());
    }

    #[test]
    fn zero_g_is_isotropic() {
        let pf = HenyeyGreenstein::<ScalarMono>::new("", 0.0).unwrap();
        let ctx = PhaseFunctionContext::default();
        let mi = interaction(Vector3f::new(0.0, 0.0, 1.0));
        let value = pf.eval(&ctx, &mi, &Vector3f::new(0.0, 1.0, 0.0), true).unwrap();
        assert!(approx_eq!(f32, value, INV_FOUR_PI, epsilon = 1e-7));
    }

    #[test]
    fn normalized() {
        for g in [-0.9, -0.5, 0.0, 0.3, 0.9] {
            let pf = HenyeyGreenstein::<ScalarRgb>::new("", g).unwrap();
            let mi = interaction(Vector3f::new(0.0, 0.0, -1.0));
            let total = integrate_over_sphere(&pf, &mi, 4000, 4).unwrap();
            assert!(approx_eq!(f64, total, 1.0, epsilon = 1e-3), "g = {}: {}", g, total);
        }
    }

    #[test]
    fn sampling_matches_eval() {
        for g in [-0.7, 0.0005, 0.5] {
            let pf = HenyeyGreenstein::<ScalarSpectral>::new("", g).unwrap();
            let mi = interaction(Vector3f::new(0.6, 0.0, 0.8));
            let mut sampler = IndependentSampler::new(Some(1));

            let report = sample_consistency(&pf, &mi, &mut sampler, 20_000).unwrap();
            assert_eq!(report.non_unit, 0);
            assert!(report.max_relative_error < 1e-3, "g = {}: {:?}", g, report);
            assert!((report.mean_cosine + g as f64).abs() < 0.02, "g = {}: {:?}", g, report);

            let chi2 = chi2_cos_theta(&pf, &mi, &mut sampler, 100_000, 20).unwrap();
            assert!(chi2.passes(), "g = {}: {:?}", g, chi2);
        }
    }

    #[test]
    fn packet_lanes_match_scalar() {
        let pf = HenyeyGreenstein::<PacketRgb<4>>::new("", 0.6).unwrap();
        let scalar = HenyeyGreenstein::<ScalarRgb>::new("", 0.6).unwrap();
        let ctx = PhaseFunctionContext::default();
        let wi = Vector3::new(
            Packet([0.0, 0.0, 0.6, Float::NAN]),
            Packet([0.0, 1.0, 0.0, Float::NAN]),
            Packet([1.0, 0.0, 0.8, Float::NAN]),
        );
        let mi = MediumInteraction::new(Point3::zero(), wi, Packet::zeros());
        let u = Point2::new(Packet([0.1, 0.5, 0.9, Float::NAN]), Packet([0.3, 0.7, 0.2, Float::NAN]));
        let active = LaneMask::from([true, true, true, false]);

        let (wo, pdf) = pf.sample(&ctx, &mi, Packet::zeros(), &u, active).unwrap();
        let value = pf.eval(&ctx, &mi, &wo, active).unwrap();
        assert_eq!(pdf.extract(3), 0.0);
        assert_eq!(value.extract(3), 0.0);
        assert_eq!(wo.extract(3), Vector3f::ZERO);

        for lane in 0..3 {
            let (w, p) = scalar
                .sample(&ctx, &mi.extract(lane), 0.0, &u.extract(lane), true)
                .unwrap();
            assert_eq!(pdf.extract(lane).to_bits(), p.to_bits());
            assert_eq!(wo.extract(lane), w);
            let v = scalar.eval(&ctx, &mi.extract(lane), &w, true).unwrap();
            assert_eq!(value.extract(lane).to_bits(), v.to_bits());
        }
    }

    #[test]
    fn simd_lanes_match_scalar() {
        let pf = HenyeyGreenstein::<Var<Wide4, Rgb>>::new("", -0.4).unwrap();
        let scalar = HenyeyGreenstein::<ScalarRgb>::new("", -0.4).unwrap();
        let ctx = PhaseFunctionContext::default();
        let wi = Vector3::new(
            Wide4::from([0.0, 0.0, 0.6, Float::NAN]),
            Wide4::from([0.0, -1.0, 0.0, Float::NAN]),
            Wide4::from([1.0, 0.0, -0.8, Float::NAN]),
        );
        let mi = MediumInteraction::new(Point3::zero(), wi, Wide4::zeros());
        let u = Point2::new(
            Wide4::from([0.2, 0.5, 0.95, Float::NAN]),
            Wide4::from([0.6, 0.1, 0.4, Float::NAN]),
        );
        let active = LaneMask::from([true, true, true, false]);

        let (wo, pdf) = pf.sample(&ctx, &mi, Wide4::zeros(), &u, active).unwrap();
        let value = pf.eval(&ctx, &mi, &wo, active).unwrap();
        assert_eq!(pdf.extract(3), 0.0);
        assert_eq!(value.extract(3), 0.0);
        assert_eq!(wo.extract(3), Vector3f::ZERO);

        for lane in 0..3 {
            let (w, p) = scalar
                .sample(&ctx, &mi.extract(lane), 0.0, &u.extract(lane), true)
                .unwrap();
            assert!(approx_eq!(f32, pdf.extract(lane), p, epsilon = 1e-5));
            let d = wo.extract(lane) - w;
            assert!(d.length() < 1e-5, "lane {}: {:?}", lane, d);
        }
    }

    proptest! {
        #[test]
        fn reciprocal(g in -0.95..0.95f32, a in crate::testing::unit_vector(), b in crate::testing::unit_vector()) {
            let pf = HenyeyGreenstein::<ScalarRgb>::new("", g).unwrap();
            let ctx = PhaseFunctionContext::default();
            let ab = pf.eval(&ctx, &interaction(a), &b, true).unwrap();
            let ba = pf.eval(&ctx, &interaction(b), &a, true).unwrap();
            prop_assert!(approx_eq!(f32, ab, ba, ulps = 4));
        }

        #[test]
        fn sample_density_equals_eval(g in -0.9..0.9f32, u in 0.0..1.0f32, v in 0.0..1.0f32, wi in crate::testing::unit_vector()) {
            let pf = HenyeyGreenstein::<ScalarRgb>::new("", g).unwrap();
            let ctx = PhaseFunctionContext::default();
            let mi = interaction(wi);
            let (wo, pdf) = pf.sample(&ctx, &mi, 0.0, &Point2f::new(u, v), true).unwrap();
            let value = pf.eval(&ctx, &mi, &wo, true).unwrap();
            prop_assert!(approx_eq!(f32, pdf, value, epsilon = 1e-2 * pdf.max(1.0)));
        }
    }
}
