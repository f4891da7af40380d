//! Statistical checks for phase functions
//!
//! These are used by the tests of every model and by the `phase-check`
//! command line tool. They only operate on scalar variants.

use super::*;
use crate::geometry::*;
use crate::interaction::*;
use crate::pbrt::*;
use crate::sampler::*;
use crate::spectrum::*;
use float_cmp::approx_eq;

/// Integrates `eval()` over the unit sphere with a midpoint rule in
/// (cos theta, phi) around `mi.wi`. Properly normalized models return 1.
///
/// * `pf`    - The phase function.
/// * `mi`    - Medium interaction.
/// * `n_cos` - Number of cells along cos theta.
/// * `n_phi` - Number of cells along phi.
pub fn integrate_over_sphere<V: Variant<Float = Float>>(
    pf: &dyn PhaseFunction<V>,
    mi: &MediumInteractionf,
    n_cos: usize,
    n_phi: usize,
) -> Result<f64, PhaseFunctionError> {
    let ctx = PhaseFunctionContext::default();
    let d_cos = 2.0 / n_cos as f64;
    let d_phi = std::f64::consts::TAU / n_phi as f64;

    let mut sum = 0.0_f64;
    for i in 0..n_cos {
        let cos_theta = -1.0 + (i as f64 + 0.5) * d_cos;
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        for j in 0..n_phi {
            let phi = (j as f64 + 0.5) * d_phi;
            let local = spherical_direction(sin_theta as Float, cos_theta as Float, phi as Float);
            let wo = mi.to_world(&local);
            sum += pf.eval(&ctx, mi, &wo, true)? as f64;
        }
    }
    Ok(sum * d_cos * d_phi)
}

/// Summary of comparing sampled densities against `eval()`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ConsistencyReport {
    /// Number of samples drawn.
    pub samples: usize,

    /// Largest relative difference between the sampled density and `eval()`.
    pub max_relative_error: Float,

    /// Average cosine between `mi.wi` and sampled directions.
    pub mean_cosine: f64,

    /// Number of samples whose direction was not unit length.
    pub non_unit: usize,
}

/// Draws samples and checks that each returned density matches `eval()` for
/// the returned direction.
///
/// * `pf`        - The phase function.
/// * `mi`        - Medium interaction.
/// * `sampler`   - Random number source.
/// * `n_samples` - Number of samples to draw.
pub fn sample_consistency<V: Variant<Float = Float>>(
    pf: &dyn PhaseFunction<V>,
    mi: &MediumInteractionf,
    sampler: &mut dyn Sampler,
    n_samples: usize,
) -> Result<ConsistencyReport, PhaseFunctionError> {
    let ctx = PhaseFunctionContext::default();
    let mut report = ConsistencyReport {
        samples: n_samples,
        ..ConsistencyReport::default()
    };

    let mut cos_sum = 0.0_f64;
    for _ in 0..n_samples {
        let sample1 = sampler.get_1d();
        let sample2 = sampler.get_2d();
        let (wo, pdf) = pf.sample(&ctx, mi, sample1, &sample2, true)?;
        let value = pf.eval(&ctx, mi, &wo, true)?;

        let err = abs(pdf - value) / max(value.abs(), 1e-6);
        report.max_relative_error = max(report.max_relative_error, err);
        if !approx_eq!(f32, wo.length(), 1.0, epsilon = 1e-4) {
            report.non_unit += 1;
        }
        cos_sum += wo.dot(&mi.wi) as f64;
    }
    if n_samples > 0 {
        report.mean_cosine = cos_sum / n_samples as f64;
    }
    Ok(report)
}

/// Result of a chi-square goodness of fit test on cos theta.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Chi2Report {
    /// The test statistic.
    pub statistic: f64,

    /// Degrees of freedom.
    pub dof: usize,
}

impl Chi2Report {
    /// Returns the critical value of the statistic for a one sided test at
    /// the standard normal quantile `z`, using the Wilson-Hilferty
    /// approximation.
    ///
    /// * `z` - Standard normal quantile (e.g. 3.09 for a significance of 0.001).
    pub fn critical_value(&self, z: f64) -> f64 {
        let k = self.dof as f64;
        let h = 2.0 / (9.0 * k);
        k * (1.0 - h + z * h.sqrt()).powi(3)
    }

    /// Returns `true` if the hypothesis that samples follow `eval()` is not
    /// rejected at a significance of 0.001.
    pub fn passes(&self) -> bool {
        self.dof > 0 && self.statistic <= self.critical_value(3.09)
    }
}

/// Histograms the cosine between `mi.wi` and sampled directions and compares
/// it against the distribution obtained by integrating `eval()`. Bins that
/// expect fewer than 5 samples are merged into their neighbour.
///
/// * `pf`        - The phase function.
/// * `mi`        - Medium interaction.
/// * `sampler`   - Random number source.
/// * `n_samples` - Number of samples to draw.
/// * `n_bins`    - Number of cos theta bins.
pub fn chi2_cos_theta<V: Variant<Float = Float>>(
    pf: &dyn PhaseFunction<V>,
    mi: &MediumInteractionf,
    sampler: &mut dyn Sampler,
    n_samples: usize,
    n_bins: usize,
) -> Result<Chi2Report, PhaseFunctionError> {
    const SUB_COS: usize = 32;
    const SUB_PHI: usize = 16;

    let n_bins = n_bins.max(1);
    let ctx = PhaseFunctionContext::default();

    // Observed frequencies.
    let mut observed = vec![0.0_f64; n_bins];
    for _ in 0..n_samples {
        let sample1 = sampler.get_1d();
        let sample2 = sampler.get_2d();
        let (wo, pdf) = pf.sample(&ctx, mi, sample1, &sample2, true)?;
        if pdf <= 0.0 {
            continue;
        }
        let c = clamp(wo.dot(&mi.wi) as f64, -1.0, 1.0);
        let bin = (((c + 1.0) * 0.5 * n_bins as f64) as usize).min(n_bins - 1);
        observed[bin] += 1.0;
    }

    // Expected frequencies.
    let bin_width = 2.0 / n_bins as f64;
    let d_cos = bin_width / SUB_COS as f64;
    let d_phi = std::f64::consts::TAU / SUB_PHI as f64;
    let mut expected = vec![0.0_f64; n_bins];
    for (bin, e) in expected.iter_mut().enumerate() {
        let start = -1.0 + bin as f64 * bin_width;
        let mut sum = 0.0;
        for i in 0..SUB_COS {
            let cos_theta = start + (i as f64 + 0.5) * d_cos;
            let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
            for j in 0..SUB_PHI {
                let phi = (j as f64 + 0.5) * d_phi;
                let local = spherical_direction(sin_theta as Float, cos_theta as Float, phi as Float);
                sum += pf.eval(&ctx, mi, &mi.to_world(&local), true)? as f64;
            }
        }
        *e = sum * d_cos * d_phi * n_samples as f64;
    }

    let pooled = pool_bins(&observed, &expected);
    let statistic = pooled
        .iter()
        .map(|(o, e)| (o - e) * (o - e) / e)
        .sum();

    Ok(Chi2Report {
        statistic,
        dof: pooled.len().saturating_sub(1),
    })
}

/// Merges consecutive bins until each expects at least 5 samples. A sparse
/// tail left at the end is folded into the last pooled bin.
///
/// * `observed` - Observed frequencies.
/// * `expected` - Expected frequencies.
fn pool_bins(observed: &[f64], expected: &[f64]) -> Vec<(f64, f64)> {
    let mut pooled: Vec<(f64, f64)> = Vec::with_capacity(expected.len());
    let (mut acc_obs, mut acc_exp) = (0.0, 0.0);
    for (o, e) in observed.iter().zip(expected.iter()) {
        acc_obs += o;
        acc_exp += e;
        if acc_exp >= 5.0 {
            pooled.push((acc_obs, acc_exp));
            acc_obs = 0.0;
            acc_exp = 0.0;
        }
    }
    if acc_exp > 0.0 {
        match pooled.last_mut() {
            Some(last) => {
                last.0 += acc_obs;
                last.1 += acc_exp;
            }
            None => pooled.push((acc_obs, acc_exp)),
        }
    }
    pooled
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::*;
    use float_cmp::*;

    /// Uniform model used to exercise the checks.
    struct Uniform {
        base: PhaseFunctionBase,
    }

    impl PhaseFunction<ScalarMono> for Uniform {
        fn base(&self) -> &PhaseFunctionBase {
            &self.base
        }

        fn sample(
            &self,
            _ctx: &PhaseFunctionContext,
            _mi: &MediumInteractionf,
            _sample1: Float,
            sample2: &Point2f,
            _active: bool,
        ) -> Result<(Vector3f, Float), PhaseFunctionError> {
            Ok((uniform_sample_sphere(sample2), uniform_sphere_pdf()))
        }

        fn eval(
            &self,
            _ctx: &PhaseFunctionContext,
            _mi: &MediumInteractionf,
            _wo: &Vector3f,
            _active: bool,
        ) -> Result<Float, PhaseFunctionError> {
            Ok(INV_FOUR_PI)
        }
    }

    /// Samples uniformly but claims a forward peaked density.
    struct Biased {
        base: PhaseFunctionBase,
    }

    impl PhaseFunction<ScalarMono> for Biased {
        fn base(&self) -> &PhaseFunctionBase {
            &self.base
        }

        fn sample(
            &self,
            _ctx: &PhaseFunctionContext,
            _mi: &MediumInteractionf,
            _sample1: Float,
            sample2: &Point2f,
            _active: bool,
        ) -> Result<(Vector3f, Float), PhaseFunctionError> {
            Ok((uniform_sample_sphere(sample2), uniform_sphere_pdf()))
        }

        fn eval(
            &self,
            _ctx: &PhaseFunctionContext,
            mi: &MediumInteractionf,
            wo: &Vector3f,
            _active: bool,
        ) -> Result<Float, PhaseFunctionError> {
            Ok(INV_TWO_PI * max(0.0, wo.dot(&mi.wi)) * 2.0)
        }
    }

    fn interaction() -> MediumInteractionf {
        MediumInteractionf::new(Point3f::zero(), Vector3f::new(0.0, 1.0, 0.0), 0.0)
    }

    #[test]
    fn uniform_integrates_to_one() {
        let pf = Uniform {
            base: PhaseFunctionBase::new(""),
        };
        let total = integrate_over_sphere(&pf, &interaction(), 64, 8).unwrap();
        assert!(approx_eq!(f64, total, 1.0, epsilon = 1e-5));
    }

    #[test]
    fn uniform_is_consistent() {
        let pf = Uniform {
            base: PhaseFunctionBase::new(""),
        };
        let mut sampler = IndependentSampler::new(Some(7));
        let report = sample_consistency(&pf, &interaction(), &mut sampler, 10_000).unwrap();
        assert_eq!(report.samples, 10_000);
        assert_eq!(report.non_unit, 0);
        assert!(report.max_relative_error < 1e-5);
        assert!(report.mean_cosine.abs() < 0.05);

        let chi2 = chi2_cos_theta(&pf, &interaction(), &mut sampler, 50_000, 20).unwrap();
        assert_eq!(chi2.dof, 19);
        assert!(chi2.passes(), "{:?}", chi2);
    }

    #[test]
    fn mismatched_sampling_is_rejected() {
        let pf = Biased {
            base: PhaseFunctionBase::new(""),
        };
        let mut sampler = IndependentSampler::new(Some(3));
        let chi2 = chi2_cos_theta(&pf, &interaction(), &mut sampler, 50_000, 20).unwrap();
        assert!(!chi2.passes());

        let report = sample_consistency(&pf, &interaction(), &mut sampler, 1_000).unwrap();
        assert!(report.max_relative_error > 0.1);
    }

    #[test]
    fn sparse_tail_joins_last_bin() {
        let pooled = pool_bins(&[9.0, 12.0, 2.0, 0.0], &[10.0, 10.0, 1.0, 1.0]);
        assert_eq!(pooled, vec![(9.0, 10.0), (14.0, 12.0)]);
    }

    #[test]
    fn sparse_bins_are_pooled_forward() {
        let pooled = pool_bins(&[1.0, 3.0, 2.0, 6.0], &[2.0, 2.0, 2.0, 6.0]);
        assert_eq!(pooled, vec![(6.0, 6.0), (6.0, 6.0)]);
    }

    #[test]
    fn all_sparse_bins_form_one_bin() {
        let pooled = pool_bins(&[1.0, 2.0], &[1.0, 1.5]);
        assert_eq!(pooled, vec![(3.0, 2.5)]);
    }

    #[test]
    fn sparse_tail_does_not_add_freedom() {
        // 7 bins expecting 4 samples each pool into 3 pairs plus a tail.
        let pf = Uniform {
            base: PhaseFunctionBase::new(""),
        };
        let mut sampler = IndependentSampler::new(Some(11));
        let chi2 = chi2_cos_theta(&pf, &interaction(), &mut sampler, 28, 7).unwrap();
        assert_eq!(chi2.dof, 2);
    }

    #[test]
    fn critical_value_is_close_to_tables() {
        let r = Chi2Report { statistic: 0.0, dof: 19 };
        // Tabulated value for 19 dof at 0.001 is 43.82.
        assert!((r.critical_value(3.09) - 43.82).abs() < 0.5);
    }
}
