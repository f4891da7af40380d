//! Model checks

use api::*;
use float_cmp::approx_eq;
use pbrt_core::app::Options;
use pbrt_core::geometry::*;
use pbrt_core::interaction::*;
use pbrt_core::lanes::*;
use pbrt_core::medium::*;
use pbrt_core::paramset::*;
use pbrt_core::pbrt::*;
use pbrt_core::sampler::*;
use pbrt_core::sampling::*;
use pbrt_core::spectrum::*;
use std::fmt;
use std::sync::Arc;

/// Number of lanes used by array packet checks.
const LANES: usize = 8;

/// Largest difference allowed between SIMD lanes and scalar queries. SIMD
/// trigonometry is not bit-identical to the scalar one.
const SIMD_TOLERANCE: Float = 1e-5;

/// Outcome of checking one model in one variant.
#[derive(Clone, Debug)]
pub struct CheckReport {
    /// Description of the model.
    pub model: String,

    /// Variant name.
    pub variant: String,

    /// Integral of the model over the sphere.
    pub integral: f64,

    /// Agreement of sampled densities with the model.
    pub consistency: ConsistencyReport,

    /// Goodness of fit of sampled directions.
    pub chi2: Chi2Report,

    /// Lanes where a packet query differed from the batched query by handle.
    pub lane_mismatches: Option<usize>,
}

impl CheckReport {
    /// Returns `true` if every check passed.
    pub fn passed(&self) -> bool {
        abs(self.integral - 1.0) < 1e-2
            && self.consistency.max_relative_error < 1e-3
            && self.consistency.non_unit == 0
            && self.chi2.passes()
            && self.lane_mismatches.unwrap_or(0) == 0
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.model, self.variant)?;
        writeln!(f, "  integral           {:.6}", self.integral)?;
        writeln!(f, "  samples            {}", self.consistency.samples)?;
        writeln!(f, "  max relative error {:e}", self.consistency.max_relative_error)?;
        writeln!(f, "  non unit samples   {}", self.consistency.non_unit)?;
        writeln!(f, "  mean cosine        {:.6}", self.consistency.mean_cosine)?;
        writeln!(
            f,
            "  chi2               {:.3} (dof {}, critical {:.3})",
            self.chi2.statistic,
            self.chi2.dof,
            self.chi2.critical_value(3.09)
        )?;
        if let Some(n) = self.lane_mismatches {
            writeln!(f, "  lane mismatches    {}", n)?;
        }
        write!(f, "  result             {}", if self.passed() { "PASS" } else { "FAIL" })
    }
}

/// Returns the construction properties described by the options.
///
/// * `opts` - Options.
pub fn make_params(opts: &Options) -> ParamSet {
    let mut params = ParamSet::new();
    params.add_string("id", &[opts.phase_type.clone()]);
    if let Some(g) = opts.g {
        params.add_float("g", &[g]);
    }
    params
}

/// Checks a model in the variant named by the options.
///
/// * `opts` - Options.
pub fn run(opts: &Options) -> Result<CheckReport, PhaseFunctionError> {
    match opts.variant.as_str() {
        "scalar_mono" => check_scalar::<ScalarMono>(opts),
        "scalar_spectral" => check_scalar::<ScalarSpectral>(opts),
        "scalar_polarized" => check_scalar::<ScalarPolarized>(opts),
        "packet_rgb" => check_packet::<Packet<LANES>>(opts, 0.0),
        "wide_rgb" => check_packet::<Wide8>(opts, SIMD_TOLERANCE),
        _ => check_scalar::<ScalarRgb>(opts),
    }
}

/// Integrates and samples the model in a scalar variant.
///
/// * `opts` - Options.
fn check_scalar<V: Variant<Float = Float>>(opts: &Options) -> Result<CheckReport, PhaseFunctionError> {
    let registry = PhaseFunctionRegistry::<V>::with_builtins();
    let pf = registry.make_phase_function(&opts.phase_type, &make_params(opts))?;
    info!("Checking {} in variant {}", pf, V::name());

    let mi = MediumInteractionf::new(Point3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 0.0);
    let integral = integrate_over_sphere(&*pf, &mi, 4000, 8)?;

    let mut sampler = IndependentSampler::new(Some(opts.seed));
    let consistency = sample_consistency(&*pf, &mi, &mut sampler, opts.samples)?;
    let chi2 = chi2_cos_theta(&*pf, &mi, &mut sampler, opts.samples, opts.bins)?;

    Ok(CheckReport {
        model: pf.to_string(),
        variant: V::name(),
        integral,
        consistency,
        chi2,
        lane_mismatches: None,
    })
}

/// Returns `true` if two lane values agree to within `tolerance`. A zero
/// tolerance asks for identical values.
///
/// * `a`         - First value.
/// * `b`         - Second value.
/// * `tolerance` - Largest allowed difference.
fn lanes_agree(a: Float, b: Float, tolerance: Float) -> bool {
    approx_eq!(f32, a, b, epsilon = tolerance, ulps = 0)
}

/// Runs the scalar checks and compares packet queries against batched
/// queries by handle.
///
/// * `opts`      - Options.
/// * `tolerance` - Largest allowed difference between lanes.
fn check_packet<F>(opts: &Options, tolerance: Float) -> Result<CheckReport, PhaseFunctionError>
where
    F: Real + Gather<Lane = Float>,
    F::Mask: Gather<Lane = bool>,
{
    let mut report = check_scalar::<ScalarRgb>(opts)?;
    let params = make_params(opts);

    let packet =
        PhaseFunctionRegistry::<Var<F, Rgb>>::with_builtins().make_phase_function(&opts.phase_type, &params)?;
    let scalar = PhaseFunctionRegistry::<ScalarRgb>::with_builtins().make_phase_function(&opts.phase_type, &params)?;
    let ptrs: Vec<PhaseFunctionPtr<Rgb>> = (0..F::LANES).map(|_| Some(Arc::clone(&scalar))).collect();

    let ctx = PhaseFunctionContext::default();
    let mut sampler = IndependentSampler::new(Some(opts.seed.wrapping_add(1)));
    let mut mismatches = 0;
    for _ in 0..opts.samples / F::LANES {
        let mut wi = Vector3::<F>::default();
        for lane in 0..F::LANES {
            wi.insert(lane, uniform_sample_sphere(&sampler.get_2d()));
        }
        let mi = MediumInteraction::new(Point3::zero(), wi, F::zeros());
        let sample1: F = get_1d_packet(&mut sampler);
        let sample2: Point2<F> = get_2d_packet(&mut sampler);
        let mut active = <F::Mask as Mask>::splat(true);
        for lane in 0..F::LANES {
            active.insert(lane, sampler.get_1d() < 0.75);
        }

        let (wo, pdf) = packet.sample(&ctx, &mi, sample1, &sample2, active)?;
        let (wo_vec, pdf_vec) = sample_vec(&ptrs, &ctx, &mi, sample1, &sample2, active)?;
        let value = packet.eval(&ctx, &mi, &wo, active)?;
        let value_vec = eval_vec(&ptrs, &ctx, &mi, &wo, active)?;

        for lane in 0..F::LANES {
            let (w, w_vec) = (wo.extract(lane), wo_vec.extract(lane));
            let agree = lanes_agree(pdf.extract(lane), pdf_vec.extract(lane), tolerance)
                && lanes_agree(value.extract(lane), value_vec.extract(lane), tolerance)
                && (0..3).all(|axis| lanes_agree(w[axis], w_vec[axis], tolerance));
            if !agree {
                mismatches += 1;
            }
        }
    }
    if mismatches > 0 {
        warn!("{} lanes differ between packet and batched queries", mismatches);
    }

    report.variant = Var::<F, Rgb>::name();
    report.lane_mismatches = Some(mismatches);
    Ok(report)
}
