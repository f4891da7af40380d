//! Batched queries by handle
//!
//! In packet variants every lane may refer to a different phase function.
//! Handles are resolved per lane and each lane is answered by the scalar
//! model of the same spectral representation, so a batched result is
//! identical to calling the scalar model lane by lane. Lanes that are
//! disabled or whose handle is `None` return zeros and empty flags.

use super::*;
use crate::geometry::*;
use crate::interaction::*;
use crate::lanes::*;
use crate::pbrt::Float;
use crate::spectrum::*;

/// Per-lane handle to a scalar phase function.
pub type PhaseFunctionPtr<S> = Option<ArcPhaseFunction<ScalarOf<S>>>;

/// Returns the handle of an enabled lane. Lanes past the end of `ptrs` have
/// no handle.
fn resolve<S: SpectralRepr>(
    ptrs: &[PhaseFunctionPtr<S>],
    lane: usize,
    active: bool,
) -> Option<&ArcPhaseFunction<ScalarOf<S>>> {
    if active {
        ptrs.get(lane).and_then(Option::as_ref)
    } else {
        None
    }
}

/// Calls `PhaseFunction::sample()` on each lane's phase function.
///
/// * `ptrs`    - Per-lane handles.
/// * `ctx`     - Sampling context.
/// * `mi`      - Medium interactions.
/// * `sample1` - Component samples.
/// * `sample2` - Direction samples.
/// * `active`  - Active lanes.
pub fn sample_vec<S, T>(
    ptrs: &[PhaseFunctionPtr<S>],
    ctx: &PhaseFunctionContext,
    mi: &MediumInteraction<T>,
    sample1: T,
    sample2: &Point2<T>,
    active: T::Mask,
) -> Result<(Vector3<T>, T), PhaseFunctionError>
where
    S: SpectralRepr,
    T: Real + Gather<Lane = Float>,
    T::Mask: Gather<Lane = bool>,
{
    let mut wo = Vector3::<T>::default();
    let mut pdf = T::zeros();
    for lane in 0..T::LANES {
        if let Some(pf) = resolve(ptrs, lane, active.extract(lane)) {
            let (w, p) = pf.sample(
                ctx,
                &mi.extract(lane),
                sample1.extract(lane),
                &sample2.extract(lane),
                true,
            )?;
            wo.insert(lane, w);
            pdf.insert(lane, p);
        }
    }
    Ok((wo, pdf))
}

/// Calls `PhaseFunction::eval()` on each lane's phase function.
///
/// * `ptrs`   - Per-lane handles.
/// * `ctx`    - Sampling context.
/// * `mi`     - Medium interactions.
/// * `wo`     - Outgoing directions.
/// * `active` - Active lanes.
pub fn eval_vec<S, T>(
    ptrs: &[PhaseFunctionPtr<S>],
    ctx: &PhaseFunctionContext,
    mi: &MediumInteraction<T>,
    wo: &Vector3<T>,
    active: T::Mask,
) -> Result<T, PhaseFunctionError>
where
    S: SpectralRepr,
    T: Real + Gather<Lane = Float>,
    T::Mask: Gather<Lane = bool>,
{
    let mut value = T::zeros();
    for lane in 0..T::LANES {
        if let Some(pf) = resolve(ptrs, lane, active.extract(lane)) {
            let v = pf.eval(ctx, &mi.extract(lane), &wo.extract(lane), true)?;
            value.insert(lane, v);
        }
    }
    Ok(value)
}

/// Calls `PhaseFunction::projected_area()` on each lane's phase function.
///
/// * `ptrs`   - Per-lane handles.
/// * `mi`     - Medium interactions.
/// * `active` - Active lanes.
pub fn projected_area_vec<S, T>(ptrs: &[PhaseFunctionPtr<S>], mi: &MediumInteraction<T>, active: T::Mask) -> T
where
    S: SpectralRepr,
    T: Real + Gather<Lane = Float>,
    T::Mask: Gather<Lane = bool>,
{
    let mut area = T::zeros();
    for lane in 0..T::LANES {
        if let Some(pf) = resolve(ptrs, lane, active.extract(lane)) {
            area.insert(lane, pf.projected_area(&mi.extract(lane), true));
        }
    }
    area
}

/// Calls `PhaseFunction::flags()` on each lane's phase function.
///
/// * `ptrs`   - Per-lane handles.
/// * `active` - Active lanes.
pub fn flags_vec<S: SpectralRepr, const N: usize>(
    ptrs: &[PhaseFunctionPtr<S>],
    active: LaneMask<N>,
) -> [PhaseFunctionFlags; N] {
    std::array::from_fn(|lane| match resolve(ptrs, lane, active.get(lane)) {
        Some(pf) => pf.flags(true),
        None => PhaseFunctionFlags::empty(),
    })
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
