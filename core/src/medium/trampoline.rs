//! Extension phase functions
//!
//! Models defined outside the crate (e.g. through a scripting binding)
//! provide a `PhaseFunctionOverrides` implementation. Every hook returns
//! `None` unless overridden. Missing `sample` or `eval` hooks are reported as
//! `PhaseFunctionError::NotImplemented`; the remaining hooks fall back to the
//! default behaviour of native models.

use super::*;
use crate::geometry::*;
use crate::interaction::*;
use crate::lanes::*;
use crate::paramset::*;
use crate::pbrt::*;
use crate::spectrum::*;

/// Operations an extension model may override.
pub trait PhaseFunctionOverrides<V: Variant>: Send + Sync {
    /// Returns the name of the extension class used in error messages.
    fn class_name(&self) -> String;

    /// Overrides `PhaseFunction::sample()`.
    fn sample(
        &self,
        _ctx: &PhaseFunctionContext,
        _mi: &MediumInteraction<VFloat<V>>,
        _sample1: VFloat<V>,
        _sample2: &Point2<VFloat<V>>,
        _active: VMask<V>,
    ) -> Option<(Vector3<VFloat<V>>, VFloat<V>)> {
        None
    }

    /// Overrides `PhaseFunction::eval()`.
    fn eval(
        &self,
        _ctx: &PhaseFunctionContext,
        _mi: &MediumInteraction<VFloat<V>>,
        _wo: &Vector3<VFloat<V>>,
        _active: VMask<V>,
    ) -> Option<VFloat<V>> {
        None
    }

    /// Overrides `PhaseFunction::projected_area()`.
    fn projected_area(&self, _mi: &MediumInteraction<VFloat<V>>, _active: VMask<V>) -> Option<VFloat<V>> {
        None
    }

    /// Overrides `PhaseFunction::max_projected_area()`.
    fn max_projected_area(&self) -> Option<Float> {
        None
    }

    /// Overrides `PhaseFunction::human_readable_name()`.
    fn human_readable_name(&self) -> Option<String> {
        None
    }
}

/// Adapts an extension model to the `PhaseFunction` interface.
pub struct PhaseFunctionTrampoline<V: Variant> {
    /// Shared state, writable by the extension until it is shared.
    base: PhaseFunctionBase,

    /// Operations provided by the extension.
    overrides: Box<dyn PhaseFunctionOverrides<V>>,
}

impl<V: Variant> PhaseFunctionTrampoline<V> {
    /// Create a new `PhaseFunctionTrampoline`.
    ///
    /// * `params`    - Construction properties.
    /// * `overrides` - Operations provided by the extension.
    pub fn new(params: &ParamSet, overrides: Box<dyn PhaseFunctionOverrides<V>>) -> Self {
        Self {
            base: PhaseFunctionBase::from(params),
            overrides,
        }
    }

    /// Returns the shared state for modification. Extensions declare their
    /// components through it.
    pub fn base_mut(&mut self) -> &mut PhaseFunctionBase {
        &mut self.base
    }

    fn not_implemented(&self, method: &'static str) -> PhaseFunctionError {
        PhaseFunctionError::NotImplemented {
            class: self.overrides.class_name(),
            method,
        }
    }
}

impl<V: Variant> PhaseFunction<V> for PhaseFunctionTrampoline<V> {
    fn base(&self) -> &PhaseFunctionBase {
        &self.base
    }

    /// Forwards to the extension. Lanes the extension filled although they
    /// were disabled are reset to zero.
    fn sample(
        &self,
        ctx: &PhaseFunctionContext,
        mi: &MediumInteraction<VFloat<V>>,
        sample1: VFloat<V>,
        sample2: &Point2<VFloat<V>>,
        active: VMask<V>,
    ) -> Result<(Vector3<VFloat<V>>, VFloat<V>), PhaseFunctionError> {
        let (wo, pdf) = self
            .overrides
            .sample(ctx, mi, sample1, sample2, active)
            .ok_or_else(|| self.not_implemented("sample"))?;
        Ok((
            Vector3::select(active, &wo, &Vector3::zero()),
            <VFloat<V> as Real>::select(active, pdf, <VFloat<V> as Real>::zeros()),
        ))
    }

    fn eval(
        &self,
        ctx: &PhaseFunctionContext,
        mi: &MediumInteraction<VFloat<V>>,
        wo: &Vector3<VFloat<V>>,
        active: VMask<V>,
    ) -> Result<VFloat<V>, PhaseFunctionError> {
        let value = self
            .overrides
            .eval(ctx, mi, wo, active)
            .ok_or_else(|| self.not_implemented("eval"))?;
        Ok(<VFloat<V> as Real>::select(active, value, <VFloat<V> as Real>::zeros()))
    }

    fn projected_area(&self, mi: &MediumInteraction<VFloat<V>>, active: VMask<V>) -> VFloat<V> {
        self.overrides
            .projected_area(mi, active)
            .unwrap_or_else(|| default_projected_area::<V>(mi, active))
    }

    fn max_projected_area(&self) -> Float {
        self.overrides
            .max_projected_area()
            .unwrap_or_else(default_max_projected_area)
    }

    fn human_readable_name(&self) -> String {
        self.overrides
            .human_readable_name()
            .unwrap_or_else(|| default_human_readable_name(&self.base))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
