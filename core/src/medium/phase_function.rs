//! Phase Function

use super::*;
use crate::geometry::*;
use crate::interaction::*;
use crate::lanes::*;
use crate::paramset::*;
use crate::pbrt::*;
use crate::spectrum::*;
use std::fmt;
use std::sync::Arc;

/// State shared by every phase function: its flags, the flags of each of its
/// components and an identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseFunctionBase {
    /// Union of all component flags.
    flags: PhaseFunctionFlags,

    /// Flags of each component.
    components: Vec<PhaseFunctionFlags>,

    /// Identifier.
    id: String,
}

impl PhaseFunctionBase {
    /// Create a new `PhaseFunctionBase` without components.
    ///
    /// * `id` - Identifier.
    pub fn new(id: &str) -> Self {
        Self {
            flags: PhaseFunctionFlags::empty(),
            components: vec![],
            id: String::from(id),
        }
    }

    /// Appends a component and merges its flags into the aggregate flags.
    ///
    /// * `flags` - Flags of the new component.
    pub fn add_component(&mut self, flags: PhaseFunctionFlags) -> &mut Self {
        self.components.push(flags);
        self.flags |= flags;
        self
    }

    /// Replaces all components, recomputing the aggregate flags.
    ///
    /// * `components` - Flags of each component.
    pub fn set_components(&mut self, components: Vec<PhaseFunctionFlags>) {
        self.flags = components
            .iter()
            .fold(PhaseFunctionFlags::empty(), |acc, &c| acc | c);
        self.components = components;
    }

    /// Returns the aggregate flags.
    pub fn flags(&self) -> PhaseFunctionFlags {
        self.flags
    }

    /// Returns the flags of each component.
    pub fn components(&self) -> &[PhaseFunctionFlags] {
        &self.components
    }

    /// Returns the flags of a component or no flags if the index is out of
    /// range.
    ///
    /// * `index` - Component index.
    pub fn component_flags(&self, index: usize) -> PhaseFunctionFlags {
        self.components
            .get(index)
            .copied()
            .unwrap_or_else(PhaseFunctionFlags::empty)
    }

    /// Returns the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets the identifier.
    ///
    /// * `id` - Identifier.
    pub fn set_id(&mut self, id: &str) {
        self.id = String::from(id);
    }
}

impl From<&ParamSet> for PhaseFunctionBase {
    /// Create a `PhaseFunctionBase` from given parameter set. Only `id` is
    /// read; components are added by the model.
    ///
    /// * `params` - Parameter set.
    fn from(params: &ParamSet) -> Self {
        Self::new(&params.find_one_string("id", String::new()))
    }
}

/// Common interface of all phase function models. A model is immutable once
/// built so the same instance can be queried concurrently from many threads.
pub trait PhaseFunction<V: Variant>: Send + Sync {
    /// Returns the shared state.
    fn base(&self) -> &PhaseFunctionBase;

    /// Importance samples an outgoing direction. Returns the direction in
    /// world space and the density of having sampled it, which equals
    /// `eval()` for the same direction. Disabled lanes return zeros.
    ///
    /// * `ctx`     - Sampling context.
    /// * `mi`      - Medium interaction.
    /// * `sample1` - Sample used to pick a component.
    /// * `sample2` - Sample in [0, 1)^2 used to pick a direction.
    /// * `active`  - Active lanes.
    fn sample(
        &self,
        ctx: &PhaseFunctionContext,
        mi: &MediumInteraction<VFloat<V>>,
        sample1: VFloat<V>,
        sample2: &Point2<VFloat<V>>,
        active: VMask<V>,
    ) -> Result<(Vector3<VFloat<V>>, VFloat<V>), PhaseFunctionError>;

    /// Returns the phase function value for the pair `mi.wi` and `wo`.
    /// Disabled lanes return zero.
    ///
    /// * `ctx`    - Sampling context.
    /// * `mi`     - Medium interaction.
    /// * `wo`     - Outgoing direction in world space.
    /// * `active` - Active lanes.
    fn eval(
        &self,
        ctx: &PhaseFunctionContext,
        mi: &MediumInteraction<VFloat<V>>,
        wo: &Vector3<VFloat<V>>,
        active: VMask<V>,
    ) -> Result<VFloat<V>, PhaseFunctionError>;

    /// Returns the projected area of the scattering particle in the direction
    /// of `mi.wi`.
    ///
    /// * `mi`     - Medium interaction.
    /// * `active` - Active lanes.
    fn projected_area(&self, mi: &MediumInteraction<VFloat<V>>, active: VMask<V>) -> VFloat<V> {
        default_projected_area::<V>(mi, active)
    }

    /// Returns the maximum projected area over all directions.
    fn max_projected_area(&self) -> Float {
        default_max_projected_area()
    }

    /// Returns the aggregate flags.
    ///
    /// * `_active` - Active lanes.
    fn flags(&self, _active: VMask<V>) -> PhaseFunctionFlags {
        self.base().flags()
    }

    /// Returns the flags of a component.
    ///
    /// * `index`   - Component index.
    /// * `_active` - Active lanes.
    fn component_flags(&self, index: usize, _active: VMask<V>) -> PhaseFunctionFlags {
        self.base().component_flags(index)
    }

    /// Returns the number of components.
    ///
    /// * `_active` - Active lanes.
    fn component_count(&self, _active: VMask<V>) -> usize {
        self.base().components().len()
    }

    /// Returns the identifier.
    fn id(&self) -> &str {
        self.base().id()
    }

    /// Returns a human readable description of the model.
    fn human_readable_name(&self) -> String {
        default_human_readable_name(self.base())
    }
}

/// Atomic reference counted `PhaseFunction`.
pub type ArcPhaseFunction<V> = Arc<dyn PhaseFunction<V>>;

/// Projected area used by models that don't model particle shape.
///
/// * `_mi`     - Medium interaction.
/// * `_active` - Active lanes.
pub fn default_projected_area<V: Variant>(_mi: &MediumInteraction<VFloat<V>>, _active: VMask<V>) -> VFloat<V> {
    <VFloat<V> as Real>::ones()
}

/// Maximum projected area used by models that don't model particle shape.
pub fn default_max_projected_area() -> Float {
    1.0
}

/// Description used by models that don't provide their own.
///
/// * `base` - Shared state of the model.
pub fn default_human_readable_name(base: &PhaseFunctionBase) -> String {
    format!("PhaseFunction[id = \"{}\", flags = {}]", base.id(), base.flags())
}

impl<V: Variant> fmt::Display for dyn PhaseFunction<V> {
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

    struct Constant {
        base: PhaseFunctionBase,
    }

    impl PhaseFunction<ScalarRgb> for Constant {
        fn base(&self) -> &PhaseFunctionBase {
            &self.base
        }

        fn sample(
            &self,
            _ctx: &PhaseFunctionContext,
            mi: &MediumInteractionf,
            _sample1: Float,
            _sample2: &Point2f,
            active: bool,
        ) -> Result<(Vector3f, Float), PhaseFunctionError> {
            let wo = Vector3f::select(active, &mi.wi, &Vector3f::ZERO);
            Ok((wo, Float::select(active, INV_FOUR_PI, 0.0)))
        }

        fn eval(
            &self,
            _ctx: &PhaseFunctionContext,
            _mi: &MediumInteractionf,
            _wo: &Vector3f,
            active: bool,
        ) -> Result<Float, PhaseFunctionError> {
            Ok(Float::select(active, INV_FOUR_PI, 0.0))
        }
    }

    #[test]
    fn aggregate_flags_are_union_of_components() {
        let mut base = PhaseFunctionBase::new("a");
        base.add_component(PhaseFunctionFlags::ISOTROPIC)
            .add_component(PhaseFunctionFlags::ANISOTROPIC);
        assert_eq!(base.components().len(), 2);
        assert_eq!(
            base.flags(),
            PhaseFunctionFlags::ISOTROPIC | PhaseFunctionFlags::ANISOTROPIC
        );

        base.set_components(vec![PhaseFunctionFlags::MICROFLAKE]);
        assert_eq!(base.flags(), PhaseFunctionFlags::MICROFLAKE);
    }

    #[test]
    fn component_flags_out_of_range_is_empty() {
        let mut base = PhaseFunctionBase::new("");
        base.add_component(PhaseFunctionFlags::ISOTROPIC);
        assert_eq!(base.component_flags(0), PhaseFunctionFlags::ISOTROPIC);
        assert_eq!(base.component_flags(3), PhaseFunctionFlags::empty());
    }

    #[test]
    fn base_from_paramset() {
        let mut params = ParamSet::new();
        params.add_string("id", &[String::from("fog")]);
        let base = PhaseFunctionBase::from(&params);
        assert_eq!(base.id(), "fog");
        assert!(base.components().is_empty());
        assert!(params.unused().is_empty());
    }

    #[test]
    fn provided_defaults() {
        let mut base = PhaseFunctionBase::new("c");
        base.add_component(PhaseFunctionFlags::ISOTROPIC);
        let pf: ArcPhaseFunction<ScalarRgb> = Arc::new(Constant { base });
        let mi = MediumInteractionf::new(Point3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 0.0);

        assert_eq!(pf.projected_area(&mi, true), 1.0);
        assert_eq!(pf.max_projected_area(), 1.0);
        assert_eq!(pf.flags(true), PhaseFunctionFlags::ISOTROPIC);
        assert_eq!(pf.component_count(true), 1);
        assert_eq!(pf.id(), "c");
        assert_eq!(pf.to_string(), "PhaseFunction[id = \"c\", flags = ISOTROPIC]");
    }
}
