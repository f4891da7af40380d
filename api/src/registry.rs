//! Phase function registry

use pbrt_core::medium::*;
use pbrt_core::paramset::*;
use pbrt_core::spectrum::*;
use phases::*;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::sync::Arc;

/// Builds a phase function from construction properties.
pub type PhaseFunctionFactory<V> =
    Box<dyn Fn(&ParamSet) -> Result<ArcPhaseFunction<V>, PhaseFunctionError> + Send + Sync>;

/// Maps type names to phase function factories for one variant.
pub struct PhaseFunctionRegistry<V: Variant> {
    factories: HashMap<String, PhaseFunctionFactory<V>>,
}

impl<V: Variant> Default for PhaseFunctionRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> PhaseFunctionRegistry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in models `isotropic`, `hg` and
    /// `rayleigh`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("isotropic", |params| {
            let pf = IsotropicPhaseFunction::<V>::try_from(params)?;
            Ok(Arc::new(pf) as ArcPhaseFunction<V>)
        });
        registry.register("hg", |params| {
            let pf = HenyeyGreenstein::<V>::try_from(params)?;
            Ok(Arc::new(pf) as ArcPhaseFunction<V>)
        });
        registry.register("rayleigh", |params| {
            let pf = RayleighPhaseFunction::<V>::try_from(params)?;
            Ok(Arc::new(pf) as ArcPhaseFunction<V>)
        });
        registry
    }

    /// Registers a factory, replacing any factory with the same name.
    ///
    /// * `name`    - Type name.
    /// * `factory` - Builds the phase function.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&ParamSet) -> Result<ArcPhaseFunction<V>, PhaseFunctionError> + Send + Sync + 'static,
    {
        if self.factories.insert(String::from(name), Box::new(factory)).is_some() {
            warn!("Phase function '{}' registered again; replacing previous factory.", name);
        }
    }

    /// Registers an extension model. Each instance is wrapped in a
    /// `PhaseFunctionTrampoline` declaring the given components.
    ///
    /// * `name`       - Type name.
    /// * `components` - Flags of each component.
    /// * `make`       - Builds the extension's operations.
    pub fn register_extension<F>(&mut self, name: &str, components: Vec<PhaseFunctionFlags>, make: F)
    where
        F: Fn(&ParamSet) -> Box<dyn PhaseFunctionOverrides<V>> + Send + Sync + 'static,
    {
        self.register(name, move |params| {
            let mut pf = PhaseFunctionTrampoline::new(params, make(params));
            pf.base_mut().set_components(components.clone());
            Ok(Arc::new(pf) as ArcPhaseFunction<V>)
        });
    }

    /// Returns `true` if a factory is registered under `name`.
    ///
    /// * `name` - Type name.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns the registered type names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Creates the given type of phase function from parameter set.
    /// Parameters that the model did not look up are reported.
    ///
    /// * `name`   - Type name.
    /// * `params` - Parameter set.
    pub fn make_phase_function(
        &self,
        name: &str,
        params: &ParamSet,
    ) -> Result<ArcPhaseFunction<V>, PhaseFunctionError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| PhaseFunctionError::UnknownType(String::from(name)))?;
        let pf = factory(params)?;
        params.report_unused(&format!("phase function '{}'", name));
        debug!("Created {} for variant {}", pf, V::name());
        Ok(pf)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pbrt_core::geometry::*;
    use pbrt_core::interaction::*;
    use pbrt_core::pbrt::*;

    struct Backscatter;

    impl PhaseFunctionOverrides<ScalarRgb> for Backscatter {
        fn class_name(&self) -> String {
            String::from("Backscatter")
        }

        fn sample(
            &self,
            _ctx: &PhaseFunctionContext,
            mi: &MediumInteractionf,
            _sample1: Float,
            _sample2: &Point2f,
            _active: bool,
        ) -> Option<(Vector3f, Float)> {
            Some((mi.wi, 1.0))
        }
    }

    #[test]
    fn builtins() {
        let registry = PhaseFunctionRegistry::<ScalarRgb>::with_builtins();
        assert_eq!(registry.names(), vec!["hg", "isotropic", "rayleigh"]);
        assert!(registry.contains("rayleigh"));
        assert!(!registry.contains("mie"));

        let pf = registry.make_phase_function("rayleigh", &ParamSet::new()).unwrap();
        assert_eq!(pf.to_string(), "RayleighPhaseFunction[]");

        let mut params = ParamSet::new();
        params.add_float("g", &[0.25]);
        params.add_int("unused", &[3]);
        let pf = registry.make_phase_function("hg", &params).unwrap();
        assert_eq!(pf.to_string(), "HGPhaseFunction[g = 0.25]");
        assert_eq!(params.unused(), vec!["integer unused"]);
    }

    #[test]
    fn errors() {
        let registry = PhaseFunctionRegistry::<ScalarMono>::with_builtins();
        assert_eq!(
            registry.make_phase_function("mie", &ParamSet::new()).err(),
            Some(PhaseFunctionError::UnknownType(String::from("mie")))
        );

        let mut params = ParamSet::new();
        params.add_float("g", &[2.0]);
        assert!(matches!(
            registry.make_phase_function("hg", &params),
            Err(PhaseFunctionError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn extensions() {
        let mut registry = PhaseFunctionRegistry::<ScalarRgb>::new();
        registry.register_extension("back", vec![PhaseFunctionFlags::ANISOTROPIC], |_| Box::new(Backscatter));

        let pf = registry.make_phase_function("back", &ParamSet::new()).unwrap();
        assert_eq!(pf.flags(true), PhaseFunctionFlags::ANISOTROPIC);
        assert_eq!(pf.projected_area(&MediumInteractionf::default(), true), 1.0);

        let ctx = PhaseFunctionContext::default();
        let mi = MediumInteractionf::new(Point3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 0.0);
        assert_eq!(
            pf.eval(&ctx, &mi, &mi.wi, true).err(),
            Some(PhaseFunctionError::NotImplemented {
                class: String::from("Backscatter"),
                method: "eval",
            })
        );
    }
}
