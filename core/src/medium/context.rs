//! Phase function sampling context

use crate::sampler::Sampler;
use std::fmt;

/// Direction in which light is being transported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TransportMode {
    /// Indicates incident ray that intersected a point started at the camera.
    #[default]
    Radiance,

    /// Indicates incident ray that intersected a point started at the light
    /// source.
    Importance,
}

impl TransportMode {
    /// Returns the opposite transport mode.
    pub fn reverse(self) -> Self {
        match self {
            Self::Radiance => Self::Importance,
            Self::Importance => Self::Radiance,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radiance => write!(f, "Radiance"),
            Self::Importance => write!(f, "Importance"),
        }
    }
}

/// Per-query information handed to phase functions by the integrator.
#[derive(Default)]
pub struct PhaseFunctionContext<'a> {
    /// Random number source owned by the caller.
    pub sampler: Option<&'a mut dyn Sampler>,

    /// Transport mode.
    pub mode: TransportMode,

    /// Restricts queries to a single component; `None` selects all of them.
    pub component: Option<usize>,
}

impl<'a> PhaseFunctionContext<'a> {
    /// Create a new context querying every component.
    ///
    /// * `sampler` - Borrowed random number source.
    /// * `mode`    - Transport mode.
    pub fn new(sampler: Option<&'a mut dyn Sampler>, mode: TransportMode) -> Self {
        Self {
            sampler,
            mode,
            component: None,
        }
    }

    /// Restrict the context to a single component.
    ///
    /// * `component` - Component index.
    pub fn with_component(mut self, component: usize) -> Self {
        self.component = Some(component);
        self
    }

    /// Reverse the direction of light transport in the record. This updates
    /// the transport mode (radiance to importance and vice versa).
    pub fn reverse(&mut self) {
        self.mode = self.mode.reverse();
    }
}

impl<'a> fmt::Display for PhaseFunctionContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sampler = if self.sampler.is_some() { "set" } else { "none" };
        match self.component {
            Some(c) => write!(
                f,
                "PhaseFunctionContext[mode = {}, sampler = {}, component = {}]",
                self.mode, sampler, c
            ),
            None => write!(
                f,
                "PhaseFunctionContext[mode = {}, sampler = {}, component = all]",
                self.mode, sampler
            ),
        }
    }
}
