//! Phase function flags

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Capabilities declared by a phase function, globally or per component.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct PhaseFunctionFlags: u32 {
        /// Scattering does not depend on the angle between directions.
        const ISOTROPIC = 0x1;

        /// Scattering depends on the angle between directions.
        const ANISOTROPIC = 0x2;

        /// Scattering from an oriented distribution of microflakes.
        const MICROFLAKE = 0x4;
    }
}

impl PhaseFunctionFlags {
    /// Tests a single flag and returns whether it is set or not.
    ///
    /// * `other` - Flag to match.
    pub fn matches(&self, other: Self) -> bool {
        self.intersects(other)
    }
}

/// Returns `true` if any bit of `flag` is set in the raw flag word.
///
/// * `flags` - Raw flag word as returned across a binding boundary.
/// * `flag`  - Flag to test.
pub fn has_flag(flags: u32, flag: PhaseFunctionFlags) -> bool {
    flags & flag.bits() != 0
}

impl fmt::Display for PhaseFunctionFlags {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        write!(f, "{}", names.join(" | "))
    }
}
