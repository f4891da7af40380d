//! Spectrum
//!
//! Phase functions return scalar densities, so spectral representations only
//! appear here as compile-time markers that select the behaviour of a model
//! (e.g. whether polarization is requested).

mod representation;
mod variant;

// Re-export
pub use representation::*;
pub use variant::*;
