//! Spectral representations

use std::fmt::Debug;
use std::marker::PhantomData;

/// Compile-time description of how radiance is represented.
pub trait SpectralRepr: Copy + Clone + Debug + Default + Send + Sync + 'static {
    /// Number of colour channels / wavelength samples carried per lane.
    const CHANNELS: usize;

    /// `true` if radiance is a Stokes vector transported with Mueller matrices.
    const IS_POLARIZED: bool = false;

    /// `true` if wavelengths are sampled rather than fixed.
    const IS_SPECTRAL: bool = false;

    /// `true` for a single intensity channel.
    const IS_MONOCHROMATIC: bool = false;

    /// Returns the name used to build variant names.
    fn name() -> String;
}

/// Single intensity channel.
#[derive(Copy, Clone, Debug, Default)]
pub struct Mono;

/// Linear RGB triplets.
#[derive(Copy, Clone, Debug, Default)]
pub struct Rgb;

/// Hero-wavelength spectral sampling with 4 wavelengths per path.
#[derive(Copy, Clone, Debug, Default)]
pub struct Spectral;

/// Polarized version of another representation.
#[derive(Copy, Clone, Debug, Default)]
pub struct Polarized<S>(PhantomData<S>);

impl SpectralRepr for Mono {
    const CHANNELS: usize = 1;
    const IS_MONOCHROMATIC: bool = true;

    fn name() -> String {
        String::from("mono")
    }
}

impl SpectralRepr for Rgb {
    const CHANNELS: usize = 3;

    fn name() -> String {
        String::from("rgb")
    }
}

impl SpectralRepr for Spectral {
    const CHANNELS: usize = 4;
    const IS_SPECTRAL: bool = true;

    fn name() -> String {
        String::from("spectral")
    }
}

impl<S: SpectralRepr> SpectralRepr for Polarized<S> {
    const CHANNELS: usize = S::CHANNELS;
    const IS_POLARIZED: bool = true;
    const IS_SPECTRAL: bool = S::IS_SPECTRAL;
    const IS_MONOCHROMATIC: bool = S::IS_MONOCHROMATIC;

    fn name() -> String {
        format!("polarized_{}", S::name())
    }
}
