//! Numeric variants

use super::*;
use crate::lanes::*;
use crate::pbrt::Float;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Pairing of a floating point representation (scalar or packet) with a
/// spectral representation. Every phase function is generic over this
/// pairing; one instantiation never mixes variants.
pub trait Variant: Copy + Clone + Debug + Default + Send + Sync + 'static {
    /// Floating point type (`Float`, `Packet<N>` or a SIMD packet).
    type Float: Real;

    /// Spectral representation.
    type Spectrum: SpectralRepr;

    /// Returns the variant name, e.g. `scalar_rgb` or `packet_polarized_rgb`.
    fn name() -> String {
        format!("{}_{}", <Self::Float as Real>::PREFIX, Self::Spectrum::name())
    }

    /// Returns `true` if the floating point type holds more than one lane.
    fn is_packet() -> bool {
        <Self::Float as Real>::LANES > 1
    }
}

/// Concrete variant built from a float type `F` and spectrum type `S`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Var<F, S>(PhantomData<(F, S)>);

impl<F: Real, S: SpectralRepr> Variant for Var<F, S> {
    type Float = F;
    type Spectrum = S;
}

/// Floating point type of a variant.
pub type VFloat<V> = <V as Variant>::Float;

/// Active-lane mask type of a variant.
pub type VMask<V> = <<V as Variant>::Float as Real>::Mask;

/// Scalar variant sharing the spectrum of a packet variant.
pub type ScalarOf<S> = Var<Float, S>;

pub type ScalarMono = Var<Float, Mono>;
pub type ScalarRgb = Var<Float, Rgb>;
pub type ScalarSpectral = Var<Float, Spectral>;
pub type ScalarPolarized = Var<Float, Polarized<Rgb>>;
pub type PacketMono<const N: usize> = Var<Packet<N>, Mono>;
pub type PacketRgb<const N: usize> = Var<Packet<N>, Rgb>;
pub type PacketSpectral<const N: usize> = Var<Packet<N>, Spectral>;
pub type PacketPolarized<const N: usize> = Var<Packet<N>, Polarized<Rgb>>;
pub type WideMono = Var<Wide8, Mono>;
pub type WideRgb = Var<Wide8, Rgb>;
pub type WideSpectral = Var<Wide8, Spectral>;
pub type WidePolarized = Var<Wide8, Polarized<Rgb>>;

/// Returns a fully active mask for variant `V`.
#[inline(always)]
pub fn all_active<V: Variant>() -> VMask<V> {
    <VMask<V> as Mask>::splat(true)
}
