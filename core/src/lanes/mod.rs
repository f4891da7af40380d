//! Numeric lanes.
//!
//! Every scattering algorithm is written once against the `Real` trait and
//! instantiated either for a single `Float` (one query at a time) or for a
//! packet of lanes (several queries side by side). `Packet<N>` keeps its
//! lanes in a plain array, `Wide4`/`Wide8` keep them in SIMD registers.
//! Lane activity is tracked by the matching `Mask` type: `bool` for scalars
//! and `LaneMask<N>` for packets.

mod gather;
mod mask;
mod packet;
mod real;
mod simd;

// Re-export
pub use gather::*;
pub use mask::*;
pub use packet::*;
pub use real::*;
pub use simd::*;
