//! Phase Functions

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod henyey_greenstein;
mod isotropic;
mod rayleigh;

// Re-export
pub use henyey_greenstein::*;
pub use isotropic::*;
pub use rayleigh::*;

#[cfg(test)]
mod testing;
