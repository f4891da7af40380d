//! Core

extern crate bitflags;
#[macro_use]
extern crate hexf;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

// Re-export.
pub mod app;
pub mod geometry;
pub mod interaction;
pub mod lanes;
pub mod medium;
pub mod paramset;
pub mod pbrt;
pub mod rng;
pub mod sampler;
pub mod sampling;
pub mod spectrum;
