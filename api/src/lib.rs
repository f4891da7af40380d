//! API

#[macro_use]
extern crate log;

mod registry;

// Re-export
pub use registry::*;
