//! Medium
//!
//! Phase functions describe the angular distribution of light scattered at a
//! point inside a participating medium.

mod batched;
mod context;
mod error;
mod flags;
mod phase_function;
mod trampoline;
mod validation;

// Re-exports
pub use batched::*;
pub use context::*;
pub use error::*;
pub use flags::*;
pub use phase_function::*;
pub use trampoline::*;
pub use validation::*;
