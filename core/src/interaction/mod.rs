//! Interactions

mod medium_interaction;

pub use medium_interaction::*;
