//! Phase function errors

use std::error::Error;
use std::fmt;

/// Errors raised while building or querying phase functions.
#[derive(Clone, Debug, PartialEq)]
pub enum PhaseFunctionError {
    /// An extension model did not override a mandatory operation. This is a
    /// configuration error and must not be retried.
    NotImplemented {
        /// Name of the extension class.
        class: String,

        /// Name of the missing operation.
        method: &'static str,
    },

    /// A construction property holds an invalid value.
    InvalidParameter {
        /// Property name.
        name: String,

        /// What is wrong with it.
        reason: String,
    },

    /// No factory is registered under the requested name.
    UnknownType(String),
}

impl fmt::Display for PhaseFunctionError {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented { class, method } => write!(
                f,
                "Tried to call pure virtual function \"{}::{}\" that was not overridden",
                class, method
            ),
            Self::InvalidParameter { name, reason } => write!(f, "Invalid parameter \"{}\": {}", name, reason),
            Self::UnknownType(name) => write!(f, "No phase function registered as \"{}\"", name),
        }
    }
}

impl Error for PhaseFunctionError {}
