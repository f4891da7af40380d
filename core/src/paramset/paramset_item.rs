//! Parameter Set Item

use std::cell::Cell;

/// Stores the values of a single named parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSetItem<T> {
    /// The values.
    pub values: Vec<T>,

    /// Set once a lookup has read this item.
    pub looked_up: Cell<bool>,
}

impl<T> ParamSetItem<T> {
    /// Create a new parameter set item.
    ///
    /// * `values` - The values.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            looked_up: Cell::new(false),
        }
    }
}
