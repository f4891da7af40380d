//! Parameter Sets

use crate::pbrt::*;
use std::collections::HashMap;
use std::fmt;

mod paramset_item;

// Re-export
pub use paramset_item::*;

/// A hashmap of parameter sets stored by name.
pub type ParamSetMap<T> = HashMap<String, ParamSetItem<T>>;

/// Flat, string-keyed dictionary of typed values that scene loading hands to
/// model constructors.
#[derive(Clone, Debug, Default)]
pub struct ParamSet {
    pub bools: ParamSetMap<bool>,
    pub ints: ParamSetMap<Int>,
    pub floats: ParamSetMap<Float>,
    pub strings: ParamSetMap<String>,
}

/// Define a macro that can be used to generate a function for adding/replacing
/// parameter set item.
macro_rules! paramset_add {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&mut self, name: &str, values: &[$t]) {
            self.$paramset
                .insert(String::from(name), ParamSetItem::new(values.to_vec()));
        }
    };
}

/// Define a macro that can be used to generate a function for removing
/// parameter set item.
macro_rules! paramset_erase {
    ($func: ident, $paramset: ident) => {
        pub fn $func(&mut self, name: &str) -> bool {
            self.$paramset.remove(name).is_some()
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a single item.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            match self.$paramset.get(name) {
                Some(param) if param.values.len() == 1 => {
                    param.looked_up.set(true);
                    param.values[0].clone()
                }
                _ => default,
            }
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a list.
macro_rules! paramset_find {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str) -> Vec<$t> {
            match self.$paramset.get(name) {
                Some(param) => {
                    param.looked_up.set(true);
                    param.values.clone()
                }
                None => vec![],
            }
        }
    };
}

/// Define a macro that can be used to print parameter set items.
macro_rules! display_param {
    ($params: expr, $param_type: literal, $formatter: expr) => {
        let mut names: Vec<&String> = $params.keys().collect();
        names.sort();
        for name in names {
            let values: Vec<String> = $params[name].values.iter().map(|v| format!("{}", v)).collect();
            writeln!($formatter, "\"{} {}\" [ {} ]", $param_type, name, values.join(" "))?;
        }
    };
}

/// Define a macro that collects names of parameters never looked up.
macro_rules! collect_unused {
    ($params: expr, $param_type: literal, $unused: expr) => {
        for (name, param) in $params.iter() {
            if !param.looked_up.get() {
                $unused.push(format!("{} {}", $param_type, name));
            }
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self::default()
    }

    paramset_erase!(erase_bool, bools);
    paramset_find_one!(find_one_bool, bool, bools);
    paramset_find!(find_bool, bool, bools);
    paramset_add!(add_bool, bool, bools);

    paramset_erase!(erase_int, ints);
    paramset_find_one!(find_one_int, Int, ints);
    paramset_find!(find_int, Int, ints);
    paramset_add!(add_int, Int, ints);

    paramset_erase!(erase_float, floats);
    paramset_find_one!(find_one_float, Float, floats);
    paramset_find!(find_float, Float, floats);
    paramset_add!(add_float, Float, floats);

    paramset_erase!(erase_string, strings);
    paramset_find_one!(find_one_string, String, strings);
    paramset_find!(find_string, String, strings);
    paramset_add!(add_string, String, strings);

    /// Returns `true` if no parameters are stored.
    pub fn is_empty(&self) -> bool {
        self.bools.is_empty() && self.ints.is_empty() && self.floats.is_empty() && self.strings.is_empty()
    }

    /// Returns the names of parameters that were never looked up, sorted and
    /// prefixed with their type.
    pub fn unused(&self) -> Vec<String> {
        let mut unused = vec![];
        collect_unused!(self.bools, "bool", unused);
        collect_unused!(self.ints, "integer", unused);
        collect_unused!(self.floats, "float", unused);
        collect_unused!(self.strings, "string", unused);
        unused.sort();
        unused
    }

    /// Logs a warning for every parameter that was never looked up. Unknown
    /// parameters are ignored rather than treated as errors.
    ///
    /// * `context` - Name of the object that consumed the parameters.
    pub fn report_unused(&self, context: &str) {
        for name in self.unused() {
            warn!("Parameter \"{}\" unused by \"{}\".", name, context);
        }
    }

    /// Clear all parameter set items.
    pub fn clear(&mut self) {
        self.bools.clear();
        self.ints.clear();
        self.floats.clear();
        self.strings.clear();
    }
}

impl fmt::Display for ParamSet {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_param!(self.bools, "bool", f);
        display_param!(self.ints, "integer", f);
        display_param!(self.floats, "float", f);
        display_param!(self.strings, "string", f);
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn find_one_defaults() {
        let ps = ParamSet::new();
        assert_eq!(ps.find_one_float("g", 0.8), 0.8);
        assert_eq!(ps.find_one_string("id", String::new()), "");
        assert!(ps.is_empty());
    }

    #[test]
    fn find_one_requires_single_value() {
        let mut ps = ParamSet::new();
        ps.add_float("g", &[0.1, 0.2]);
        assert_eq!(ps.find_one_float("g", 0.5), 0.5);
        assert_eq!(ps.find_float("g"), vec![0.1, 0.2]);
    }

    #[test]
    fn unused_parameters() {
        let mut ps = ParamSet::new();
        ps.add_float("g", &[0.3]);
        ps.add_string("id", &[String::from("fog")]);
        ps.add_bool("bogus", &[true]);
        assert_eq!(ps.unused().len(), 3);

        let _ = ps.find_one_float("g", 0.0);
        let _ = ps.find_one_string("id", String::new());
        assert_eq!(ps.unused(), vec![String::from("bool bogus")]);
    }

    #[test]
    fn erase_and_display() {
        let mut ps = ParamSet::new();
        ps.add_int("seed", &[4]);
        ps.add_float("g", &[0.5]);
        assert_eq!(format!("{}", ps), "\"integer seed\" [ 4 ]\n\"float g\" [ 0.5 ]\n");
        assert!(ps.erase_int("seed"));
        assert!(!ps.erase_int("seed"));
        ps.clear();
        assert!(ps.is_empty());
    }

    proptest! {
        #[test]
        fn add_then_find(v in -100.0..100.0f32) {
            let mut ps = ParamSet::new();
            ps.add_float("value", &[v]);
            prop_assert_eq!(ps.find_one_float("value", 0.0), v);
        }
    }
}
