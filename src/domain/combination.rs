use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single candidate value for one hyperparameter.
/// Opaque to the search code: numbers, strings, and booleans
/// all pass through unchanged and serialise losslessly.
pub type ParamValue = serde_json::Value;

/// One fully-specified parameter assignment: exactly one value
/// per parameter of the space it was expanded from.
///
/// Backed by a BTreeMap so equal assignments compare equal and
/// serialise to the same canonical, key-sorted JSON object —
/// which is also the on-disk `training_params.json` format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination {
    values: BTreeMap<String, ParamValue>,
}

/// The complete enumeration of all combinations of a space.
pub type CombinationSet = Vec<Combination>;

impl Combination {
    /// Create an empty assignment
    pub fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Assign a value to a parameter, replacing any previous one
    pub fn set(&mut self, name: impl Into<String>, value: ParamValue) {
        self.values.insert(name.into(), value);
    }

    /// Drop a parameter from the assignment
    pub fn unset(&mut self, name: &str) {
        self.values.remove(name);
    }

    /// The value assigned to a parameter, if any
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Number of assigned parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the assignment in sorted parameter-name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.values.iter()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_then_get() {
        let mut c = Combination::new();
        c.set("lr", json!(0.01));
        assert_eq!(c.get("lr"), Some(&json!(0.01)));
        assert_eq!(c.get("batch"), None);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_serialises_as_plain_json_object() {
        let mut c = Combination::new();
        c.set("lr", json!(0.01));
        c.set("batch", json!(16));
        // Keys come out sorted — canonical form
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"batch":16,"lr":0.01}"#);
    }

    #[test]
    fn test_equal_assignments_compare_equal() {
        let mut a = Combination::new();
        a.set("x", json!(1));
        a.set("y", json!("on"));
        let mut b = Combination::new();
        b.set("y", json!("on"));
        b.set("x", json!(1));
        assert_eq!(a, b);
    }
}
