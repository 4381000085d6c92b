// ============================================================
// ParameterSpace Domain Type
// ============================================================
// The named axes of a hyperparameter search.
//
// Each axis is a parameter name plus the finite, ordered list
// of candidate values to try for it. Candidate values are
// `serde_json::Value`, so an axis can hold numbers, strings,
// or booleans without the search code interpreting them.
//
// Example:
//   let mut space = ParameterSpace::new();
//   space.insert("lr",         vec![json!(0.01), json!(0.1)]);
//   space.insert("batch_size", vec![json!(16), json!(32)]);
//   // 2 x 2 = 4 combinations to evaluate
//
// Names are unique: inserting an existing name replaces its
// candidate list in place, exactly like a map. Insertion order
// is preserved and is the order the expander walks the axes in.

use serde::{Deserialize, Serialize};

use crate::domain::combination::ParamValue;

/// A hyperparameter search space: an ordered mapping from
/// parameter name to its candidate values.
///
/// The space may be empty (zero parameters), and an axis may
/// have an empty candidate list (which collapses the whole
/// product to zero combinations).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpace {
    /// Axes in insertion order. Name uniqueness is maintained
    /// by `insert`, so this behaves as an ordered map.
    axes: Vec<(String, Vec<ParamValue>)>,
}

impl ParameterSpace {
    /// Create an empty parameter space
    pub fn new() -> Self {
        Self { axes: Vec::new() }
    }

    /// Add an axis, or replace the candidate list of an
    /// existing axis with the same name (its position in the
    /// iteration order is kept).
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<ParamValue>) {
        let name = name.into();
        match self.axes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None                => self.axes.push((name, values)),
        }
    }

    /// The candidate values of one axis, if present
    pub fn get(&self, name: &str) -> Option<&[ParamValue]> {
        self.axes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Iterate the axes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ParamValue])> {
        self.axes.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Number of parameters (axes) in the space
    pub fn param_count(&self) -> usize {
        self.axes.len()
    }

    /// True if the space has no parameters at all
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// The number of combinations a full expansion produces:
    /// the product of the candidate-list lengths.
    ///
    /// An empty space has cardinality 1 (the empty assignment);
    /// any empty candidate list makes the cardinality 0.
    /// Saturates at usize::MAX rather than overflowing.
    pub fn cardinality(&self) -> usize {
        self.axes
            .iter()
            .fold(1usize, |acc, (_, v)| acc.saturating_mul(v.len()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_preserves_order() {
        let mut space = ParameterSpace::new();
        space.insert("lr",    vec![json!(0.01)]);
        space.insert("batch", vec![json!(16)]);
        space.insert("units", vec![json!(8)]);

        let names: Vec<&str> = space.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["lr", "batch", "units"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut space = ParameterSpace::new();
        space.insert("lr",    vec![json!(0.01)]);
        space.insert("batch", vec![json!(16)]);

        // Same name again: the list changes, the position does not
        space.insert("lr", vec![json!(0.1), json!(1.0)]);

        assert_eq!(space.param_count(), 2);
        assert_eq!(space.get("lr").unwrap().len(), 2);
        let names: Vec<&str> = space.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["lr", "batch"]);
    }

    #[test]
    fn test_cardinality_is_product_of_lengths() {
        let mut space = ParameterSpace::new();
        space.insert("a", vec![json!(1), json!(2)]);
        space.insert("b", vec![json!(3)]);
        space.insert("c", vec![json!(4), json!(5), json!(6)]);
        assert_eq!(space.cardinality(), 2 * 1 * 3);
    }

    #[test]
    fn test_cardinality_of_empty_space_is_one() {
        assert_eq!(ParameterSpace::new().cardinality(), 1);
    }

    #[test]
    fn test_empty_axis_collapses_cardinality_to_zero() {
        let mut space = ParameterSpace::new();
        space.insert("lr",    vec![]);
        space.insert("batch", vec![json!(16), json!(32)]);
        assert_eq!(space.cardinality(), 0);
    }
}
