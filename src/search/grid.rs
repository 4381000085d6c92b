// ============================================================
// Grid Expansion
// ============================================================
// Expands a ParameterSpace into every possible assignment of
// one candidate value per parameter — the full grid a
// hyperparameter search has to evaluate.
//
// Example with lr = [0.01, 0.1] and batch = [16, 32]:
//
//   {lr: 0.01, batch: 16}
//   {lr: 0.01, batch: 32}
//   {lr: 0.1,  batch: 16}
//   {lr: 0.1,  batch: 32}
//
// Structurally this is a depth-first walk of a tree whose
// depth is the parameter count and whose branching factor at
// each level is that parameter's candidate count. The leaves
// are the returned combinations.
//
// Edge cases the algorithm must get right:
//   - zero parameters   → exactly ONE empty combination
//                         (the identity of the product)
//   - any empty axis    → ZERO combinations, because no value
//                         can be chosen for that parameter —
//                         the axis is never silently skipped
//
// The accumulator is a single Combination that is extended
// before each recursive call and retracted after it
// (backtracking), so no intermediate copies of the remaining
// axes are ever made. Cloning happens once per leaf, which is
// exactly the output the caller owns.

use crate::domain::combination::{Combination, CombinationSet, ParamValue};
use crate::domain::param_space::ParameterSpace;

/// Expand a parameter space into all of its combinations.
///
/// The result length equals `space.cardinality()`: the product
/// of the candidate-list lengths (1 for an empty space, 0 if
/// any axis has no candidates). Every combination holds exactly
/// one value per parameter of `space`, with no duplicates and
/// no omissions.
///
/// Ordering: axes are processed in insertion order, so the
/// first-inserted parameter varies slowest and the
/// last-inserted varies fastest. Equal input always produces
/// the identical sequence.
///
/// The input is borrowed and never mutated; the returned
/// combinations are freshly built and share nothing with each
/// other or with this function.
pub fn expand(space: &ParameterSpace) -> CombinationSet {
    let axes: Vec<(&str, _)> = space.iter().collect();

    let mut combinations = Vec::with_capacity(space.cardinality());
    let mut partial      = Combination::new();
    expand_axes(&axes, &mut partial, &mut combinations);

    tracing::debug!(
        "Expanded {} parameters into {} combinations",
        space.param_count(),
        combinations.len(),
    );
    combinations
}

/// Recursive worker: assign each candidate of the first
/// remaining axis in turn, recurse on the rest, then retract
/// the assignment so the caller's loop sees a clean partial.
fn expand_axes(
    axes:    &[(&str, &[ParamValue])],
    partial: &mut Combination,
    out:     &mut Vec<Combination>,
) {
    // No axes left: the partial assignment is complete — emit it.
    let Some(((name, values), rest)) = axes.split_first() else {
        out.push(partial.clone());
        return;
    };

    // An empty candidate list means this loop body never runs,
    // which correctly produces zero combinations for the branch.
    for value in values.iter() {
        partial.set(*name, value.clone());
        expand_axes(rest, partial, out);
    }
    partial.unset(name);
}
