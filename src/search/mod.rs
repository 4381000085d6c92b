// ============================================================
// Search Layer
// ============================================================
// The original algorithmic content of the library: expanding
// a hyperparameter search space into the full set of concrete
// experiment configurations.
//
//   ParameterSpace
//       │
//       ▼
//   expand()           → every combination of the space
//       │
//       ▼
//   CombinationSet     → one training run per element
//
// The expansion is pure: no I/O, no randomness, no state
// shared between calls. A caller drives its own search loop
// over the result (train one model per combination, persist
// each with the artifact store, compare with the evaluator).

/// Cartesian-product expansion of a parameter space
pub mod grid;
