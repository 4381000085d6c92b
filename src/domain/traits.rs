// ============================================================
// Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the evaluator can score any model without knowing how it
// computes its predictions — a burn network, a remote
// endpoint, or a hand-written baseline all look the same
// behind the trait.
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.

use anyhow::Result;

// ─── Predictor ────────────────────────────────────────────────────────────────
/// Any component that can score a batch of inputs.
///
/// Scores are probabilities in [0, 1], one per input sample.
/// The evaluator thresholds them into boolean predictions.
///
/// Implementations:
///   - a trained burn model wrapped by the caller
///   - (tests) fixed-score stubs
pub trait Predictor {
    /// Whatever the model consumes — feature matrix, token
    /// batch, tensor handle. The evaluator never looks inside.
    type Input;

    /// Score every sample in the input.
    /// Returns one probability per sample, in input order.
    fn predict(&self, input: &Self::Input) -> Result<Vec<f32>>;
}
