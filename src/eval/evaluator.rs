// ============================================================
// Evaluator — Thresholded Predictions
// ============================================================
// A binary classifier outputs a probability per sample; the
// decision threshold turns that into a yes/no prediction.
//
// The cut is strict: a score equal to the threshold maps to
// `false`. With the default threshold of 0.5 a maximally
// uncertain model (score exactly 0.5) predicts the negative
// class.

use anyhow::Result;

use crate::domain::traits::Predictor;

/// The conventional decision threshold for a balanced
/// binary classifier
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Scores models through the Predictor trait and thresholds
/// their output into boolean predictions.
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Score `input` with `model` and threshold the result.
    /// Returns one boolean per sample: `true` where the score
    /// is strictly greater than `threshold`.
    pub fn make_predictions<P: Predictor>(
        &self,
        model:     &P,
        input:     &P::Input,
        threshold: f32,
    ) -> Result<Vec<bool>> {
        let scores = model.predict(input)?;
        tracing::debug!(
            "Thresholding {} scores at {:.2}",
            scores.len(),
            threshold,
        );
        Ok(threshold_scores(&scores, threshold))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Threshold a slice of scores directly, without a model.
/// Useful when scores were computed elsewhere (or loaded from
/// saved evaluation results).
pub fn threshold_scores(scores: &[f32], threshold: f32) -> Vec<bool> {
    scores.iter().map(|&s| s > threshold).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-score stub standing in for a trained model
    struct FixedScores(Vec<f32>);

    impl Predictor for FixedScores {
        type Input = usize;

        fn predict(&self, _input: &usize) -> Result<Vec<f32>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly 0.5 is NOT above the default threshold
        let preds = threshold_scores(&[0.49, 0.5, 0.51], DEFAULT_THRESHOLD);
        assert_eq!(preds, vec![false, false, true]);
    }

    #[test]
    fn test_custom_threshold() {
        let preds = threshold_scores(&[0.1, 0.2, 0.3], 0.15);
        assert_eq!(preds, vec![false, true, true]);
    }

    #[test]
    fn test_make_predictions_uses_model_scores() {
        let model = FixedScores(vec![0.9, 0.2, 0.7]);
        let preds = Evaluator::new()
            .make_predictions(&model, &3, DEFAULT_THRESHOLD)
            .unwrap();
        assert_eq!(preds, vec![true, false, true]);
    }

    #[test]
    fn test_empty_scores_give_empty_predictions() {
        assert!(threshold_scores(&[], DEFAULT_THRESHOLD).is_empty());
    }
}
