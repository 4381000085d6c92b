// ============================================================
// Confusion Matrix
// ============================================================
// Counts how often each true class was predicted as each
// class. Indexed [true_class][predicted_class], so row i
// holds everything the model did with samples whose real
// label is i.
//
// Example (binary, rows = truth):
//
//                 predicted 0   predicted 1
//   truth 0            18            2
//   truth 1             5           25
//
// Row normalisation divides each row by its total, giving
// per-class recall on the diagonal. Values are rounded to 2
// decimals for reporting. A row with no samples normalises to
// zeros — there is nothing to divide by.

use serde::{Deserialize, Serialize};

/// A square grid of prediction counts, one row per true class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    /// Build a matrix from parallel slices of true and
    /// predicted class indices. The class count is inferred
    /// from the largest index seen in either slice.
    ///
    /// # Panics
    /// Panics if the slices have different lengths.
    pub fn from_labels(truth: &[usize], predicted: &[usize]) -> Self {
        assert_eq!(
            truth.len(),
            predicted.len(),
            "truth has {} labels but predicted has {}",
            truth.len(),
            predicted.len(),
        );

        let num_classes = truth
            .iter()
            .chain(predicted.iter())
            .map(|&c| c + 1)
            .max()
            .unwrap_or(0);

        let mut counts = vec![vec![0u64; num_classes]; num_classes];
        for (&t, &p) in truth.iter().zip(predicted.iter()) {
            counts[t][p] += 1;
        }

        tracing::debug!(
            "Confusion matrix over {} samples, {} classes",
            truth.len(),
            num_classes,
        );
        Self { counts }
    }

    /// Build a binary matrix from boolean labels:
    /// `false` is class 0, `true` is class 1.
    ///
    /// # Panics
    /// Panics if the slices have different lengths.
    pub fn from_binary(truth: &[bool], predicted: &[bool]) -> Self {
        let as_class = |labels: &[bool]| -> Vec<usize> {
            labels.iter().map(|&b| b as usize).collect()
        };
        // Force both classes to exist even if one never occurs,
        // so a binary evaluation is always a 2x2 grid
        let mut m = Self::from_labels(&as_class(truth), &as_class(predicted));
        while m.counts.len() < 2 {
            let n = m.counts.len();
            for row in &mut m.counts {
                row.push(0);
            }
            m.counts.push(vec![0; n + 1]);
        }
        m
    }

    /// Number of classes (rows/columns)
    pub fn num_classes(&self) -> usize {
        self.counts.len()
    }

    /// Raw counts, indexed [true_class][predicted_class]
    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }

    /// Total number of samples counted
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Each row divided by its total, rounded to 2 decimals.
    /// Rows with no samples come back as zeros.
    pub fn row_normalized(&self) -> Vec<Vec<f64>> {
        self.counts
            .iter()
            .map(|row| {
                let row_sum: u64 = row.iter().sum();
                row.iter()
                    .map(|&c| {
                        if row_sum == 0 {
                            0.0
                        } else {
                            round2(c as f64 / row_sum as f64)
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Round to 2 decimal places for reporting
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
