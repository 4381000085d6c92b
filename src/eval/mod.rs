// ============================================================
// Evaluation Layer
// ============================================================
// Turns raw model scores into something a person can judge:
//
//   evaluator.rs — thresholded boolean predictions from any
//                  Predictor (default threshold 0.5)
//
//   confusion.rs — n-class confusion matrix from label pairs,
//                  with a row-normalised view (each row divided
//                  by its total, rounded to 2 decimals)
//
//   render.rs    — formats one or more matrices as a text grid
//                  so runs can be compared side by side
//
// Everything here works on plain slices and structs — the only
// model contact point is the Predictor trait from the domain
// layer, so the evaluator never depends on burn.

/// Thresholded predictions from a Predictor
pub mod evaluator;

/// Confusion matrix counts and normalisation
pub mod confusion;

/// Text-grid rendering of confusion matrices
pub mod render;
