// ============================================================
// ML Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the weight-record calls in `infra`.
//
// Why isolate Burn code here?
//   - If Burn's API changes, we only update this layer
//   - Other layers are testable without tensors
//
// What's in this layer:
//
//   attention.rs — additive (Bahdanau-style) attention:
//                  two projection layers and a scoring layer,
//                  tanh score, softmax weights over the step
//                  axis, weighted-sum context vector
//
// Reference: Bahdanau et al. (2015) Neural Machine Translation
//            by Jointly Learning to Align and Translate

/// Additive attention module
pub mod attention;
