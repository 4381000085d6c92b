// ============================================================
// Infrastructure Layer
// ============================================================
// Cross-cutting persistence concerns:
//
//   artifacts.rs — Saving and loading everything a trained
//                  model leaves behind. Uses Burn's
//                  CompactRecorder for the weights and
//                  serde_json for evaluation results and
//                  training parameters, all scoped under
//                  <base>/<model_name>/.
//
// Why is this a separate layer?
//   Persistence is used by callers of every other layer but
//   belongs to none of them. Keeping it here makes it easy to
//   swap implementations (e.g. file artifacts for S3 cloud
//   storage) without touching search or evaluation code.

/// Model artifact saving and loading
pub mod artifacts;
