// ============================================================
// Artifact Store
// ============================================================
// Saves and restores everything a training run leaves behind,
// scoped per model name:
//
//   <base>/
//     <model_name>/
//       model.mpk.gz             ← weights (CompactRecorder)
//       evaluation_results.json  ← metrics of the final eval
//       training_params.json     ← the combination trained with
//
// Why save the training parameters next to the weights?
//   A grid search produces one model per combination. Keeping
//   the combination in the model's own directory means any
//   saved model can always answer "what settings produced
//   you?" — without that, checkpoints from a long sweep are
//   indistinguishable.
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Compresses with gzip for smaller file size
//   - Type-safe: loading fails if architecture doesn't match

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use burn::{
    module::Module,
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::combination::Combination;

const EVAL_RESULTS_FILE: &str = "evaluation_results.json";
const TRAIN_PARAMS_FILE: &str = "training_params.json";
// CompactRecorder appends its own .mpk.gz extension
const MODEL_FILE_STEM: &str = "model";

/// Manages the artifact directory tree for a family of models.
/// All files live under the configured base directory.
pub struct ArtifactStore {
    /// Path to the base directory holding one subdirectory
    /// per model name
    base: PathBuf,
}

impl ArtifactStore {
    /// Create a new ArtifactStore.
    /// Creates the base directory if it doesn't already exist.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        // create_dir_all creates parent directories too, like `mkdir -p`
        // .ok() ignores the error if the directory already exists
        fs::create_dir_all(&base).ok();
        Self { base }
    }

    /// The base directory all model directories live under
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    /// The directory a given model's artifacts live in
    pub fn model_dir(&self, model_name: &str) -> PathBuf {
        self.base.join(model_name)
    }

    /// Create the directory for a model name (no-op if present)
    /// and return its path.
    pub fn create_model_dir(&self, model_name: &str) -> Result<PathBuf> {
        let dir = self.model_dir(model_name);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create model directory '{}'", dir.display()))?;
        Ok(dir)
    }

    /// Save model weights under the model's directory.
    ///
    /// Uses Burn's CompactRecorder which:
    ///   1. Calls model.into_record() to extract all parameters
    ///   2. Serialises to MessagePack binary format
    ///   3. Compresses with gzip
    ///   4. Writes to {base}/{model_name}/model.mpk.gz
    pub fn save_model<B: Backend, M: Module<B>>(
        &self,
        model_name: &str,
        model:      &M,
    ) -> Result<()> {
        let dir  = self.create_model_dir(model_name)?;
        let path = dir.join(MODEL_FILE_STEM);

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save model to '{}'", path.display()))?;

        tracing::debug!("Saved model weights for '{}'", model_name);
        Ok(())
    }

    /// Load model weights back into a freshly built model.
    ///
    /// The model parameter must have the correct architecture
    /// (matching the saved record) or loading will fail.
    /// load_record() returns a new model with the loaded weights.
    pub fn load_model<B: Backend, M: Module<B>>(
        &self,
        model_name: &str,
        model:      M,
        device:     &B::Device,
    ) -> Result<M> {
        let path = self.model_dir(model_name).join(MODEL_FILE_STEM);

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load model from '{}'. Have you saved '{}' first?",
                    path.display(),
                    model_name,
                )
            })?;

        tracing::info!("Loaded model weights for '{}'", model_name);
        Ok(model.load_record(record))
    }

    /// Save the evaluation results of a model as JSON.
    /// Any serialisable payload works — a metrics struct, a
    /// map, or a serialised ConfusionMatrix.
    pub fn save_evaluation_results<T: Serialize>(
        &self,
        model_name: &str,
        results:    &T,
    ) -> Result<()> {
        self.write_json(model_name, EVAL_RESULTS_FILE, results)
    }

    /// Load previously saved evaluation results.
    pub fn load_evaluation_results<T: DeserializeOwned>(&self, model_name: &str) -> Result<T> {
        self.read_json(model_name, EVAL_RESULTS_FILE)
    }

    /// Save the training parameters (one grid-search
    /// combination) a model was trained with.
    pub fn save_training_parameters(
        &self,
        model_name: &str,
        params:     &Combination,
    ) -> Result<()> {
        self.write_json(model_name, TRAIN_PARAMS_FILE, params)
    }

    /// Load the training parameters a model was trained with.
    pub fn load_training_parameters(&self, model_name: &str) -> Result<Combination> {
        self.read_json(model_name, TRAIN_PARAMS_FILE)
    }

    /// Write one JSON artifact into the model's directory.
    fn write_json<T: Serialize>(&self, model_name: &str, file: &str, value: &T) -> Result<()> {
        let dir  = self.create_model_dir(model_name)?;
        let path = dir.join(file);

        // to_string_pretty adds indentation for readability
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Saved '{}' for model '{}'", file, model_name);
        Ok(())
    }

    /// Read one JSON artifact from the model's directory.
    fn read_json<T: DeserializeOwned>(&self, model_name: &str, file: &str) -> Result<T> {
        let path = self.model_dir(model_name).join(file);

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read '{}'. Have you saved artifacts for '{}' first?",
                    path.display(),
                    model_name,
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed JSON in '{}'", path.display()))
    }
}
