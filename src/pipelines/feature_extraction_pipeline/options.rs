use serde::Deserialize;
use std::path::PathBuf;

use crate::pipelines::utils::{DeviceRequest, WeightDType};

/// Options recognized when building a [`FeatureExtractionPipeline`](super::FeatureExtractionPipeline).
///
/// Every field is optional when deserialized; missing fields take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeatureExtractionOptions {
    /// Hub revision (branch, tag or commit) of the model. Ignored for local directories.
    pub revision: Option<String>,
    /// Load the tokenizer from another Hub repository or local directory.
    pub tokenizer: Option<String>,
    /// Truncate inputs to this many tokens, special tokens included.
    pub max_length: Option<usize>,
    /// Precision of the loaded weights.
    pub dtype: WeightDType,
    /// Device the model runs on.
    pub device: DeviceRequest,
    /// Hub cache directory.
    pub cache_dir: Option<PathBuf>,
    /// Hub access token for gated or private models.
    pub hf_token: Option<String>,
}
