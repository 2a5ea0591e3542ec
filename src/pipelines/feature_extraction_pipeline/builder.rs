use std::path::PathBuf;
use tracing::info;

use super::options::FeatureExtractionOptions;
use super::pipeline::FeatureExtractionPipeline;
use crate::core::{EmbedderError, Result};
use crate::loaders::{HfLoader, HubSettings, ModelSource, TokenizerLoader, WeightsLoader};
use crate::models::{Encoder, ModelConfig};
use crate::pipelines::utils::{DeviceRequest, DeviceSelectable, WeightDType};

pub struct FeatureExtractionPipelineBuilder {
    model_id: String,
    options: FeatureExtractionOptions,
}

impl FeatureExtractionPipelineBuilder {
    /// Start building a pipeline for a Hub model id or a local model directory.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            options: FeatureExtractionOptions::default(),
        }
    }

    /// Replace all options at once.
    pub fn options(mut self, options: FeatureExtractionOptions) -> Self {
        self.options = options;
        self
    }

    /// Pin a Hub branch, tag or commit. Ignored for local directories.
    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.options.revision = Some(revision.into());
        self
    }

    /// Load `tokenizer.json` from another Hub repo or local directory.
    pub fn tokenizer(mut self, tokenizer_id: impl Into<String>) -> Self {
        self.options.tokenizer = Some(tokenizer_id.into());
        self
    }

    /// Truncate every input to `max_length` tokens, special tokens included.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.options.max_length = Some(max_length);
        self
    }

    /// Weight precision. f16/bf16 are only accepted for BERT models.
    pub fn dtype(mut self, dtype: WeightDType) -> Self {
        self.options.dtype = dtype;
        self
    }

    /// Directory used for Hub downloads instead of the default cache.
    pub fn cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.options.cache_dir = Some(cache_dir.into());
        self
    }

    /// Access token for private or gated Hub repositories.
    pub fn hf_token(mut self, token: impl Into<String>) -> Self {
        self.options.hf_token = Some(token.into());
        self
    }

    /// Resolve the model, load tokenizer and weights, and return a ready pipeline.
    ///
    /// Every failure is reported as [`EmbedderError::ModelLoad`].
    pub fn build(self) -> Result<FeatureExtractionPipeline> {
        let model_id = self.model_id.clone();
        self.try_build()
            .map_err(|source| EmbedderError::model_load(&model_id, source))
    }

    fn try_build(self) -> anyhow::Result<FeatureExtractionPipeline> {
        let Self { model_id, options } = self;

        let device = options.device.clone().resolve()?;
        let settings = HubSettings {
            cache_dir: options.cache_dir.clone(),
            token: options.hf_token.clone(),
        };

        let source = ModelSource::resolve(&model_id, options.revision.as_deref())?;
        info!(model = %model_id, ?source, "resolving model");
        let files = HfLoader::new(source, &settings)?;

        let config = ModelConfig::from_file(&files.load("config.json")?)?;

        let tokenizer = match &options.tokenizer {
            Some(tokenizer_id) => {
                let tokenizer_files =
                    HfLoader::new(ModelSource::resolve(tokenizer_id, None)?, &settings)?;
                TokenizerLoader::new(&tokenizer_files).load()?
            }
            None => TokenizerLoader::new(&files).load()?,
        };

        let (weights, format) = WeightsLoader::new(&files).load()?;
        let encoder = Encoder::from_weights(
            &config,
            &weights,
            format,
            options.dtype.dtype(),
            &device,
        )?;

        info!(
            model = %model_id,
            arch = %config.architecture(),
            hidden_size = config.hidden_size(),
            device = ?device.location(),
            "loaded feature-extraction model"
        );

        FeatureExtractionPipeline::from_parts(
            model_id,
            config,
            encoder,
            tokenizer,
            device,
            options.max_length,
        )
    }
}

impl DeviceSelectable for FeatureExtractionPipelineBuilder {
    fn device_request_mut(&mut self) -> &mut DeviceRequest {
        &mut self.options.device
    }
}
