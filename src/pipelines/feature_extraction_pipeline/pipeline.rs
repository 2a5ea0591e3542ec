use candle_core::{DType, Device, Tensor};
use tokenizers::{Encoding, Tokenizer, TruncationParams};

use super::feature_extractor::FeatureExtractor;
use crate::models::{Architecture, Encoder, ModelConfig};

/// Feature-extraction pipeline backed by a pretrained encoder.
pub struct FeatureExtractionPipeline {
    pub(crate) model_id: String,
    pub(crate) config: ModelConfig,
    pub(crate) encoder: Encoder,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) device: Device,
}

impl FeatureExtractionPipeline {
    /// Assemble a pipeline from already loaded parts.
    ///
    /// Padding is disabled on the tokenizer and truncation set to `max_length`.
    pub fn from_parts(
        model_id: impl Into<String>,
        config: ModelConfig,
        encoder: Encoder,
        mut tokenizer: Tokenizer,
        device: Device,
        max_length: Option<usize>,
    ) -> anyhow::Result<Self> {
        tokenizer.with_padding(None);
        let truncation = max_length.map(|max_length| TruncationParams {
            max_length,
            ..Default::default()
        });
        tokenizer
            .with_truncation(truncation)
            .map_err(anyhow::Error::msg)?;

        Ok(Self {
            model_id: model_id.into(),
            config,
            encoder,
            tokenizer,
            device,
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn architecture(&self) -> Architecture {
        self.config.architecture()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    fn encode(&self, text: &str) -> anyhow::Result<Encoding> {
        self.tokenizer
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("tokenization error: {e}"))
    }
}

impl FeatureExtractor for FeatureExtractionPipeline {
    fn extract_features(&self, text: &str) -> anyhow::Result<Tensor> {
        let encoding = self.encode(text)?;
        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Ok(Tensor::zeros(
                (0, self.hidden_size()),
                DType::F32,
                &self.device,
            )?);
        }

        let input_ids = Tensor::new(ids, &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        // (1, tokens, hidden) -> (tokens, hidden)
        let hidden_states = self.encoder.forward(&input_ids, &attention_mask)?;
        Ok(hidden_states.squeeze(0)?)
    }

    fn special_tokens_mask(&self, text: &str) -> anyhow::Result<Vec<bool>> {
        let encoding = self.encode(text)?;
        Ok(encoding
            .get_special_tokens_mask()
            .iter()
            .map(|&flag| flag != 0)
            .collect())
    }

    fn hidden_size(&self) -> usize {
        self.config.hidden_size()
    }
}
