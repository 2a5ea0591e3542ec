use candle_core::{DType, Device, Result, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::{bert, distilbert, modernbert, xlm_roberta};
use std::path::Path;

use super::config::{Architecture, ModelConfig};
use crate::loaders::WeightsFormat;

enum EncoderKind {
    Bert(bert::BertModel),
    DistilBert(distilbert::DistilBertModel),
    ModernBert(modernbert::ModernBert),
    XlmRoberta(xlm_roberta::XLMRobertaModel),
}

/// A transformer encoder returning the last hidden state for every token.
pub struct Encoder {
    inner: EncoderKind,
    span: tracing::Span,
}

impl Encoder {
    /// Build the encoder described by `config` from a [`VarBuilder`].
    ///
    /// Only BERT accepts f16/bf16 weights; other architectures fail here
    /// unless `vb` is f32.
    pub fn load(config: &ModelConfig, vb: VarBuilder) -> anyhow::Result<Self> {
        let architecture = config.architecture();
        let dtype = vb.dtype();
        if dtype != DType::F32 && !architecture.supports_half_precision() {
            anyhow::bail!("{architecture} encoders only run with f32 weights, got {dtype:?}");
        }

        let inner = match architecture {
            Architecture::Bert => {
                let bert_config: bert::Config = config.parse()?;
                EncoderKind::Bert(bert::BertModel::load(vb, &bert_config)?)
            }
            Architecture::DistilBert => {
                let distilbert_config: distilbert::Config = config.parse()?;
                EncoderKind::DistilBert(distilbert::DistilBertModel::load(vb, &distilbert_config)?)
            }
            Architecture::ModernBert => {
                let modernbert_config: modernbert::Config = config.parse()?;
                EncoderKind::ModernBert(modernbert::ModernBert::load(vb, &modernbert_config)?)
            }
            Architecture::XlmRoberta => {
                let roberta_config: xlm_roberta::Config = config.parse()?;
                // base-model checkpoints have no prefix, masked-LM ones use `roberta.`
                let model = match xlm_roberta::XLMRobertaModel::new(&roberta_config, vb.clone()) {
                    Ok(model) => model,
                    Err(unprefixed) => {
                        xlm_roberta::XLMRobertaModel::new(&roberta_config, vb.pp("roberta"))
                            .map_err(|_| unprefixed)?
                    }
                };
                EncoderKind::XlmRoberta(model)
            }
        };
        let span = tracing::span!(tracing::Level::TRACE, "encoder", arch = %architecture);
        Ok(Self { inner, span })
    }

    /// Load weights from disk and build the encoder.
    pub fn from_weights(
        config: &ModelConfig,
        weights: &Path,
        format: WeightsFormat,
        dtype: DType,
        device: &Device,
    ) -> anyhow::Result<Self> {
        let vb = match format {
            // SAFETY: the weights file is not modified while the encoder is alive.
            WeightsFormat::Safetensors => unsafe {
                VarBuilder::from_mmaped_safetensors(&[weights], dtype, device)?
            },
            WeightsFormat::PyTorch => VarBuilder::from_pth(weights, dtype, device)?,
        };
        Self::load(config, vb)
    }

    /// Forward pass.
    ///
    /// * `input_ids` - `(batch, seq_len)` token ids
    /// * `attention_mask` - `(batch, seq_len)`, 1 for real tokens
    ///
    /// Returns hidden states of shape `(batch, seq_len, hidden_size)`.
    pub fn forward(&self, input_ids: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
        let _enter = self.span.enter();
        match &self.inner {
            EncoderKind::Bert(model) => {
                let token_type_ids = input_ids.zeros_like()?;
                model.forward(input_ids, &token_type_ids, Some(attention_mask))
            }
            EncoderKind::DistilBert(model) => {
                // DistilBERT masks the positions whose entry is non-zero
                let mask = attention_mask.eq(0u32)?.unsqueeze(1)?.unsqueeze(1)?;
                model.forward(input_ids, &mask)
            }
            EncoderKind::ModernBert(model) => model.forward(input_ids, attention_mask),
            EncoderKind::XlmRoberta(model) => {
                let token_type_ids = input_ids.zeros_like()?;
                model.forward(input_ids, attention_mask, &token_type_ids, None, None, None)
            }
        }
    }
}
