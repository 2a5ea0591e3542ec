#![allow(dead_code)]

use std::path::Path;
use std::str::FromStr;

use candle_core::{DType, Device};
use candle_nn::{VarBuilder, VarMap};
use tokenizers::Tokenizer;
use transformer_lang::models::{Encoder, ModelConfig};
use transformer_lang::FeatureExtractionPipeline;

pub const HIDDEN_SIZE: usize = 8;

pub const BERT_CONFIG_JSON: &str = r#"{
  "architectures": ["BertModel"],
  "model_type": "bert",
  "vocab_size": 14,
  "hidden_size": 8,
  "num_hidden_layers": 1,
  "num_attention_heads": 2,
  "intermediate_size": 16,
  "hidden_act": "gelu",
  "hidden_dropout_prob": 0.0,
  "max_position_embeddings": 32,
  "type_vocab_size": 2,
  "initializer_range": 0.02,
  "layer_norm_eps": 1e-12,
  "pad_token_id": 0,
  "position_embedding_type": "absolute",
  "use_cache": true,
  "classifier_dropout": null
}"#;

pub const DISTILBERT_CONFIG_JSON: &str = r#"{
  "architectures": ["DistilBertModel"],
  "model_type": "distilbert",
  "vocab_size": 14,
  "dim": 8,
  "n_layers": 1,
  "n_heads": 2,
  "hidden_dim": 16,
  "activation": "gelu",
  "dropout": 0.0,
  "attention_dropout": 0.0,
  "max_position_embeddings": 32,
  "initializer_range": 0.02,
  "pad_token_id": 0,
  "sinusoidal_pos_embds": false
}"#;

pub const XLM_ROBERTA_CONFIG_JSON: &str = r#"{
  "architectures": ["XLMRobertaModel"],
  "model_type": "xlm-roberta",
  "vocab_size": 14,
  "hidden_size": 8,
  "num_hidden_layers": 1,
  "num_attention_heads": 2,
  "intermediate_size": 16,
  "hidden_act": "gelu",
  "hidden_dropout_prob": 0.0,
  "attention_probs_dropout_prob": 0.0,
  "max_position_embeddings": 40,
  "type_vocab_size": 1,
  "initializer_range": 0.02,
  "layer_norm_eps": 1e-5,
  "pad_token_id": 0,
  "bos_token_id": 2,
  "eos_token_id": 3,
  "position_embedding_type": "absolute",
  "use_cache": true,
  "classifier_dropout": null
}"#;

pub const MODERNBERT_CONFIG_JSON: &str = r#"{
  "architectures": ["ModernBertModel"],
  "model_type": "modernbert",
  "vocab_size": 14,
  "hidden_size": 8,
  "num_hidden_layers": 1,
  "num_attention_heads": 2,
  "intermediate_size": 16,
  "hidden_activation": "gelu",
  "max_position_embeddings": 32,
  "layer_norm_eps": 1e-5,
  "pad_token_id": 0,
  "global_attn_every_n_layers": 1,
  "global_rope_theta": 160000.0,
  "local_attention": 16,
  "local_rope_theta": 10000.0
}"#;

// Word-level vocabulary wrapped in [CLS] ... [SEP].
pub const TOKENIZER_JSON: &str = r#"{
  "version": "1.0",
  "truncation": null,
  "padding": null,
  "added_tokens": [],
  "normalizer": { "type": "Lowercase" },
  "pre_tokenizer": { "type": "Whitespace" },
  "post_processor": {
    "type": "BertProcessing",
    "sep": ["[SEP]", 3],
    "cls": ["[CLS]", 2]
  },
  "decoder": null,
  "model": {
    "type": "WordLevel",
    "vocab": {
      "[PAD]": 0, "[UNK]": 1, "[CLS]": 2, "[SEP]": 3,
      "today": 4, "is": 5, "a": 6, "nice": 7, "day": 8,
      "and": 9, "night": 10, "the": 11, "sky": 12, "clear": 13
    },
    "unk_token": "[UNK]"
  }
}"#;

/// A randomly initialised one-layer BERT and the pipeline wrapping it.
pub fn tiny_bert(max_length: Option<usize>) -> anyhow::Result<(VarMap, FeatureExtractionPipeline)> {
    tiny_model(BERT_CONFIG_JSON, max_length)
}

/// Build a BERT pipeline over existing weights; missing variables are initialised.
pub fn tiny_bert_from(
    varmap: &VarMap,
    max_length: Option<usize>,
) -> anyhow::Result<FeatureExtractionPipeline> {
    tiny_model_from(varmap, BERT_CONFIG_JSON, max_length)
}

/// A randomly initialised encoder of whichever architecture `config_json` describes.
pub fn tiny_model(
    config_json: &str,
    max_length: Option<usize>,
) -> anyhow::Result<(VarMap, FeatureExtractionPipeline)> {
    let varmap = VarMap::new();
    let pipeline = tiny_model_from(&varmap, config_json, max_length)?;
    Ok((varmap, pipeline))
}

pub fn tiny_model_from(
    varmap: &VarMap,
    config_json: &str,
    max_length: Option<usize>,
) -> anyhow::Result<FeatureExtractionPipeline> {
    let device = Device::Cpu;
    let vb = VarBuilder::from_varmap(varmap, DType::F32, &device);
    let config = ModelConfig::from_json(config_json)?;
    let model_id = format!("tiny-{}", config.architecture());
    let encoder = Encoder::load(&config, vb)?;
    let tokenizer = Tokenizer::from_str(TOKENIZER_JSON).map_err(anyhow::Error::msg)?;
    FeatureExtractionPipeline::from_parts(model_id, config, encoder, tokenizer, device, max_length)
}

/// Write config, tokenizer and weights into `dir` the way a Hub snapshot lays them out.
pub fn write_model_dir(dir: &Path, varmap: &VarMap) -> anyhow::Result<()> {
    write_model_dir_with(dir, BERT_CONFIG_JSON, varmap)
}

pub fn write_model_dir_with(dir: &Path, config_json: &str, varmap: &VarMap) -> anyhow::Result<()> {
    std::fs::write(dir.join("config.json"), config_json)?;
    std::fs::write(dir.join("tokenizer.json"), TOKENIZER_JSON)?;
    varmap.save(dir.join("model.safetensors"))?;
    Ok(())
}
